//! Key-value slots for persisted progress.
//!
//! A slot is one opaque string value under one string key. The progression
//! store keeps a single slot per user, keyed `<prefix>_<user_id>`.

use crate::error::EcoQuestError;
use std::collections::HashMap;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Backend holding persisted slots.
pub trait SlotStorage {
    /// Read a slot; `Ok(None)` if it was never written or has been removed
    fn read(&self, key: &str) -> Result<Option<String>, EcoQuestError>;

    /// Replace the slot's whole value
    fn write(&mut self, key: &str, value: &str) -> Result<(), EcoQuestError>;

    /// Remove the slot. Removing a missing slot succeeds.
    fn remove(&mut self, key: &str) -> Result<(), EcoQuestError>;
}

/// Slot key for a user: fixed prefix, underscore, user id
pub fn slot_key(prefix: &str, user_id: &str) -> String {
    format!("{}_{}", prefix, user_id)
}

/// One JSON file per slot inside a data directory
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing a slot, always directly inside the data directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, EcoQuestError> {
        if key.is_empty() {
            return Err(EcoQuestError::Storage("empty slot key".to_string()));
        }
        Ok(self.dir.join(format!("{}.json", file_stem(key))))
    }
}

/// Percent-encode every byte outside `[A-Za-z0-9_.-]`, plus a leading dot,
/// so any key maps to exactly one plain file name.
fn file_stem(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for (i, byte) in key.bytes().enumerate() {
        let plain = byte.is_ascii_alphanumeric()
            || matches!(byte, b'_' | b'-')
            || (byte == b'.' && i > 0);
        if plain {
            stem.push(byte as char);
        } else {
            let _ = write!(stem, "%{:02X}", byte);
        }
    }
    stem
}

impl SlotStorage for FileSlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>, EcoQuestError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), EcoQuestError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Write to temp then rename, so a crash never leaves half a slot
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), EcoQuestError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process slots, for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    slots: HashMap<String, String>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>, EcoQuestError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), EcoQuestError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), EcoQuestError> {
        self.slots.remove(key);
        Ok(())
    }
}
