//! Exit codes for ecoquestctl

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code when `unlocked` answers "no". Nothing else exits with 1.
pub const EXIT_LOCKED: i32 = 1;

/// Exit code when a destructive command was not confirmed
pub const EXIT_NOT_CONFIRMED: i32 = 2;

/// Exit code for bad arguments (unknown game, bad level), bad config, or a
/// library error
pub const EXIT_USAGE: i32 = 64;

/// Exit code for any other failure
pub const EXIT_GENERAL_ERROR: i32 = 70;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [EXIT_SUCCESS, EXIT_LOCKED, EXIT_NOT_CONFIRMED, EXIT_USAGE, EXIT_GENERAL_ERROR];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
