//! Exposes the release version to the binary as ECOQUEST_VERSION.

fn main() {
    let version = std::env::var("ECOQUEST_VERSION")
        .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=ECOQUEST_VERSION={}", version);
    println!("cargo:rerun-if-env-changed=ECOQUEST_VERSION");
}
