//! Password hashing.
//!
//! ```bash
//! compass-util encrypt root
//! compass-util encrypt root --salt c29tZXNhbHQ
//! compass-util verify root '$argon2id$v=19$...'
//! ```

use crate::utils::crypt::{encrypt, verify};
use anyhow::{Context, Result};

pub fn run_encrypt(value: &str, salt: Option<&str>) -> Result<()> {
    let hash = encrypt(value, salt).context("Failed to hash value")?;
    println!("{}", hash);
    Ok(())
}

pub fn run_verify(value: &str, hash: &str) -> Result<()> {
    if verify(value, hash).context("Failed to verify value")? {
        println!("match");
        Ok(())
    } else {
        anyhow::bail!("Value does not match hash")
    }
}
