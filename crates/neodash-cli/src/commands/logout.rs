//! Logout command.

use std::path::Path;

use anyhow::Result;

use crate::credentials;

pub fn run(credentials_path: &Path) -> Result<()> {
    if credentials::remove(credentials_path)? {
        println!("Logged out. Removed {}", credentials_path.display());
    } else {
        println!("Not logged in.");
    }
    Ok(())
}
