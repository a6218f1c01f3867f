//! Saved session credentials (`<config dir>/neodash/credentials`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use neodash::AuthSession;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::SessionArgs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub endpoint: String,
    pub unique_id: u64,
    pub token: String,
}

pub fn credentials_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Failed to determine config directory")?;
    Ok(config_dir.join("neodash").join("credentials"))
}

pub fn save(path: &Path, credentials: &Credentials) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    let content =
        toml::to_string_pretty(credentials).context("Failed to serialize credentials")?;
    fs::write(path, content).context("Failed to write credentials file")?;
    Ok(())
}

/// Load credentials, treating a missing or unreadable file as "not logged in"
pub fn load(path: &Path) -> Option<Credentials> {
    let content = fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(credentials) => Some(credentials),
        Err(e) => {
            debug!("Ignoring malformed credentials file: {}", e);
            None
        }
    }
}

/// Remove saved credentials; returns whether a file was removed
pub fn remove(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).context("Failed to remove credentials file"),
    }
}

/// Resolve the session: args > credentials file
pub fn resolve_session(args: &SessionArgs, saved: Option<&Credentials>) -> Result<AuthSession> {
    let unique_id = match args.unique_id {
        Some(id) => id,
        None => saved.map(|c| c.unique_id).context(
            "No session. Use --unique-id/--token, NEODASH_UNIQUE_ID/NEODASH_TOKEN env, or run `neodash login` first.",
        )?,
    };

    let token = match &args.token {
        Some(t) => t.clone(),
        None => saved.map(|c| c.token.clone()).context(
            "No token. Use --token, NEODASH_TOKEN env, or run `neodash login` first.",
        )?,
    };

    Ok(AuthSession::new(unique_id, token))
}
