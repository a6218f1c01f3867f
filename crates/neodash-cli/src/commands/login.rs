//! Login command: authenticate and persist the session.

use std::path::Path;

use anyhow::{Context, Result};
use neodash::{NeodashClient, SessionState, Transport};

use crate::credentials::{self, Credentials};

pub fn run<T: Transport>(
    client: &NeodashClient<T>,
    steam_id: &str,
    display_name: &str,
    credentials_path: &Path,
) -> Result<()> {
    let mut state = SessionState::default();
    state.begin();
    let outcome = client.authenticate(steam_id, display_name);
    state.complete(&outcome);

    let session = outcome.context("Login failed")?;

    let saved = Credentials {
        endpoint: client.config().base_url.clone(),
        unique_id: session.unique_id,
        token: session.token,
    };
    credentials::save(credentials_path, &saved)?;

    println!("Login successful! (uniqueId: {})", saved.unique_id);
    println!("Credentials saved to: {}", credentials_path.display());
    Ok(())
}
