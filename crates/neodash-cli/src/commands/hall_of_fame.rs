//! Hall of fame command.

use anyhow::{Context, Result};
use neodash::{AuthSession, NeodashClient, Transport};

use crate::cli::OutputArgs;
use crate::output::{emit, leaderboard_table};

pub fn run<T: Transport>(
    client: &NeodashClient<T>,
    session: &AuthSession,
    output: &OutputArgs,
    limit: Option<usize>,
) -> Result<()> {
    let mut entries = client
        .get_hall_of_fame(session)
        .context("Failed to fetch hall of fame")?;

    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    emit(
        &entries,
        output.format,
        output.output.as_deref(),
        leaderboard_table,
    )
}
