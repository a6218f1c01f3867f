//! Overview command: hall of fame and a level page fetched concurrently.

use std::thread;

use anyhow::{Context, Result, anyhow};
use neodash::{AuthSession, LevelQuery, NeodashClient, Transport};
use tracing::debug;

use crate::output::{leaderboard_table, level_table};

pub fn run<T: Transport>(
    client: &NeodashClient<T>,
    session: &AuthSession,
    query: &LevelQuery,
    top: usize,
) -> Result<()> {
    debug!("Fetching hall of fame and level page {} in parallel", query.page);

    let (hall, levels) = thread::scope(|scope| {
        let hall = scope.spawn(|| client.get_hall_of_fame(session));
        let levels = scope.spawn(|| client.search_levels(session, query));
        (hall.join(), levels.join())
    });

    let mut hall = hall
        .map_err(|_| anyhow!("Hall of fame request panicked"))?
        .context("Failed to fetch hall of fame")?;
    let levels = levels
        .map_err(|_| anyhow!("Level request panicked"))?
        .context("Failed to fetch levels")?;

    hall.truncate(top);

    println!("== Hall of Fame (top {}) ==", top);
    print!("{}", leaderboard_table(&hall));
    println!();
    println!("== Levels: page {} ({}) ==", query.page, query.sort);
    print!("{}", level_table(&levels));
    Ok(())
}
