//! Level browser command.

use anyhow::{Context, Result};
use neodash::{AuthSession, LevelQuery, NeodashClient, Transport};

use crate::cli::{OutputArgs, OutputFormat, QueryArgs};
use crate::output::{emit, level_table};

impl From<&QueryArgs> for LevelQuery {
    fn from(args: &QueryArgs) -> Self {
        let query = LevelQuery::new()
            .page(args.page)
            .sort(args.sort)
            .with_thumbnails(args.thumbnails);
        match &args.search {
            Some(filter) => query.search_filter(filter.clone()),
            None => query,
        }
    }
}

pub fn run<T: Transport>(
    client: &NeodashClient<T>,
    session: &AuthSession,
    query: &LevelQuery,
    output: &OutputArgs,
) -> Result<()> {
    let levels = client
        .search_levels(session, query)
        .with_context(|| format!("Failed to fetch level page {}", query.page))?;

    emit(&levels, output.format, output.output.as_deref(), level_table)?;

    if output.format == OutputFormat::Table && output.output.is_none() {
        println!();
        println!(
            "Page {} ({}). Next: --page {}",
            query.page,
            query.sort,
            query.next_page().page
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use neodash::SortMode;

    #[test]
    fn test_query_from_args() {
        let args = QueryArgs {
            page: 4,
            sort: SortMode::Ratings,
            thumbnails: true,
            search: Some("lava".to_string()),
        };
        let query = LevelQuery::from(&args);
        assert_eq!(
            query,
            LevelQuery::new()
                .page(4)
                .sort(SortMode::Ratings)
                .with_thumbnails(true)
                .search_filter("lava")
        );
    }

    #[test]
    fn test_query_from_args_without_search() {
        let args = QueryArgs {
            page: 1,
            sort: SortMode::Recent,
            thumbnails: false,
            search: None,
        };
        assert_eq!(LevelQuery::from(&args), LevelQuery::default());
    }
}
