//! Table rendering and format dispatch for command output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use neodash::{ExportFormat, JsonExporter, LeaderboardEntry, LevelSummary, TsvExporter, ordinal};
use tracing::info;

use crate::cli::OutputFormat;

/// Column width for names and titles in tables
const NAME_WIDTH: usize = 24;

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('~');
        cut
    }
}

pub fn leaderboard_table(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No hall of fame entries.\n".to_string();
    }
    let mut output = String::new();
    for (index, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "{:>6}  {:<width$}  {:>8}\n",
            ordinal(index + 1),
            truncate(&entry.name, NAME_WIDTH),
            entry.score,
            width = NAME_WIDTH
        ));
    }
    output
}

pub fn level_table(levels: &[LevelSummary]) -> String {
    if levels.is_empty() {
        return "No levels on this page.\n".to_string();
    }
    let mut output = format!(
        "{:<width$}  {:<16}  {:>6}  {:<10}  {:>9}\n",
        "TITLE",
        "AUTHOR",
        "RATING",
        "DIFFICULTY",
        "DOWNLOADS",
        width = NAME_WIDTH
    );
    for level in levels {
        let downloads = level
            .downloads
            .map(|d| d.to_string())
            .unwrap_or_else(|| "?".to_string());
        output.push_str(&format!(
            "{:<width$}  {:<16}  {:>6}  {:<10}  {:>9}\n",
            truncate(&level.title(), NAME_WIDTH),
            truncate(&level.author_name(), 16),
            level.rating_label(),
            level.difficulty.as_deref().unwrap_or("-"),
            downloads,
            width = NAME_WIDTH
        ));
    }
    output
}

/// Print records to stdout or write them to `output`
pub fn emit<T>(
    records: &[T],
    format: OutputFormat,
    output: Option<&Path>,
    table: fn(&[T]) -> String,
) -> Result<()>
where
    TsvExporter: ExportFormat<T>,
    JsonExporter: ExportFormat<T>,
{
    match (format, output) {
        (OutputFormat::Tsv, Some(path)) => TsvExporter.write_to(path, records)?,
        (OutputFormat::Json, Some(path)) => JsonExporter.write_to(path, records)?,
        (OutputFormat::Table, Some(path)) => {
            fs::write(path, table(records)).context("Failed to write output file")?;
            info!("Exported {} records to {}", records.len(), path.display());
        }
        (OutputFormat::Tsv, None) => print!("{}", TsvExporter.format_rows(records)),
        (OutputFormat::Json, None) => print!("{}", JsonExporter.format_rows(records)),
        (OutputFormat::Table, None) => print!("{}", table(records)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use neodash::{parse_hall_of_fame, parse_level_list};

    #[test]
    fn test_leaderboard_table_ranks() {
        let entries = parse_hall_of_fame("Q0pFWg==,578/R2FtYTMw,299");
        let table = leaderboard_table(&entries);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("1st"));
        assert!(lines[0].contains("CJEZ"));
        assert!(lines[0].ends_with("578"));
        assert!(lines[1].trim_start().starts_with("2nd"));
    }

    #[test]
    fn test_level_table_unknown_values() {
        let levels = parse_level_list("levelId=U2t5&levelRating=-1&levelDifficulty=null&levelDownloads=x");
        let table = level_table(&levels);
        let row = table.lines().nth(1).unwrap();
        assert!(row.starts_with("Sky"));
        assert!(row.contains(" - "));
        assert!(row.ends_with('?'));
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(leaderboard_table(&[]), "No hall of fame entries.\n");
        assert_eq!(level_table(&[]), "No levels on this page.\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd~");
    }

    #[test]
    fn test_emit_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("levels.json");
        let levels = parse_level_list("levelId=a\\levelId=b");
        emit(&levels, OutputFormat::Json, Some(&path), level_table).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_emit_writes_table_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hall.txt");
        let entries = parse_hall_of_fame("Q0pFWg==,578");
        emit(&entries, OutputFormat::Table, Some(&path), leaderboard_table).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), leaderboard_table(&entries));
    }
}
