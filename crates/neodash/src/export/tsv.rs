//! TSV export format implementation

use crate::hall_of_fame::LeaderboardEntry;
use crate::level::LevelSummary;

use super::format::ExportFormat;

/// Tab-separated exporter with a header row
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvExporter;

/// Tabs and newlines inside a value would break the row
fn clean(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

impl ExportFormat<LeaderboardEntry> for TsvExporter {
    fn header(&self) -> Option<String> {
        Some("Name\tScore".to_string())
    }

    fn format_row(&self, entry: &LeaderboardEntry) -> String {
        format!("{}\t{}", clean(&entry.name), entry.score)
    }
}

impl ExportFormat<LevelSummary> for TsvExporter {
    fn header(&self) -> Option<String> {
        Some("Title\tAuthor\tRating\tDifficulty\tDownloads\tLevelId".to_string())
    }

    fn format_row(&self, level: &LevelSummary) -> String {
        let downloads = level
            .downloads
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            clean(&level.title()),
            clean(&level.author_name()),
            level.rating_label(),
            clean(level.difficulty.as_deref().unwrap_or("-")),
            downloads,
            clean(&level.level_id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hall_of_fame::parse_hall_of_fame;
    use crate::level::parse_level_list;

    #[test]
    fn test_tsv_leaderboard() {
        let entries = parse_hall_of_fame("Q0pFWg==,578/R2FtYTMw,299");
        let output = TsvExporter.format_rows(&entries);
        assert_eq!(output, "Name\tScore\nCJEZ\t578\nGama30\t299\n");
    }

    #[test]
    fn test_tsv_level_row() {
        let levels = parse_level_list(
            "levelId=TGF2YSBSdW4=&levelAuthor=Q0pFWg==&levelRating=4.31&levelDifficulty=hard&levelDownloads=12\\levelId=U2t5&levelRating=-1&levelDifficulty=null&levelDownloads=?",
        );
        assert_eq!(
            TsvExporter.format_row(&levels[0]),
            "Lava Run\tCJEZ\t4.3\thard\t12\tTGF2YSBSdW4="
        );
        assert_eq!(TsvExporter.format_row(&levels[1]), "Sky\t\t-\t-\t-\tU2t5");
    }

    #[test]
    fn test_tsv_empty_rows_still_has_header() {
        let levels: Vec<LevelSummary> = Vec::new();
        assert_eq!(
            TsvExporter.format_rows(&levels),
            "Title\tAuthor\tRating\tDifficulty\tDownloads\tLevelId\n"
        );
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hall_of_fame.tsv");
        let entries = parse_hall_of_fame("Q0pFWg==,578");
        TsvExporter.write_to(&path, &entries).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Name\tScore\nCJEZ\t578\n"
        );
    }
}
