//! JSON export format implementation

use serde_json::{Value as JsonValue, json};

use crate::hall_of_fame::LeaderboardEntry;
use crate::level::LevelSummary;

use super::format::ExportFormat;

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

/// JSON object for a hall of fame entry
pub fn leaderboard_json_entry(entry: &LeaderboardEntry) -> JsonValue {
    json!({
        "name": entry.name,
        "score": entry.score,
    })
}

/// JSON object for a level; unknown values are `null`
pub fn level_json_entry(level: &LevelSummary) -> JsonValue {
    json!({
        "level_id": level.level_id,
        "title": level.title(),
        "author": level.author_name(),
        "rating": level.rating,
        "difficulty": level.difficulty,
        "downloads": level.downloads,
        "thumbnail": level.thumbnail,
        "top_times": level.top_times,
    })
}

impl ExportFormat<LeaderboardEntry> for JsonExporter {
    fn header(&self) -> Option<String> {
        None // NDJSON has no header
    }

    fn format_row(&self, entry: &LeaderboardEntry) -> String {
        leaderboard_json_entry(entry).to_string()
    }
}

impl ExportFormat<LevelSummary> for JsonExporter {
    fn header(&self) -> Option<String> {
        None
    }

    fn format_row(&self, level: &LevelSummary) -> String {
        level_json_entry(level).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::parse_level_list;

    #[test]
    fn test_json_leaderboard_rows() {
        let entries = vec![
            LeaderboardEntry {
                name: "CJEZ".to_string(),
                score: 578,
            },
            LeaderboardEntry {
                name: "Gama30".to_string(),
                score: 299,
            },
        ];
        let output = JsonExporter.format_rows(&entries);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: JsonValue = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, json!({"name": "CJEZ", "score": 578}));
    }

    #[test]
    fn test_json_level_row_nulls() {
        let levels = parse_level_list("levelId=U2t5&levelRating=-1&levelDifficulty=null");
        let row: JsonValue = serde_json::from_str(&JsonExporter.format_row(&levels[0])).unwrap();
        assert_eq!(row["level_id"], "U2t5");
        assert_eq!(row["title"], "Sky");
        assert!(row["rating"].is_null());
        assert!(row["difficulty"].is_null());
        assert!(row["downloads"].is_null());
    }

    #[test]
    fn test_json_rows_are_never_blank() {
        let levels = parse_level_list("levelId=a&levelRating=4.5&levelDownloads=3\\levelId=b");
        let output = JsonExporter.format_rows(&levels);
        for line in output.lines() {
            assert!(!line.is_empty());
            assert!(serde_json::from_str::<JsonValue>(line).unwrap().is_object());
        }
    }
}
