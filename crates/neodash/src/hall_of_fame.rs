//! Leaderboard decoding for `/getHallOfFame` responses.
//!
//! Format: `<nameB64>,<score>/<nameB64>,<score>/...`. Entry order is the
//! backend's ranking and is preserved as-is.

use serde::Serialize;
use tracing::debug;

use crate::codec;

/// Separator between leaderboard entries
pub const ENTRY_SEPARATOR: char = '/';
/// Separator between name and score within an entry
pub const FIELD_SEPARATOR: char = ',';

/// A ranked player on the hall of fame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    /// Player name, already Base64-decoded
    pub name: String,
    pub score: u64,
}

impl LeaderboardEntry {
    /// Parse a single `name,score` entry.
    ///
    /// Entries whose score is not a base-10 integer are rejected outright
    /// rather than scored as zero.
    pub fn parse(entry: &str) -> Option<Self> {
        let (name, score) = entry.split_once(FIELD_SEPARATOR)?;
        let score = score.trim().parse::<u64>().ok()?;
        Some(Self {
            name: codec::decode(name.trim()),
            score,
        })
    }
}

/// Decode a full hall of fame response body
pub fn parse_hall_of_fame(text: &str) -> Vec<LeaderboardEntry> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let segments: Vec<&str> = text.split(ENTRY_SEPARATOR).collect();
    let entries: Vec<LeaderboardEntry> = segments
        .iter()
        .filter_map(|segment| LeaderboardEntry::parse(segment))
        .collect();

    if entries.len() < segments.len() {
        debug!(
            "Dropped {} of {} hall of fame entries with unreadable scores",
            segments.len() - entries.len(),
            segments.len()
        );
    }
    entries
}

/// English ordinal for a 1-based rank (`1st`, `2nd`, `11th`, `23rd`)
pub fn ordinal(rank: usize) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", rank, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hall_of_fame_sample() {
        let entries = parse_hall_of_fame("Q0pFWg==,578/R2FtYTMw,299");
        assert_eq!(
            entries,
            vec![
                LeaderboardEntry {
                    name: "CJEZ".to_string(),
                    score: 578
                },
                LeaderboardEntry {
                    name: "Gama30".to_string(),
                    score: 299
                },
            ]
        );
    }

    #[test]
    fn test_non_numeric_score_is_dropped() {
        let entries = parse_hall_of_fame("X,abc/Y,12");
        assert_eq!(
            entries,
            vec![LeaderboardEntry {
                name: "Y".to_string(),
                score: 12
            }]
        );
    }

    #[test]
    fn test_negative_and_missing_scores_are_dropped() {
        let entries = parse_hall_of_fame("A,-5/B/C,/D,7");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "D");
    }

    #[test]
    fn test_extra_field_drops_entry() {
        // "1,2" is not a base-10 score
        let entries = parse_hall_of_fame("QQ==,1,2/ Qg== ,3\n");
        assert_eq!(
            entries,
            vec![LeaderboardEntry {
                name: "B".to_string(),
                score: 3
            }]
        );
    }

    #[test]
    fn test_empty_body_is_empty_list() {
        assert!(parse_hall_of_fame("").is_empty());
        assert!(parse_hall_of_fame("  \n").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let entries = parse_hall_of_fame("A,1/B,100/C,50/");
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(102), "102nd");
        assert_eq!(ordinal(111), "111th");
    }
}
