//! Level list decoding for `/requestLevelList` responses.
//!
//! A response is a run of records separated by `\`, each record being a
//! `key=value&...` segment. Sentinels (`-1` rating, `null` difficulty) are
//! mapped to `None` here and nowhere else.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::debug;

use crate::codec;
use crate::fields::{Fields, non_empty, parse_fields};

/// Separator between level records in a list response
pub const RECORD_SEPARATOR: char = '\\';

/// Wire token the backend uses for "no difficulty"
const NULL_TOKEN: &str = "null";

/// Field names used in level records
pub mod keys {
    pub const LEVEL_ID: &str = "levelId";
    pub const AUTHOR: &str = "levelAuthor";
    pub const RATING: &str = "levelRating";
    pub const DIFFICULTY: &str = "levelDifficulty";
    pub const DOWNLOADS: &str = "levelDownloads";
    pub const THUMBNAIL: &str = "levelThumbnail";
    pub const TOP_TIMES: &str = "levelTopTimes";
}

/// Server-side ordering of a level list
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortMode {
    #[default]
    Recent,
    Ratings,
    Downloads,
}

impl SortMode {
    /// Wire token sent as `sortBy`
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// One level entry from a level list page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelSummary {
    /// Opaque level identifier, usually Base64 text
    pub level_id: String,
    /// Base64-encoded author name
    pub author: String,
    /// Average rating; `None` when the level is unrated
    pub rating: Option<f64>,
    /// Difficulty label; `None` when the backend reports `null`
    pub difficulty: Option<String>,
    /// Download count; `None` when the backend sent something unreadable
    pub downloads: Option<u64>,
    /// Hex-encoded thumbnail, only present when thumbnails were requested
    pub thumbnail: Option<String>,
    /// Top times blob, passed through undecoded
    pub top_times: Option<String>,
}

impl LevelSummary {
    /// Project a decoded record into a level.
    ///
    /// Returns `None` when the record has no `levelId`, which is how
    /// trailing fragments and half-written records are discarded.
    pub fn from_fields(fields: &Fields) -> Option<Self> {
        let level_id = non_empty(fields, keys::LEVEL_ID)?;

        Some(Self {
            level_id: level_id.to_string(),
            author: fields.get(keys::AUTHOR).cloned().unwrap_or_default(),
            rating: non_empty(fields, keys::RATING).and_then(parse_rating),
            difficulty: non_empty(fields, keys::DIFFICULTY)
                .filter(|value| *value != NULL_TOKEN)
                .map(str::to_string),
            downloads: non_empty(fields, keys::DOWNLOADS).and_then(|v| v.parse().ok()),
            thumbnail: non_empty(fields, keys::THUMBNAIL).map(str::to_string),
            top_times: non_empty(fields, keys::TOP_TIMES).map(str::to_string),
        })
    }

    /// Display title: the level id run through the lenient Base64 decode
    pub fn title(&self) -> String {
        codec::decode(&self.level_id)
    }

    /// Display author name
    pub fn author_name(&self) -> String {
        codec::decode(&self.author)
    }

    /// Rating with one decimal place, or `-` when unrated
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) => format!("{:.1}", rating),
            None => "-".to_string(),
        }
    }

    /// Decode the hex thumbnail into raw bytes
    pub fn thumbnail_bytes(&self) -> Option<Vec<u8>> {
        self.thumbnail.as_deref().and_then(decode_hex)
    }
}

/// Unrated (`-1`), non-numeric, and non-finite ratings all map to `None`
fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|rating| rating.is_finite() && *rating >= 0.0)
}

fn decode_hex(text: &str) -> Option<Vec<u8>> {
    if !text.is_ascii() || text.len() % 2 != 0 {
        return None;
    }
    (0..text.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&text[i..i + 2], 16).ok())
        .collect()
}

/// Decode a full level list response body
pub fn parse_level_list(text: &str) -> Vec<LevelSummary> {
    let mut total = 0usize;
    let levels: Vec<LevelSummary> = text
        .split(RECORD_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            total += 1;
            LevelSummary::from_fields(&parse_fields(segment))
        })
        .collect();

    if levels.len() < total {
        debug!(
            "Dropped {} of {} level records without a levelId",
            total - levels.len(),
            total
        );
    }
    levels
}
