//! # neodash
//!
//! Typed client for the Neodash game-service backend.
//!
//! The backend speaks an ad-hoc text format rather than JSON. This crate
//! provides:
//! - A lenient Base64 codec for names and credentials
//! - Decoders for `key=value&...` records, level lists and the hall of fame
//! - Request builders and a [`NeodashClient`] that ties them to HTTP
//!
//! ## Feature Flags
//!
//! - `http` (default): Enables [`HttpTransport`], a blocking `ureq` transport.
//!   Without it, callers provide their own [`Transport`].

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod export;
pub mod fields;
pub mod hall_of_fame;
pub mod level;
pub mod prelude;
pub mod request;
pub mod session;
pub mod transport;

pub use client::NeodashClient;
#[cfg(feature = "http")]
pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use export::{ExportFormat, JsonExporter, TsvExporter};
pub use fields::{Fields, parse_fields};
pub use hall_of_fame::{LeaderboardEntry, ordinal, parse_hall_of_fame};
pub use level::{LevelSummary, SortMode, parse_level_list};
pub use request::{FormBody, LevelQuery};
pub use session::{AuthSession, SessionState};
#[cfg(feature = "http")]
pub use transport::HttpTransport;
pub use transport::Transport;
