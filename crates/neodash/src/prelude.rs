//! Prelude module for convenient imports
//!
//! ```ignore
//! use neodash::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Client types: `NeodashClient`, `ClientConfig`, `Transport`
//! - Records: `AuthSession`, `LeaderboardEntry`, `LevelSummary`
//! - Queries: `LevelQuery`, `SortMode`
//! - Error handling: `Error`, `Result`

pub use crate::client::NeodashClient;
pub use crate::config::ClientConfig;
pub use crate::error::{Error, Result};
pub use crate::export::{ExportFormat, JsonExporter, TsvExporter};
pub use crate::hall_of_fame::LeaderboardEntry;
pub use crate::level::{LevelSummary, SortMode};
pub use crate::request::LevelQuery;
pub use crate::session::{AuthSession, SessionState};
pub use crate::transport::Transport;

#[cfg(feature = "http")]
pub use crate::transport::HttpTransport;
