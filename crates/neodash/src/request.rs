//! Outbound request construction.
//!
//! Each builder returns the endpoint path and the form fields to send as an
//! `application/x-www-form-urlencoded` body. Percent-encoding is done by the
//! transport; values here are final wire values.

use crate::codec;
use crate::level::SortMode;
use crate::session::{AuthSession, TOKEN_KEY, UNIQUE_ID_KEY};

pub const AUTHENTICATE_ENDPOINT: &str = "authenticate";
pub const HALL_OF_FAME_ENDPOINT: &str = "getHallOfFame";
pub const LEVEL_LIST_ENDPOINT: &str = "requestLevelList";

/// Protocol version sent with `/authenticate` when none is configured
pub const DEFAULT_PROTOCOL_VERSION: &str = "102a";

/// Ordered form fields for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(&'static str, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((key, value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Field names in send order (safe to log, unlike values)
    pub fn keys(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(k, _)| *k).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parameters for a level list search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelQuery {
    /// 1-based page number, passed through untouched
    pub page: u32,
    pub sort: SortMode,
    pub with_thumbnails: bool,
    /// Free-text filter; empty filters are not sent
    pub search_filter: Option<String>,
}

impl Default for LevelQuery {
    fn default() -> Self {
        Self {
            page: 1,
            sort: SortMode::Recent,
            with_thumbnails: false,
            search_filter: None,
        }
    }
}

impl LevelQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_thumbnails(mut self, enabled: bool) -> Self {
        self.with_thumbnails = enabled;
        self
    }

    pub fn search_filter(mut self, filter: impl Into<String>) -> Self {
        self.search_filter = Some(filter.into());
        self
    }

    /// Same query, one page further
    pub fn next_page(&self) -> Self {
        self.clone().page(self.page.saturating_add(1))
    }

    /// Same query, one page back (never below page 1)
    pub fn previous_page(&self) -> Self {
        self.clone().page(self.page.saturating_sub(1).max(1))
    }
}

/// Build the `/authenticate` form. Identity and display name are always
/// Base64-encoded here; callers pass raw text.
pub fn authenticate_form(identity: &str, display_name: &str, protocol_version: &str) -> FormBody {
    FormBody::new()
        .field("steamId", codec::encode(identity))
        .field("displayName", codec::encode(display_name))
        .field("ver", protocol_version)
}

fn session_form(session: &AuthSession) -> FormBody {
    FormBody::new()
        .field(UNIQUE_ID_KEY, session.unique_id.to_string())
        .field(TOKEN_KEY, session.token.clone())
}

/// Build the `/getHallOfFame` form
pub fn hall_of_fame_form(session: &AuthSession) -> FormBody {
    session_form(session)
}

/// Build the `/requestLevelList` form
pub fn level_list_form(session: &AuthSession, query: &LevelQuery) -> FormBody {
    let form = session_form(session)
        .field("page", query.page.to_string())
        .field("sortBy", query.sort.as_str())
        .field(
            "withThumbnails",
            if query.with_thumbnails { "TRUE" } else { "FALSE" },
        );

    match query.search_filter.as_deref() {
        Some(filter) if !filter.is_empty() => form.field("searchFilter", filter),
        _ => form,
    }
}
