//! Authenticated session values.
//!
//! The client never stores a session; callers own it and pass it into every
//! call. [`SessionState`] is provided for callers that want to track the
//! login lifecycle themselves.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::fields::{Fields, non_empty};

pub const UNIQUE_ID_KEY: &str = "uniqueId";
pub const TOKEN_KEY: &str = "token";

/// Credentials returned by a successful `/authenticate` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub unique_id: u64,
    pub token: String,
}

impl AuthSession {
    pub fn new(unique_id: u64, token: impl Into<String>) -> Self {
        Self {
            unique_id,
            token: token.into(),
        }
    }

    /// Project an authentication response into a session.
    ///
    /// Fails when `uniqueId` is missing, non-numeric or zero, or when
    /// `token` is missing or empty.
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        let unique_id = match non_empty(fields, UNIQUE_ID_KEY) {
            Some(raw) => raw.trim().parse::<u64>().ok().filter(|id| *id != 0),
            None => None,
        };
        let Some(unique_id) = unique_id else {
            warn!("Authentication response has no usable uniqueId");
            return Err(Error::Authentication(format!(
                "response is missing a valid {}",
                UNIQUE_ID_KEY
            )));
        };

        let Some(token) = non_empty(fields, TOKEN_KEY) else {
            warn!("Authentication response has no token");
            return Err(Error::Authentication(format!(
                "response is missing {}",
                TOKEN_KEY
            )));
        };

        Ok(Self::new(unique_id, token.trim()))
    }
}

/// Login lifecycle as seen by a caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticating,
    Authenticated(AuthSession),
}

impl SessionState {
    /// Mark a login attempt as in flight
    pub fn begin(&mut self) {
        *self = SessionState::Authenticating;
    }

    /// Settle an in-flight login with the outcome of `authenticate`.
    ///
    /// Has no effect unless a login is in flight.
    pub fn complete(&mut self, outcome: &Result<AuthSession>) {
        if *self != SessionState::Authenticating {
            return;
        }
        *self = match outcome {
            Ok(session) => SessionState::Authenticated(session.clone()),
            Err(_) => SessionState::Unauthenticated,
        };
    }

    /// Drop the session
    pub fn sign_out(&mut self) {
        *self = SessionState::Unauthenticated;
    }

    pub fn session(&self) -> Option<&AuthSession> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}
