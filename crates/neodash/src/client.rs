//! Neodash service client.
//!
//! Every call is one request/response round trip with no retry and no
//! cached state: the session is passed in explicitly and decoding is a pure
//! function of the response body. A client can be shared across threads and
//! used for concurrent calls.

use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::fields::parse_fields;
use crate::hall_of_fame::{LeaderboardEntry, parse_hall_of_fame};
use crate::level::{LevelSummary, parse_level_list};
use crate::request::{
    AUTHENTICATE_ENDPOINT, FormBody, HALL_OF_FAME_ENDPOINT, LEVEL_LIST_ENDPOINT, LevelQuery,
    authenticate_form, hall_of_fame_form, level_list_form,
};
use crate::session::AuthSession;
use crate::transport::Transport;

#[cfg(feature = "http")]
use crate::transport::HttpTransport;

/// Client over the default `ureq` transport
#[cfg(feature = "http")]
pub type HttpClient = NeodashClient<HttpTransport>;

pub struct NeodashClient<T: Transport> {
    config: ClientConfig,
    transport: T,
}

#[cfg(feature = "http")]
impl NeodashClient<HttpTransport> {
    /// Create a client that talks HTTP to `config.base_url`
    pub fn new(config: ClientConfig) -> Self {
        let transport = HttpTransport::new(&config);
        Self { config, transport }
    }
}

impl<T: Transport> NeodashClient<T> {
    /// Create a client over a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn post(&self, endpoint: &str, form: &FormBody) -> Result<String> {
        let url = self.config.endpoint_url(endpoint);
        debug!("POST {} fields={:?}", url, form.keys());
        let body = self.transport.post_form(&url, form)?;
        debug!("{} responded with {} bytes", endpoint, body.len());
        Ok(body)
    }

    /// Authenticate with the configured protocol version.
    ///
    /// `identity` and `display_name` are raw text; they are Base64-encoded
    /// before transmission and must not be pre-encoded.
    pub fn authenticate(&self, identity: &str, display_name: &str) -> Result<AuthSession> {
        self.authenticate_with_version(identity, display_name, &self.config.protocol_version)
    }

    /// Authenticate with an explicit protocol version
    pub fn authenticate_with_version(
        &self,
        identity: &str,
        display_name: &str,
        protocol_version: &str,
    ) -> Result<AuthSession> {
        let form = authenticate_form(identity, display_name, protocol_version);
        let body = self.post(AUTHENTICATE_ENDPOINT, &form)?;
        let session = AuthSession::from_fields(&parse_fields(body.trim()))?;
        info!("Authenticated as uniqueId {}", session.unique_id);
        Ok(session)
    }

    /// Fetch the hall of fame in backend ranking order
    pub fn get_hall_of_fame(&self, session: &AuthSession) -> Result<Vec<LeaderboardEntry>> {
        let body = self.post(HALL_OF_FAME_ENDPOINT, &hall_of_fame_form(session))?;
        let entries = parse_hall_of_fame(&body);
        debug!("Decoded {} hall of fame entries", entries.len());
        Ok(entries)
    }

    /// Fetch one page of levels
    pub fn search_levels(
        &self,
        session: &AuthSession,
        query: &LevelQuery,
    ) -> Result<Vec<LevelSummary>> {
        let body = self.post(LEVEL_LIST_ENDPOINT, &level_list_form(session, query))?;
        let levels = parse_level_list(&body);
        debug!(
            "Decoded {} levels for page {} ({})",
            levels.len(),
            query.page,
            query.sort
        );
        Ok(levels)
    }
}
