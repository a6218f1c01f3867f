//! HTTP transport seam.
//!
//! The client talks to the backend only through [`Transport`], so tests and
//! callers with their own HTTP stack can swap it out. A transport performs a
//! single POST with no retries and returns the complete body as text.

use crate::error::{Error, Result};
use crate::request::FormBody;

pub trait Transport: Send + Sync {
    /// POST `form` as `application/x-www-form-urlencoded` and return the body
    fn post_form(&self, url: &str, form: &FormBody) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn post_form(&self, url: &str, form: &FormBody) -> Result<String> {
        (**self).post_form(url, form)
    }
}

/// Interpret a complete response body as text; non-UTF-8 bodies are a hard failure
pub fn body_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| Error::NonTextResponse)
}

#[cfg(feature = "http")]
pub use http::HttpTransport;

#[cfg(feature = "http")]
mod http {
    use super::{Transport, body_text};
    use crate::config::ClientConfig;
    use crate::error::Result;
    use crate::request::FormBody;

    /// Blocking transport backed by a `ureq` agent
    #[derive(Debug, Clone)]
    pub struct HttpTransport {
        agent: ureq::Agent,
        user_agent: String,
    }

    impl HttpTransport {
        pub fn new(config: &ClientConfig) -> Self {
            let agent_config = ureq::Agent::config_builder()
                .timeout_global(Some(config.timeout))
                .build();
            let agent: ureq::Agent = agent_config.into();

            Self {
                agent,
                user_agent: config.user_agent.clone(),
            }
        }
    }

    impl Transport for HttpTransport {
        fn post_form(&self, url: &str, form: &FormBody) -> Result<String> {
            let mut response = self
                .agent
                .post(url)
                .header("User-Agent", &self.user_agent)
                .send_form(form.iter())?;

            let bytes = response.body_mut().read_to_vec()?;
            body_text(bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_text_utf8() {
        assert_eq!(body_text(b"Q0pFWg==,578".to_vec()).unwrap(), "Q0pFWg==,578");
        assert_eq!(body_text(Vec::new()).unwrap(), "");
    }

    #[test]
    fn test_non_utf8_body_is_non_text_response() {
        let err = body_text(vec![0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, Error::NonTextResponse));
        assert!(!err.is_transport());
    }
}
