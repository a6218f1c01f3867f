use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server returned HTTP status {0}")]
    HttpStatus(u16),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Response body is not text")]
    NonTextResponse,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error came from the network layer rather than decoding
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::HttpStatus(_))
    }

    /// Check if the backend rejected or garbled an authentication reply
    pub fn is_authentication(&self) -> bool {
        matches!(self, Error::Authentication(_))
    }
}

#[cfg(feature = "http")]
impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => Error::HttpStatus(status),
            other => Error::Transport(other.to_string()),
        }
    }
}
