use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("customer id is required for {operation}")]
    MissingId { operation: &'static str },
    #[error("{method} {url} failed with status {status}: {body}")]
    Status {
        method: String,
        url: String,
        status: u16,
        body: String,
    },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid server url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl ClientError {
    /// True when the request never left the client.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::MissingId { .. } | Self::InvalidBaseUrl(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
