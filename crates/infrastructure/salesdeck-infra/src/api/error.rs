#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid API url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("no response from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: u16,
        /// `message` field of the error body, when the server sent one.
        message: Option<String>,
    },
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    InvalidUrl,
    NoResponse,
    ClientError,
    ServerError,
    Decode,
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::InvalidUrl { .. } => ApiErrorKind::InvalidUrl,
            ApiError::Transport { .. } => ApiErrorKind::NoResponse,
            ApiError::Status { status, .. } if *status >= 500 => ApiErrorKind::ServerError,
            ApiError::Status { .. } => ApiErrorKind::ClientError,
            ApiError::Decode { .. } => ApiErrorKind::Decode,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
