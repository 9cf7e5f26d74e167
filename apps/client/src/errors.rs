use thiserror::Error;

/// Faults that abort an operation before it can render or notify.
///
/// A non-success HTTP status is not an error here: operations branch on it
/// and report it through the notification port instead.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request failed before any response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response arrived but its body could not be read.
    #[error("Response body error: {0}")]
    Body(reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// True once the backend has answered, even if the answer was unusable.
    pub fn after_response(&self) -> bool {
        !matches!(self, ClientError::Http(_))
    }
}
