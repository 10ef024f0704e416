use thiserror::Error;

/// Failures that turn a ride request into an error response.
#[derive(Debug, Error)]
pub enum RideError {
    #[error("Authorization not configured")]
    Unauthorized,

    #[error("{0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("{0}")]
    Persistence(String),
}

impl RideError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

pub type Result<T> = std::result::Result<T, RideError>;
