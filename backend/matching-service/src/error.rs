use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, MatchingError>;

#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("Invalid year for profile {profile_id}: {value:?}")]
    InvalidYear { profile_id: Uuid, value: String },

    #[error("Profile not found: {0}")]
    ProfileNotFound(Uuid),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl From<serde_json::Error> for MatchingError {
    fn from(err: serde_json::Error) -> Self {
        MatchingError::Snapshot(err.to_string())
    }
}

impl From<std::io::Error> for MatchingError {
    fn from(err: std::io::Error) -> Self {
        MatchingError::Snapshot(err.to_string())
    }
}
