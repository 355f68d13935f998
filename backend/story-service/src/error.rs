/// Error types for story-service
use session_token::TokenError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Password is not correct.")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn user_not_found() -> Self {
        ServiceError::NotFound("User not found".to_string())
    }

    pub fn feed_not_found() -> Self {
        ServiceError::NotFound("Feed not found".to_string())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
