/// Error types for the web client's data boundary
use story_types::StoryId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Duplicate story id in snapshot: {0}")]
    DuplicateStory(StoryId),
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
