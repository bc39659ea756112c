use thiserror::Error;

/// Raised when a path segment is not a numeric post id.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid post id: {0}")]
    InvalidFormat(String),
}

/// Title length violations. The message is client-facing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostTitleError {
    #[error("Title must be 5 or more characters long")]
    TooShort,
}

/// Everything that can go wrong in the post domain.
#[derive(Debug, Clone, Error)]
pub enum PostError {
    // Field validation
    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] PostTitleError),

    // Domain outcomes
    #[error("Post not found: {0}")]
    NotFound(String),

    // Infrastructure
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for PostError {
    fn from(err: anyhow::Error) -> Self {
        PostError::Unknown(err.to_string())
    }
}
