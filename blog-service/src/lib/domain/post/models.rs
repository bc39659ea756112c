use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::UserId;
use crate::post::errors::PostIdError;
use crate::post::errors::PostTitleError;

/// A blog entry owned by the author that created it.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: Option<String>,
    pub published: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Database-assigned post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub i64);

impl PostId {
    /// Parse a decimal id from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a decimal integer
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        s.parse::<i64>()
            .map(PostId)
            .map_err(|_| PostIdError::InvalidFormat(s.to_string()))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post title, at least 5 characters. No upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    const MIN_LENGTH: usize = 5;

    /// Validate and wrap a raw title.
    ///
    /// # Errors
    /// * `TooShort` - Under 5 characters
    pub fn new(title: String) -> Result<Self, PostTitleError> {
        if title.len() < Self::MIN_LENGTH {
            Err(PostTitleError::TooShort)
        } else {
            Ok(Self(title))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Creation input after field validation.
///
/// The author is never part of the command; it is stamped from the
/// authenticated request context.
#[derive(Debug)]
pub struct CreatePostCommand {
    pub title: PostTitle,
    pub content: Option<String>,
    pub published: bool,
}

impl CreatePostCommand {
    pub fn new(title: PostTitle, content: Option<String>, published: bool) -> Self {
        Self {
            title,
            content,
            published,
        }
    }
}

/// Edit input. Title and published are always re-submitted; absent content
/// leaves the stored body untouched.
#[derive(Debug)]
pub struct UpdatePostCommand {
    pub title: PostTitle,
    pub content: Option<String>,
    pub published: bool,
}
