use async_trait::async_trait;

use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::UpdatePostCommand;
use crate::domain::user::models::UserId;
use crate::post::errors::PostError;

/// Inbound port: what the HTTP layer may ask of the post domain.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a post stamped with `author_id`. The author comes from the
    /// verified token, never from the request body.
    ///
    /// # Errors
    /// * `DatabaseError` - The insert failed
    async fn create_post(
        &self,
        command: CreatePostCommand,
        author_id: UserId,
    ) -> Result<Post, PostError>;

    /// Fetch a post by id.
    ///
    /// # Errors
    /// * `NotFound` - No such post
    /// * `DatabaseError` - The lookup failed
    async fn get_post(&self, id: &PostId) -> Result<Post, PostError>;

    /// List every post owned by `author_id`, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - The query failed
    async fn list_posts_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError>;

    /// Report whether a post with this id exists.
    ///
    /// # Errors
    /// * `DatabaseError` - The lookup failed
    async fn post_exists(&self, id: &PostId) -> Result<bool, PostError>;

    /// Replace a post's fields. Title and published are mandatory; absent
    /// content keeps the stored body.
    ///
    /// # Errors
    /// * `NotFound` - No such post
    /// * `DatabaseError` - The update failed
    async fn update_post(&self, id: &PostId, command: UpdatePostCommand)
        -> Result<Post, PostError>;

    /// Delete a post, returning what was removed.
    ///
    /// # Errors
    /// * `NotFound` - No such post
    /// * `DatabaseError` - The delete failed
    async fn delete_post(&self, id: &PostId) -> Result<Post, PostError>;
}

/// Outbound port: the persistence the post domain needs.
///
/// As with users, `find_by_id` reports absence as `None` and leaves the
/// `NotFound` decision to the service layer.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Insert a row. Id and creation timestamp come from the database.
    ///
    /// # Errors
    /// * `DatabaseError` - The insert failed
    async fn create(
        &self,
        command: CreatePostCommand,
        author_id: UserId,
    ) -> Result<Post, PostError>;

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;

    /// Rows owned by `author_id`, ordered by creation time descending.
    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError>;

    async fn exists(&self, id: &PostId) -> Result<bool, PostError>;

    /// Write back a full entity.
    ///
    /// # Errors
    /// * `NotFound` - The row vanished between read and write
    /// * `DatabaseError` - The update failed
    async fn update(&self, post: Post) -> Result<Post, PostError>;

    /// Remove a row, returning what was deleted.
    ///
    /// # Errors
    /// * `NotFound` - No such row
    /// * `DatabaseError` - The delete failed
    async fn delete(&self, id: &PostId) -> Result<Post, PostError>;
}
