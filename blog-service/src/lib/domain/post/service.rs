use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::UpdatePostCommand;
use crate::domain::user::models::UserId;
use crate::post::errors::PostError;
use crate::post::ports::PostRepository;
use crate::post::ports::PostServicePort;

/// Use-case layer behind [`PostServicePort`].
///
/// Posts carry no derived state, so most operations pass straight
/// through to the repository.
pub struct PostService<PR>
where
    PR: PostRepository,
{
    repository: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PostServicePort for PostService<PR>
where
    PR: PostRepository,
{
    async fn create_post(
        &self,
        command: CreatePostCommand,
        author_id: UserId,
    ) -> Result<Post, PostError> {
        self.repository.create(command, author_id).await
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))
    }

    async fn list_posts_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError> {
        self.repository.list_by_author(author_id).await
    }

    async fn post_exists(&self, id: &PostId) -> Result<bool, PostError> {
        self.repository.exists(id).await
    }

    async fn update_post(
        &self,
        id: &PostId,
        command: UpdatePostCommand,
    ) -> Result<Post, PostError> {
        let mut post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))?;

        post.title = command.title;
        post.published = command.published;

        // Absent content leaves the stored body untouched
        if let Some(new_content) = command.content {
            post.content = Some(new_content);
        }

        self.repository.update(post).await
    }

    async fn delete_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::post::models::PostTitle;

    mock! {
        pub TestPostRepository {}

        #[async_trait]
        impl PostRepository for TestPostRepository {
            async fn create(&self, command: CreatePostCommand, author_id: UserId) -> Result<Post, PostError>;
            async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;
            async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError>;
            async fn exists(&self, id: &PostId) -> Result<bool, PostError>;
            async fn update(&self, post: Post) -> Result<Post, PostError>;
            async fn delete(&self, id: &PostId) -> Result<Post, PostError>;
        }
    }

    fn sample_post(id: i64, author_id: i64) -> Post {
        Post {
            id: PostId(id),
            title: PostTitle::new("First post".to_string()).unwrap(),
            content: Some("Original body".to_string()),
            published: false,
            author_id: UserId(author_id),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_post_stamps_author() {
        let mut repository = MockTestPostRepository::new();

        repository
            .expect_create()
            .withf(|command, author_id| {
                command.title.as_str() == "Hello World" && author_id.as_i64() == 42
            })
            .times(1)
            .returning(|command, author_id| {
                Ok(Post {
                    id: PostId(1),
                    title: command.title,
                    content: command.content,
                    published: command.published,
                    author_id,
                    created_at: Utc::now(),
                })
            });

        let service = PostService::new(Arc::new(repository));

        let command = CreatePostCommand::new(
            PostTitle::new("Hello World".to_string()).unwrap(),
            Some("Body text".to_string()),
            true,
        );

        let result = service.create_post(command, UserId(42)).await;
        assert!(result.is_ok());

        let post = result.unwrap();
        assert_eq!(post.author_id, UserId(42));
        assert_eq!(post.title.as_str(), "Hello World");
        assert!(post.published);
    }

    #[tokio::test]
    async fn test_get_post_success() {
        let mut repository = MockTestPostRepository::new();

        let expected_post = sample_post(7, 42);
        let returned_post = expected_post.clone();
        repository
            .expect_find_by_id()
            .withf(|id| id.as_i64() == 7)
            .times(1)
            .returning(move |_| Ok(Some(returned_post.clone())));

        let service = PostService::new(Arc::new(repository));

        let result = service.get_post(&PostId(7)).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().title.as_str(), "First post");
    }

    #[tokio::test]
    async fn test_get_post_not_found() {
        let mut repository = MockTestPostRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = PostService::new(Arc::new(repository));

        let result = service.get_post(&PostId(9999)).await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PostError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_posts_by_author() {
        let mut repository = MockTestPostRepository::new();

        let posts = vec![sample_post(1, 42), sample_post(2, 42)];
        repository
            .expect_list_by_author()
            .withf(|author_id| author_id.as_i64() == 42)
            .times(1)
            .returning(move |_| Ok(posts.clone()));

        let service = PostService::new(Arc::new(repository));

        let result = service.list_posts_by_author(&UserId(42)).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_post_exists() {
        let mut repository = MockTestPostRepository::new();

        repository
            .expect_exists()
            .withf(|id| id.as_i64() == 7)
            .times(1)
            .returning(|_| Ok(true));

        let service = PostService::new(Arc::new(repository));

        let result = service.post_exists(&PostId(7)).await;
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn test_update_post_replaces_fields() {
        let mut repository = MockTestPostRepository::new();

        let existing_post = sample_post(7, 42);
        let returned_post = existing_post.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned_post.clone())));

        repository
            .expect_update()
            .withf(|post| {
                post.title.as_str() == "Edited title"
                    && post.content.as_deref() == Some("Edited body")
                    && post.published
            })
            .times(1)
            .returning(|post| Ok(post));

        let service = PostService::new(Arc::new(repository));

        let command = UpdatePostCommand {
            title: PostTitle::new("Edited title".to_string()).unwrap(),
            content: Some("Edited body".to_string()),
            published: true,
        };

        let result = service.update_post(&PostId(7), command).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().title.as_str(), "Edited title");
    }

    #[tokio::test]
    async fn test_update_post_keeps_content_when_absent() {
        let mut repository = MockTestPostRepository::new();

        let existing_post = sample_post(7, 42);
        let returned_post = existing_post.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned_post.clone())));

        repository
            .expect_update()
            .withf(|post| post.content.as_deref() == Some("Original body"))
            .times(1)
            .returning(|post| Ok(post));

        let service = PostService::new(Arc::new(repository));

        let command = UpdatePostCommand {
            title: PostTitle::new("Edited title".to_string()).unwrap(),
            content: None,
            published: true,
        };

        let result = service.update_post(&PostId(7), command).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_post_not_found() {
        let mut repository = MockTestPostRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = PostService::new(Arc::new(repository));

        let command = UpdatePostCommand {
            title: PostTitle::new("Edited title".to_string()).unwrap(),
            content: None,
            published: false,
        };

        let result = service.update_post(&PostId(9999), command).await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PostError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_post_returns_removed_entity() {
        let mut repository = MockTestPostRepository::new();

        let removed_post = sample_post(7, 42);
        repository
            .expect_delete()
            .withf(|id| id.as_i64() == 7)
            .times(1)
            .returning(move |_| Ok(removed_post.clone()));

        let service = PostService::new(Arc::new(repository));

        let result = service.delete_post(&PostId(7)).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().title.as_str(), "First post");
    }

    #[tokio::test]
    async fn test_delete_post_not_found() {
        let mut repository = MockTestPostRepository::new();

        repository
            .expect_delete()
            .times(1)
            .returning(|id| Err(PostError::NotFound(id.to_string())));

        let service = PostService::new(Arc::new(repository));

        let result = service.delete_post(&PostId(9999)).await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PostError::NotFound(_)));
    }
}
