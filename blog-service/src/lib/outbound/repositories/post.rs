use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostTitle;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::UserId;
use crate::post::errors::PostError;

/// Postgres adapter for the post repository port.
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_post(row: &PgRow) -> Result<Post, PostError> {
        let title = PostTitle::new(row.get("title"))?;

        Ok(Post {
            id: PostId(row.get("id")),
            title,
            content: row.get("content"),
            published: row.get("published"),
            author_id: UserId(row.get("author_id")),
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(
        &self,
        command: CreatePostCommand,
        author_id: UserId,
    ) -> Result<Post, PostError> {
        let row = sqlx::query(
            r#"
            INSERT INTO posts (title, content, published, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, published, author_id, created_at
            "#,
        )
        .bind(command.title.as_str())
        .bind(command.content.as_deref())
        .bind(command.published)
        .bind(author_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Self::row_to_post(&row)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, content, published, author_id, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_post(&r)?)),
            None => Ok(None),
        }
    }

    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, published, author_id, created_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(author_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_post).collect()
    }

    async fn exists(&self, id: &PostId) -> Result<bool, PostError> {
        let row = sqlx::query(
            r#"
            SELECT EXISTS (SELECT 1 FROM posts WHERE id = $1)
            "#,
        )
        .bind(id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(row.get(0))
    }

    async fn update(&self, post: Post) -> Result<Post, PostError> {
        let row = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, content = $3, published = $4
            WHERE id = $1
            RETURNING id, title, content, published, author_id, created_at
            "#,
        )
        .bind(post.id.as_i64())
        .bind(post.title.as_str())
        .bind(post.content.as_deref())
        .bind(post.published)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Self::row_to_post(&r),
            None => Err(PostError::NotFound(post.id.to_string())),
        }
    }

    async fn delete(&self, id: &PostId) -> Result<Post, PostError> {
        let row = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            RETURNING id, title, content, published, author_id, created_at
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Self::row_to_post(&r),
            None => Err(PostError::NotFound(id.to_string())),
        }
    }
}
