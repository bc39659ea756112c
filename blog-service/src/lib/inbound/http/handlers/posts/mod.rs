use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::post::models::Post;

pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod list_posts;
pub mod update_post;

pub use create_post::create_post;
pub use delete_post::delete_post;
pub use get_post::get_post;
pub use list_posts::list_posts;
pub use update_post::update_post;

/// Post representation shared by the post handlers and the user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.as_i64(),
            title: post.title.as_str().to_string(),
            content: post.content.clone(),
            published: post.published,
            author_id: post.author_id.as_i64(),
            created_at: post.created_at,
        }
    }
}
