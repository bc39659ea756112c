use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::PostData;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::PostTitle;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::post::errors::PostTitleError;

/// Create a post. The author is always the authenticated subject, never a
/// field of the request body.
pub async fn create_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreatePostRequest>,
) -> Result<ApiSuccess<CreatePostResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .post_service
        .create_post(command, auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref post| {
            ApiSuccess::new(
                StatusCode::CREATED,
                CreatePostResponseData {
                    message: format!("'{}' created successfully", post.title),
                    post: post.into(),
                },
            )
        })
}

/// Unvalidated post creation body.
///
/// Fields are optional so absent ones answer 400 instead of a framework 422.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequest {
    title: Option<String>,
    content: Option<String>,
    published: Option<bool>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreatePostRequestError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Published is required")]
    MissingPublished,

    #[error(transparent)]
    Title(#[from] PostTitleError),
}

impl CreatePostRequest {
    fn try_into_command(self) -> Result<CreatePostCommand, ParseCreatePostRequestError> {
        let title = self.title.ok_or(ParseCreatePostRequestError::MissingTitle)?;
        let title = PostTitle::new(title)?;
        let published = self
            .published
            .ok_or(ParseCreatePostRequestError::MissingPublished)?;

        Ok(CreatePostCommand::new(title, self.content, published))
    }
}

impl From<ParseCreatePostRequestError> for ApiError {
    fn from(err: ParseCreatePostRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePostResponseData {
    pub message: String,
    pub post: PostData,
}
