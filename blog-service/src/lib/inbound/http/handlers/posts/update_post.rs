use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::PostData;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostTitle;
use crate::domain::post::models::UpdatePostCommand;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::guards::require_post_exists;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::post::errors::PostTitleError;

/// Update a post. The full schema is re-submitted and re-validated; only an
/// absent content field leaves the stored body untouched.
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(body): Json<UpdatePostRequest>,
) -> Result<ApiSuccess<UpdatePostResponseData>, ApiError> {
    let post_id = PostId::from_string(&post_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    require_post_exists(&state, &post_id).await?;

    let command = body.try_into_command()?;

    state
        .post_service
        .update_post(&post_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref post| {
            ApiSuccess::new(
                StatusCode::OK,
                UpdatePostResponseData {
                    message: format!("'{}' edited successfully", post.title),
                    post: post.into(),
                },
            )
        })
}

/// Unvalidated edit body. Title and published must be re-submitted on
/// every edit; content may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePostRequest {
    title: Option<String>,
    content: Option<String>,
    published: Option<bool>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdatePostRequestError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Published is required")]
    MissingPublished,

    #[error(transparent)]
    Title(#[from] PostTitleError),
}

impl UpdatePostRequest {
    fn try_into_command(self) -> Result<UpdatePostCommand, ParseUpdatePostRequestError> {
        let title = self.title.ok_or(ParseUpdatePostRequestError::MissingTitle)?;
        let title = PostTitle::new(title)?;
        let published = self
            .published
            .ok_or(ParseUpdatePostRequestError::MissingPublished)?;

        Ok(UpdatePostCommand {
            title,
            content: self.content,
            published,
        })
    }
}

impl From<ParseUpdatePostRequestError> for ApiError {
    fn from(err: ParseUpdatePostRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePostResponseData {
    pub message: String,
    pub post: PostData,
}
