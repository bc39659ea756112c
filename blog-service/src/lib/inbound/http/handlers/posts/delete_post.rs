use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::PostData;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::guards::require_post_exists;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<ApiSuccess<DeletePostResponseData>, ApiError> {
    let post_id = PostId::from_string(&post_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    require_post_exists(&state, &post_id).await?;

    state
        .post_service
        .delete_post(&post_id)
        .await
        .map_err(ApiError::from)
        .map(|ref post| {
            ApiSuccess::new(
                StatusCode::OK,
                DeletePostResponseData {
                    message: format!("Deleted '{}' successfully", post.title),
                    post: post.into(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletePostResponseData {
    pub message: String,
    pub post: PostData,
}
