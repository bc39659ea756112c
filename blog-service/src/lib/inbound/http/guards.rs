use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Reject with 400 when no user owns the given email.
///
/// Login runs this before touching credentials, so unknown accounts are
/// reported separately from bad passwords.
pub async fn require_user_exists_by_email(state: &AppState, email: &str) -> Result<(), ApiError> {
    let exists = state
        .user_service
        .user_exists_by_email(email)
        .await
        .map_err(ApiError::from)?;

    if !exists {
        return Err(ApiError::BadRequest("User does not exist!".to_string()));
    }

    Ok(())
}

/// Reject with 400 when the email is already registered.
///
/// Registration runs this before validating the rest of the body. The
/// check-then-insert race is closed again at the unique constraint.
pub async fn require_user_absent(state: &AppState, email: &str) -> Result<(), ApiError> {
    let exists = state
        .user_service
        .user_exists_by_email(email)
        .await
        .map_err(ApiError::from)?;

    if exists {
        return Err(ApiError::BadRequest("Email already taken!".to_string()));
    }

    Ok(())
}

/// Reject with 400 when no user row matches the id.
pub async fn require_user_exists(state: &AppState, id: &UserId) -> Result<(), ApiError> {
    let exists = state
        .user_service
        .user_exists(id)
        .await
        .map_err(ApiError::from)?;

    if !exists {
        return Err(ApiError::BadRequest("User does not exist!".to_string()));
    }

    Ok(())
}

/// Reject with 400 when no post row matches the id.
pub async fn require_post_exists(state: &AppState, id: &PostId) -> Result<(), ApiError> {
    let exists = state
        .post_service
        .post_exists(id)
        .await
        .map_err(ApiError::from)?;

    if !exists {
        return Err(ApiError::BadRequest("Post does not exist!".to_string()));
    }

    Ok(())
}
