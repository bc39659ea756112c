use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::cookie::SameSite;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::guards::require_user_exists_by_email;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Verify credentials and hand out the session token twice: as an HttpOnly
/// cookie for browsers and in the JSON body for API clients.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, ApiSuccess<LoginResponseData>), ApiError> {
    let email = body
        .email
        .ok_or_else(|| ApiError::BadRequest("Email is required".to_string()))?;
    let password = body
        .password
        .ok_or_else(|| ApiError::BadRequest("Password is required".to_string()))?;

    require_user_exists_by_email(&state, &email).await?;

    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(ApiError::from)?;

    // Token subject is the user id, carried as a decimal string claim
    let claims = auth::Claims::for_subject(user.id.as_i64(), state.jwt_expiration_hours);

    let result = state
        .authenticator
        .authenticate(&password, &user.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            auth::AuthenticationError::JwtError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    let cookie = Cookie::build(("token", result.access_token.clone()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .path("/")
        .build();

    Ok((
        jar.add(cookie),
        ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                message: "Login successful".to_string(),
                token: result.access_token,
            },
        ),
    ))
}

/// Unvalidated login body.
///
/// Fields are optional so absent ones answer 400 instead of a framework 422.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub token: String,
}
