use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated subject through the request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates bearer JWTs and stores the subject in request
/// extensions.
///
/// Expired and malformed tokens answer with distinct 401 reasons so clients
/// can tell a refresh from a re-login. Verifier faults surface as 500.
pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims: auth::Claims = state
        .authenticator
        .validate_token(token)
        .map_err(|e| match e {
            auth::JwtError::TokenExpired => {
                tracing::warn!("Rejected expired token");
                ApiError::Unauthorized("Token expired".to_string()).into_response()
            }
            auth::JwtError::InvalidToken(reason) => {
                tracing::warn!("Rejected invalid token: {}", reason);
                ApiError::Unauthorized("Invalid token".to_string()).into_response()
            }
            other => {
                tracing::error!("Token verification failed: {}", other);
                ApiError::InternalServerError(other.to_string()).into_response()
            }
        })?;

    // The subject claim carries the user id as a decimal string
    let user_id = match claims.sub.parse::<i64>() {
        Ok(id) => UserId(id),
        Err(_) => {
            tracing::warn!("Token subject is not a user id: {}", claims.sub);
            return Err(ApiError::Unauthorized("Invalid token".to_string()).into_response());
        }
    };

    // Downstream handlers read the subject from request extensions
    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Not Authorized".to_string()).into_response())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Not Authorized".to_string()).into_response())?;

    if !auth_str.starts_with("Bearer ") {
        return Err(ApiError::Unauthorized("Not Authorized".to_string()).into_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
