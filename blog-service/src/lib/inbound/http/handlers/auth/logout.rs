use axum::http::StatusCode;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::inbound::http::handlers::ApiSuccess;

/// Clear the session cookie unconditionally.
///
/// No token is required. Previously issued tokens stay valid for header use
/// until they expire, there is no server-side revocation.
pub async fn logout(jar: CookieJar) -> (CookieJar, ApiSuccess<LogoutResponseData>) {
    // Removal answers with an expired cookie on the same path
    let jar = jar.remove(Cookie::build(("token", "")).path("/").build());

    (
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            LogoutResponseData {
                message: "Logout successful".to_string(),
            },
        ),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub message: String,
}
