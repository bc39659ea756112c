use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::guards::require_user_absent;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordError;
use crate::user::errors::UserNameError;

/// Register a new author account.
pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<ApiSuccess<RegisterUserResponseData>, ApiError> {
    // The duplicate check runs before body validation, matching the route's
    // guard order
    if let Some(email) = body.email.as_deref() {
        require_user_absent(&state, email).await?;
    }

    let command = body.try_into_command()?;

    state
        .user_service
        .register_user(command)
        .await
        .map_err(ApiError::from)
        .map(|user| {
            ApiSuccess::new(
                StatusCode::CREATED,
                RegisterUserResponseData {
                    message: format!("'{}' created successfully", user.name),
                },
            )
        })
}

/// Unvalidated registration body.
///
/// Fields are optional so absent ones answer 400 instead of a framework 422.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterUserRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterUserRequestError {
    #[error("Name is required")]
    MissingName,

    #[error("Email is required")]
    MissingEmail,

    #[error("Password is required")]
    MissingPassword,

    #[error(transparent)]
    Name(#[from] UserNameError),

    #[error(transparent)]
    Email(#[from] EmailError),

    #[error(transparent)]
    Password(#[from] PasswordError),
}

impl RegisterUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseRegisterUserRequestError> {
        let name = self.name.ok_or(ParseRegisterUserRequestError::MissingName)?;
        let email = self.email.ok_or(ParseRegisterUserRequestError::MissingEmail)?;
        let password = self
            .password
            .ok_or(ParseRegisterUserRequestError::MissingPassword)?;

        let name = UserName::new(name)?;
        let email = EmailAddress::new(email)?;
        let password = Password::new(password)?;
        Ok(CreateUserCommand::new(name, email, password))
    }
}

impl From<ParseRegisterUserRequestError> for ApiError {
    fn from(err: ParseRegisterUserRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterUserResponseData {
    pub message: String,
}
