use serde::Serialize;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Front door for credential checks and token issuance.
///
/// Owns a [`PasswordHasher`] and a [`JwtHandler`] bound to the service
/// signing key, so callers work with one type for the whole login path.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Outcome of a successful credential check.
pub struct AuthenticationResult {
    /// Signed token to hand back to the client
    pub access_token: String,
}

/// Failures surfaced by [`Authenticator`] operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Build an authenticator that signs and validates tokens with `jwt_secret`.
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    /// Hash a plaintext password for persistence.
    ///
    /// # Errors
    /// * `HashingFailed` - The underlying hash computation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against its stored hash and, on a match, issue a
    /// signed token carrying `claims`.
    ///
    /// A stored hash that does not parse counts as a mismatch, so the only
    /// failure modes are bad credentials and token encoding faults.
    ///
    /// # Arguments
    /// * `password` - Plaintext password supplied at login
    /// * `stored_hash` - Hash persisted for the account
    /// * `claims` - Payload to embed in the issued token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password and hash do not match
    /// * `JwtError` - Encoding the token failed
    pub fn authenticate<T: Serialize>(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &T,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.encode(claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without a prior password check, for flows where the
    /// caller has already proven identity some other way.
    pub fn generate_token<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        self.jwt_handler.encode(claims)
    }

    /// Validate a token's signature and expiry, then decode its claims.
    pub fn validate_token<T: for<'de> serde::Deserialize<'de>>(
        &self,
        token: &str,
    ) -> Result<T, JwtError> {
        self.jwt_handler.decode(token)
    }
}
