use thiserror::Error;

/// Errors raised when hashing passwords.
///
/// Verification has no error variant; a bad or unparseable hash is reported
/// as a mismatch.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
