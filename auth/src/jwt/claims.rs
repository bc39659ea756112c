use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload carried by an access token.
///
/// RFC 7519 wants `sub` to be a string, so numeric account ids get
/// stringified on issue and parsed back when the token is verified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Who the token was issued to
    pub sub: String,

    /// Issue time, seconds since the epoch
    pub iat: i64,

    /// Expiry time, seconds since the epoch
    pub exp: i64,
}

impl Claims {
    /// Build claims for `subject` that expire `expiration_hours` from now.
    pub fn for_subject(subject: impl ToString, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Whether the claims have expired as of `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
