use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::EmailError;
use crate::user::errors::PasswordError;
use crate::user::errors::UserIdError;
use crate::user::errors::UserNameError;

/// A registered author account.
///
/// `password_hash` holds the Argon2 PHC string; plaintext lives only in
/// [`Password`] on its way to the hasher.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Database-assigned account identifier.
///
/// The sequence owns allocation, so there is no constructor for fresh ids,
/// only parsing of ids that arrive over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a decimal id from a path segment or token subject.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a decimal integer
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        s.parse::<i64>()
            .map(UserId)
            .map_err(|_| UserIdError::InvalidFormat(s.to_string()))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name, 5 to 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    const MIN_LENGTH: usize = 5;
    const MAX_LENGTH: usize = 64;

    /// Validate and wrap a raw name.
    ///
    /// # Errors
    /// * `TooShort` - Under 5 characters
    /// * `TooLong` - Over 64 characters
    pub fn new(name: String) -> Result<Self, UserNameError> {
        let length = name.len();
        if length < Self::MIN_LENGTH {
            Err(UserNameError::TooShort)
        } else if length > Self::MAX_LENGTH {
            Err(UserNameError::TooLong)
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address checked against RFC 5322 by the `email_address` crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and wrap a raw address.
    ///
    /// # Errors
    /// * `InvalidFormat` - The parser rejected the address
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plaintext password on its way to the hasher.
///
/// Only the minimum length is checked here. Hashing happens in the service
/// layer and the plaintext is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;

    /// Validate and wrap a raw password.
    ///
    /// # Errors
    /// * `TooShort` - Under 8 characters
    pub fn new(password: String) -> Result<Self, PasswordError> {
        if password.len() < Self::MIN_LENGTH {
            Err(PasswordError::TooShort)
        } else {
            Ok(Self(password))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Registration input after field validation.
#[derive(Debug)]
pub struct CreateUserCommand {
    pub name: UserName,
    pub email: EmailAddress,
    pub password: Password,
}

impl CreateUserCommand {
    pub fn new(name: UserName, email: EmailAddress, password: Password) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Partial-update input; `None` fields keep their stored values.
#[derive(Debug)]
pub struct UpdateUserCommand {
    pub name: Option<UserName>,
    pub email: Option<EmailAddress>,
    pub password: Option<Password>,
}
