//! Shared authentication building blocks.
//!
//! Bundles the three pieces every service login path needs:
//! - Argon2id password hashing
//! - JWT issuance and validation (HS256)
//! - An [`Authenticator`] that ties the two together
//!
//! Services keep their own domain traits and wrap these types behind them,
//! so nothing here knows about users, repositories, or HTTP.
//!
//! # Examples
//!
//! ## Hashing and checking a password
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("hunter2hunter2").unwrap();
//! assert!(hasher.verify("hunter2hunter2", &hash));
//! assert!(!hasher.verify("hunter3hunter3", &hash));
//! ```
//!
//! ## Issuing and validating a token
//! ```
//! use auth::{JwtHandler, Claims};
//!
//! let handler = JwtHandler::new(b"doc-example-signing-key-32-bytes-min");
//! let token = handler.encode(&Claims::for_subject(7, 1)).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "7");
//! ```
//!
//! ## The full login path
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"doc-example-signing-key-32-bytes-min");
//!
//! // At registration time
//! let stored = auth.hash_password("hunter2hunter2").unwrap();
//!
//! // At login time
//! let claims = Claims::for_subject(7, 1);
//! let result = auth.authenticate("hunter2hunter2", &stored, &claims).unwrap();
//!
//! // On each authenticated request
//! let decoded: Claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, "7");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Flat re-exports for the common path
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
