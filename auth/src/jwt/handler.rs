use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Signs and verifies JWTs with a single HMAC key.
///
/// The payload type is chosen per call, so each service can shape its own
/// claims. The algorithm is pinned to HS256; key length is enforced upstream
/// by service configuration.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Build a handler keyed with `secret`, used for both signing and
    /// verification.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign `claims` into a compact JWT string.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serializing or signing the claims failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry, then deserialize its claims.
    ///
    /// The `exp` claim is required and no leeway is applied, so a token is
    /// rejected the second it expires.
    ///
    /// # Errors
    /// * `TokenExpired` - The expiry time has passed
    /// * `InvalidToken` - Malformed, forged, or missing `exp`
    /// * `DecodingFailed` - Any other decoding failure
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data = decode::<T>(token, &self.decoding_key, &validation)?;

        Ok(token_data.claims)
    }
}
