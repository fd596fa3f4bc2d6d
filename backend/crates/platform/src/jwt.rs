//! JWT Codec
//!
//! HS256 signing and verification of arbitrary claim types. Expiry is
//! enforced with zero leeway; domain crates decide what the claims contain.

use std::fmt;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    get_current_timestamp,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Token verification/creation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// `exp` is at or before the current second
    #[error("Token expired")]
    Expired,

    /// Bad signature, malformed structure, wrong algorithm or claim shape
    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

/// Claims carrying an absolute expiry in seconds since the epoch.
pub trait Expiring {
    fn expires_at(&self) -> i64;
}

/// Symmetric (HS256) token codec.
#[derive(Clone)]
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtCodec {
    pub fn hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iat"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign `claims`. The claims must carry numeric `exp` and `iat` fields.
    pub fn encode<C: Serialize>(&self, claims: &C) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| JwtError::Encoding(e.to_string()))
    }

    /// Verify signature and expiry, then deserialize the claims.
    ///
    /// A token is expired once `exp <= now`.
    pub fn decode<C: DeserializeOwned + Expiring>(&self, token: &str) -> Result<C, JwtError> {
        let claims = decode::<C>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid(e.to_string()),
            })?;

        let now = i64::try_from(get_current_timestamp()).unwrap_or(i64::MAX);
        if claims.expires_at() <= now {
            return Err(JwtError::Expired);
        }
        Ok(claims)
    }
}

impl fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtCodec")
            .field("algorithm", &"HS256")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
