//! Access Token Service
//!
//! Issues and verifies the signed session tokens handed out at login.

use chrono::{DateTime, Duration, Utc};
use platform::jwt::{JwtCodec, JwtError};

use crate::application::config::AuthConfig;
use crate::domain::entity::access_token::{AccessClaims, AuthenticatedUser};
use crate::domain::entity::user::User;
use crate::error::{AuthError, AuthResult};

/// Stateless token issuer/verifier. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AccessTokenService {
    codec: JwtCodec,
    ttl: Duration,
}

impl AccessTokenService {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            codec: JwtCodec::hs256(secret),
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, Duration::seconds(config.token_ttl_secs()))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Token for `user`, valid from now for the configured TTL
    pub fn issue(&self, user: &User) -> AuthResult<String> {
        self.issue_at(user, Utc::now())
    }

    pub fn issue_at(&self, user: &User, issued_at: DateTime<Utc>) -> AuthResult<String> {
        let claims = AccessClaims::new(user.id, user.role, issued_at, self.ttl);
        self.codec.encode(&claims).map_err(AuthError::from)
    }

    /// Check signature and expiry and return the identity the token names
    pub fn verify(&self, token: &str) -> AuthResult<AuthenticatedUser> {
        let claims: AccessClaims = self.codec.decode(token)?;
        Ok(claims.principal())
    }
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired => AuthError::TokenExpired,
            JwtError::Invalid(reason) => {
                tracing::debug!(reason = %reason, "Rejected access token");
                AuthError::InvalidToken
            }
            JwtError::Encoding(msg) => AuthError::Internal(msg),
        }
    }
}
