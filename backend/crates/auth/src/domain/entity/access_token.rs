//! Access Token Entity
//!
//! The claims carried by a session token and the identity a verified token
//! yields. Nothing here is persisted; validity is signature + expiry only.

use chrono::{DateTime, Duration, Utc};
use platform::jwt::Expiring;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{user_id::UserId, user_role::UserRole};

/// Token payload: `{id, role, iat, exp}` (seconds since the epoch).
///
/// `role` is a snapshot taken at login. A later role change does not affect
/// tokens already issued until they expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub id: UserId,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

impl AccessClaims {
    pub fn new(id: UserId, role: UserRole, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();
        Self {
            id,
            role,
            iat,
            exp: iat + ttl.num_seconds(),
        }
    }

    pub fn principal(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            id: self.id,
            role: self.role,
        }
    }
}

impl Expiring for AccessClaims {
    fn expires_at(&self) -> i64 {
        self.exp
    }
}

/// Identity attached to a request by the token verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub role: UserRole,
}
