//! User Password Value Object
//!
//! Domain wrappers around `platform::password`. The clear text side is
//! zeroized on drop and never printable; the hashed side is the Argon2id PHC
//! string that lives in `users.password`.
//!
//! ## Usage
//! ```rust,ignore
//! let raw = RawPassword::new("p1".to_string())?;
//! let stored = UserPassword::hash(raw, None).await?;
//! assert!(stored.verify(RawPassword::new("p1".to_string())?, None).await?);
//! ```

use platform::password::{ClearTextPassword, HashedPassword};
use std::fmt;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input. Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw)
            .map_err(|_| AuthError::InvalidRequest("Password is required".to_string()))?;
        Ok(Self(clear_text))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawPassword([REDACTED])")
    }
}

// ============================================================================
// User Password (Stored Hash)
// ============================================================================

#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Salted one-way hash, computed off the async reactor
    pub async fn hash(raw: RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        let hashed = raw
            .0
            .hash_on_blocking_pool(pepper.map(<[u8]>::to_vec))
            .await?;
        Ok(Self(hashed))
    }

    /// `Ok(false)` on mismatch; errors only when the worker itself fails.
    pub async fn verify(&self, raw: RawPassword, pepper: Option<&[u8]>) -> AuthResult<bool> {
        let valid = self
            .0
            .verify_on_blocking_pool(raw.0, pepper.map(<[u8]>::to_vec))
            .await?;
        Ok(valid)
    }

    /// Rehydrate from the stored column. A value that is not an Argon2 PHC
    /// string is kept and simply never verifies.
    pub fn from_db(phc: String) -> Self {
        Self(HashedPassword::from_phc_string(phc))
    }

    pub fn as_phc_str(&self) -> &str {
        self.0.as_phc_string()
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserPassword([HASH])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> RawPassword {
        RawPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_raw_password_requires_presence() {
        assert!(matches!(
            RawPassword::new(String::new()),
            Err(AuthError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_raw_password_debug_redacted() {
        assert!(!format!("{:?}", raw("hunter2")).contains("hunter2"));
    }

    #[tokio::test]
    async fn test_hash_then_verify() {
        let stored = UserPassword::hash(raw("p1"), None).await.unwrap();

        assert!(stored.verify(raw("p1"), None).await.unwrap());
        assert!(!stored.verify(raw("p2"), None).await.unwrap());
    }

    #[tokio::test]
    async fn test_hash_is_salted() {
        let a = UserPassword::hash(raw("p1"), None).await.unwrap();
        let b = UserPassword::hash(raw("p1"), None).await.unwrap();
        assert_ne!(a.as_phc_str(), b.as_phc_str());
    }

    #[tokio::test]
    async fn test_from_db_roundtrip() {
        let stored = UserPassword::hash(raw("p1"), Some(b"pepper")).await.unwrap();
        let restored = UserPassword::from_db(stored.as_phc_str().to_string());

        assert!(restored.verify(raw("p1"), Some(b"pepper")).await.unwrap());
        assert!(!restored.verify(raw("p1"), None).await.unwrap());
    }

    #[tokio::test]
    async fn test_from_db_keeps_foreign_hash_that_never_verifies() {
        let stored = UserPassword::from_db("plaintext".to_string());
        assert_eq!(stored.as_phc_str(), "plaintext");
        assert!(!stored.verify(raw("plaintext"), None).await.unwrap());
    }
}
