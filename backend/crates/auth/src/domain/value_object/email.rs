//! Email Value Object
//!
//! The login identifier. Only presence is checked; the value is stored and
//! matched exactly as submitted.

use derive_more::Display;

use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> AuthResult<Self> {
        let email = email.into();

        if email.trim().is_empty() {
            return Err(AuthError::InvalidRequest("Email is required".to_string()));
        }

        Ok(Self(email))
    }

    /// Rehydrate from a stored row
    pub(crate) fn from_db(email: String) -> Self {
        Self(email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_kept_verbatim() {
        let email = Email::new("A@x.com").unwrap();
        assert_eq!(email.as_str(), "A@x.com");
        assert_eq!(email.to_string(), "A@x.com");
    }

    #[test]
    fn test_blank_email_rejected() {
        assert!(matches!(
            Email::new("  "),
            Err(AuthError::InvalidRequest(_))
        ));
        assert!(Email::new("").is_err());
    }
}
