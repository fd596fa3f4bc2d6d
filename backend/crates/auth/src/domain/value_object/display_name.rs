use derive_more::Display;

use crate::error::{AuthError, AuthResult};

/// Free-text display name chosen at registration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(name: impl Into<String>) -> AuthResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(AuthError::InvalidRequest("Name is required".to_string()));
        }

        Ok(Self(name))
    }

    pub(crate) fn from_db(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
