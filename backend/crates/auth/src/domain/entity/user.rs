//! User Entity

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_id::UserId, user_password::UserPassword,
    user_role::UserRole,
};

/// A row of `users`.
///
/// Holds the password hash, so it must never be serialized directly;
/// the presentation layer maps it to a public DTO.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned key
    pub id: UserId,
    pub name: DisplayName,
    /// Login identifier
    pub email: Email,
    pub password: UserPassword,
    pub role: UserRole,
}

/// A user about to be inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: DisplayName,
    pub email: Email,
    pub password: UserPassword,
    pub role: UserRole,
}

impl NewUser {
    /// Registration always starts with the default role
    pub fn new(name: DisplayName, email: Email, password: UserPassword) -> Self {
        Self {
            name,
            email,
            password,
            role: UserRole::default(),
        }
    }

    /// Attach the key assigned by the store
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            role: self.role,
        }
    }
}
