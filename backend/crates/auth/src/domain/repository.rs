//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Every method maps to a single SQL statement.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_id::UserId, user_role::UserRole};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return it with its assigned id.
    /// Fails if the store rejects the row (e.g. duplicate email).
    async fn create(&self, user: NewUser) -> AuthResult<User>;

    /// Find user by login email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// All users, ordered by id
    async fn list(&self) -> AuthResult<Vec<User>>;

    /// Set the role; `None` if no such user
    async fn update_role(&self, id: UserId, role: UserRole) -> AuthResult<Option<User>>;
}
