//! User Administration Use Case
//!
//! Listing accounts and changing roles. Callers are expected to have passed
//! the admin role gate already.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

pub struct UserAdminUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserAdminUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Every user, ordered by id
    pub async fn list(&self) -> AuthResult<Vec<User>> {
        self.user_repo.list().await
    }

    pub async fn change_role(&self, id: UserId, role: UserRole) -> AuthResult<User> {
        let user = self
            .user_repo
            .update_role(id, role)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::info!(user_id = %user.id, role = %user.role, "User role changed");

        Ok(user)
    }
}
