//! Register Use Case
//!
//! Creates a new user account with the default role.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName,
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::AuthResult;

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        let name = DisplayName::new(input.name)?;
        let email = Email::new(input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        let password = UserPassword::hash(raw_password, self.config.pepper()).await?;

        // Uniqueness is left to the store
        let user = self
            .user_repo
            .create(NewUser::new(name, email, password))
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }
}
