//! In-Memory Repository Implementation
//!
//! Mirrors the Postgres schema: serial ids starting at 1 and a unique
//! `email` column. Used by tests and by the API when no database is wired.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: Vec<User>,
}

/// Shared in-memory user table; clones see the same rows
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<Mutex<Table>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AuthResult<MutexGuard<'_, Table>> {
        self.table
            .lock()
            .map_err(|_| AuthError::Internal("user table lock poisoned".to_string()))
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> AuthResult<User> {
        let mut table = self.lock()?;

        if table.rows.iter().any(|u| u.email == user.email) {
            return Err(AuthError::Internal(
                "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
            ));
        }

        table.next_id += 1;
        let user = user.into_user(UserId::new(table.next_id));
        table.rows.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let table = self.lock()?;
        Ok(table.rows.iter().find(|u| &u.email == email).cloned())
    }

    async fn list(&self) -> AuthResult<Vec<User>> {
        let table = self.lock()?;
        Ok(table.rows.clone())
    }

    async fn update_role(&self, id: UserId, role: UserRole) -> AuthResult<Option<User>> {
        let mut table = self.lock()?;
        Ok(table.rows.iter_mut().find(|u| u.id == id).map(|u| {
            u.role = role;
            u.clone()
        }))
    }
}
