//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and login with email + password
//! - Stateless HS256 access tokens (`{id, role, iat, exp}`, 1 hour)
//! - Bearer token verification and admin role gate middleware
//! - Admin user listing and role changes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id off the async reactor
//! - Tokens are never stored; validity is signature + expiry only
//! - Responses expose public user fields only, never the password hash

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AccessTokenService, AuthConfig};
pub use domain::entity::access_token::AuthenticatedUser;
pub use domain::value_object::user_role::UserRole;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryUserRepository, PgUserRepository};
pub use presentation::AuthAppState;
pub use presentation::router::{admin_only, api_router};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
