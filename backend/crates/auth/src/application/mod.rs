//! Application Layer
//!
//! Use cases and application services.

pub mod access_token;
pub mod config;
pub mod login;
pub mod manage_users;
pub mod register;

// Re-exports
pub use access_token::AccessTokenService;
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use manage_users::UserAdminUseCase;
pub use register::{RegisterInput, RegisterUseCase};
