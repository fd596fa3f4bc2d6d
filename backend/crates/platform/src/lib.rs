//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Signed token encoding (JWT, HS256)
//! - Bearer credential parsing for the `Authorization` header

pub mod bearer;
pub mod jwt;
pub mod password;
