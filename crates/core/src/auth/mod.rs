//! Users, password hashing and the login session.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - The [`UserRepository`] persistence seam
//! - [`AuthService`], which owns the repository and the current session

pub mod error;
mod password;
pub mod repository;
pub mod service;
pub mod user;


pub use error::AuthError;
pub use password::{PasswordError, hash_password, verify_password};
pub use repository::{MemoryUserRepository, UserRepository};
pub use service::AuthService;
pub use user::User;
