//! # Socialite Infrastructure
//!
//! Concrete implementations of the ports defined in `socialite-core`.
//! This crate contains the database, token service, and identity provider
//! integrations.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, GoogleIdentityVerifier, JwtTokenService};
pub use database::DatabaseConnections;
