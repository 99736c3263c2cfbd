//! Authentication implementations.

mod google;
mod jwt;
mod password;

pub use google::GoogleIdentityVerifier;
pub use jwt::{JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;
