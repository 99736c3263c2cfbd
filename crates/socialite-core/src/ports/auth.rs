//! Authentication and authorization ports.

use uuid::Uuid;

use crate::domain::User;

/// Claims carried by a verified access token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub email: String,
    pub username: String,
    pub exp: i64,
}

/// An access/refresh pair issued after a successful login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Token service trait for JWT operations.
pub trait TokenService: Send + Sync {
    /// Issue an access/refresh pair for a user.
    fn issue_pair(&self, user: &User) -> Result<TokenPair, AuthError>;

    /// Exchange a refresh token for a fresh access token.
    fn refresh_access(&self, refresh_token: &str) -> Result<String, AuthError>;

    /// Validate an access token and decode its claims.
    fn authenticate(&self, access_token: &str) -> Result<TokenClaims, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
