//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod identity;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenPair, TokenService};
pub use identity::{IdentityError, IdentityVerifier, VerifiedIdentity};
pub use repository::{
    BaseRepository, CommentRepository, PostRepository, ReactionRepository, UserRepository,
};
