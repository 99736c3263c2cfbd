use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Post, Reaction, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `insert` and `update` are split because entity ids are generated by the
/// caller; a combined save cannot tell a new row from an existing one.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Persist changes to an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` when no row matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts, newest first.
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError>;
}

/// Comment repository. Comments are append-only; the base CRUD surface
/// is only exercised for inserts today.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {}

/// Reaction repository.
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert the reaction, or update the type of the caller's existing
    /// reaction on the same post. Returns the stored row and whether it
    /// was newly created.
    async fn upsert(&self, reaction: Reaction) -> Result<(Reaction, bool), RepoError>;
}
