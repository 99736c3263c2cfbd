//! Application state - shared across all handlers.

use std::sync::Arc;

use socialite_core::ports::{
    CommentRepository, PostRepository, ReactionRepository, UserRepository,
};
use socialite_infra::database::{
    DatabaseConfig, DatabaseConnections, DbErr, PostgresCommentRepository, PostgresPostRepository,
    PostgresReactionRepository, PostgresUserRepository,
};

/// Shared application state: one repository handle per aggregate.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub reactions: Arc<dyn ReactionRepository>,
}

impl AppState {
    /// Connect to the database and build the repository handles.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connections = DatabaseConnections::init(config).await?;
        let db = connections.main;

        tracing::info!("Application state initialized");

        Ok(Self {
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db.clone())),
            reactions: Arc::new(PostgresReactionRepository::new(db)),
        })
    }
}
