//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ActiveEnum, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use socialite_core::domain::{Post, Reaction, User};
use socialite_core::error::RepoError;
use socialite_core::ports::{CommentRepository, PostRepository, ReactionRepository, UserRepository};

use super::entity::comment::Entity as CommentEntity;
use super::entity::post::{self, Entity as PostEntity};
use super::entity::reaction::{self, Entity as ReactionEntity, ReactionKind};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// PostgreSQL reaction repository.
pub type PostgresReactionRepository = PostgresBaseRepository<ReactionEntity>;

/// Mask a handle for logging to avoid PII in logs. Usernames double as
/// email addresses for federated accounts.
fn mask_handle(handle: &str) -> String {
    if let Some(at_pos) = handle.find('@') {
        let (local, domain) = handle.split_at(at_pos);
        let masked_local = if local.len() > 1 {
            format!("{}***", &local[..1])
        } else {
            "***".to_string()
        };
        format!("{}{}", masked_local, domain)
    } else {
        "***".to_string()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(username = %mask_handle(username), "Finding user by username");

        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {}

#[async_trait]
impl ReactionRepository for PostgresReactionRepository {
    async fn upsert(&self, reaction: Reaction) -> Result<(Reaction, bool), RepoError> {
        let post_id = reaction.post_id;
        let user_id = reaction.user_id;
        let kind = ReactionKind::from(reaction.reaction_type);

        // Conflict-tolerant insert first. Zero rows affected means the
        // (post, user) slot is already taken and this is a re-react.
        let fresh = reaction.clone();
        let inserted = ReactionEntity::insert(reaction::ActiveModel::from(reaction))
            .on_conflict(
                OnConflict::columns([reaction::Column::PostId, reaction::Column::UserId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        if inserted > 0 {
            return Ok((fresh, true));
        }

        ReactionEntity::update_many()
            .col_expr(reaction::Column::ReactionType, Expr::value(kind.to_value()))
            .filter(reaction::Column::PostId.eq(post_id))
            .filter(reaction::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        let row = ReactionEntity::find()
            .filter(reaction::Column::PostId.eq(post_id))
            .filter(reaction::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
            .ok_or(RepoError::NotFound)?;

        Ok((row.into(), false))
    }
}
