//! Reaction entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use socialite_core::domain::ReactionType;

/// Storage representation of a reaction type. Persisted as the lowercase
/// choice string, max 10 characters.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum ReactionKind {
    #[sea_orm(string_value = "like")]
    Like,
    #[sea_orm(string_value = "love")]
    Love,
    #[sea_orm(string_value = "haha")]
    Haha,
    #[sea_orm(string_value = "sad")]
    Sad,
    #[sea_orm(string_value = "angry")]
    Angry,
}

impl From<ReactionType> for ReactionKind {
    fn from(value: ReactionType) -> Self {
        match value {
            ReactionType::Like => Self::Like,
            ReactionType::Love => Self::Love,
            ReactionType::Haha => Self::Haha,
            ReactionType::Sad => Self::Sad,
            ReactionType::Angry => Self::Angry,
        }
    }
}

impl From<ReactionKind> for ReactionType {
    fn from(value: ReactionKind) -> Self {
        match value {
            ReactionKind::Like => Self::Like,
            ReactionKind::Love => Self::Love,
            ReactionKind::Haha => Self::Haha,
            ReactionKind::Sad => Self::Sad,
            ReactionKind::Angry => Self::Angry,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub reaction_type: ReactionKind,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Reaction.
impl From<Model> for socialite_core::domain::Reaction {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            user_id: model.user_id,
            reaction_type: model.reaction_type.into(),
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Reaction to SeaORM ActiveModel.
impl From<socialite_core::domain::Reaction> for ActiveModel {
    fn from(reaction: socialite_core::domain::Reaction) -> Self {
        Self {
            id: Set(reaction.id),
            post_id: Set(reaction.post_id),
            user_id: Set(reaction.user_id),
            reaction_type: Set(reaction.reaction_type.into()),
            created_at: Set(reaction.created_at.into()),
        }
    }
}
