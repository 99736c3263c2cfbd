//! Post handlers - CRUD plus the comment and react actions.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use socialite_core::domain::{Comment, Post, Reaction, ReactionType};
use socialite_shared::dto::{
    CommentResponse, CreateCommentRequest, PostContentRequest, PostResponse, ReactRequest,
    ReactionResponse,
};

use super::require_field;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id,
        author_id: post.author_id,
        content: post.content.clone(),
        created_at: post.created_at,
    }
}

/// Resolve a post id or fail the request with the standard 404.
async fn find_post(state: &AppState, id: Uuid) -> Result<Post, AppError> {
    state.posts.find_by_id(id).await?.ok_or(AppError::NotFound)
}

/// GET /api/posts/ - newest posts first.
pub async fn list_posts(state: web::Data<AppState>, _identity: Identity) -> AppResult<HttpResponse> {
    let posts = state.posts.list_recent().await?;

    let body: Vec<PostResponse> = posts.iter().map(post_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/posts/
///
/// The author is always the authenticated requester; any author field in
/// the request body is ignored.
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostContentRequest>,
) -> AppResult<HttpResponse> {
    let content = require_field(body.into_inner().content, "content")?;

    let post = state
        .posts
        .insert(Post::new(identity.user_id, content))
        .await?;

    Ok(HttpResponse::Created().json(post_response(&post)))
}

/// GET /api/posts/{id}/
pub async fn get_post(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(post_response(&post)))
}

/// PUT /api/posts/{id}/
///
/// Any authenticated user may rewrite any post; author identity is not
/// checked. TODO: restrict update/delete to the owning author once the
/// intended ownership rule is settled.
pub async fn replace_post(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostContentRequest>,
) -> AppResult<HttpResponse> {
    let content = require_field(body.into_inner().content, "content")?;

    let mut post = find_post(&state, path.into_inner()).await?;
    post.content = content;

    let updated = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(post_response(&updated)))
}

/// PATCH /api/posts/{id}/
///
/// Partial update: an absent `content` leaves the post unchanged.
pub async fn amend_post(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostContentRequest>,
) -> AppResult<HttpResponse> {
    let mut post = find_post(&state, path.into_inner()).await?;

    let updated = match body.into_inner().content {
        Some(content) => {
            let content = match content.trim().is_empty() {
                true => return Err(AppError::BadRequest("content is required.".to_string())),
                false => content,
            };
            post.content = content;
            state.posts.update(post).await?
        }
        None => post,
    };

    Ok(HttpResponse::Ok().json(post_response(&updated)))
}

/// DELETE /api/posts/{id}/
pub async fn delete_post(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/posts/{id}/comment/ - create a comment on this post.
pub async fn comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    let content = require_field(body.into_inner().content, "content")?;

    let comment = state
        .comments
        .insert(Comment::new(post.id, identity.user_id, content))
        .await?;

    Ok(HttpResponse::Created().json(CommentResponse {
        id: comment.id,
        post_id: comment.post_id,
        author_id: comment.author_id,
        content: comment.content,
        created_at: comment.created_at,
    }))
}

/// POST /api/posts/{id}/react/ - create or update this user's reaction.
///
/// 201 when the reaction was newly created, 200 when an existing one had
/// its type swapped.
pub async fn react(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<ReactRequest>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    let raw = require_field(body.into_inner().reaction_type, "reaction_type")?;
    let reaction_type: ReactionType = raw
        .parse()
        .map_err(|e: socialite_core::domain::UnknownReactionType| {
            AppError::BadRequest(e.to_string())
        })?;

    let (reaction, created) = state
        .reactions
        .upsert(Reaction::new(post.id, identity.user_id, reaction_type))
        .await?;

    let body = ReactionResponse {
        id: reaction.id,
        post_id: reaction.post_id,
        user_id: reaction.user_id,
        reaction_type: reaction.reaction_type.as_str().to_string(),
        created_at: reaction.created_at,
    };

    let response = match created {
        true => HttpResponse::Created().json(body),
        false => HttpResponse::Ok().json(body),
    };

    Ok(response)
}
