//! Data Transfer Objects - request/response types for the API.
//!
//! Optional request fields are deliberate: presence validation happens in
//! the handlers so missing fields produce the documented `detail` messages
//! rather than a deserializer error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to exchange a Google ID token for API tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleLoginRequest {
    pub id_token: Option<String>,
}

/// Request to register a new user with local credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request to obtain a token pair with local credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenObtainRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Request to exchange a refresh token for a new access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRefreshRequest {
    pub refresh: Option<String>,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub username: String,
}

/// Response for logins that establish a session: tokens plus the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokensResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserResponse,
}

/// Response containing a bare token pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

/// Response containing a refreshed access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRefreshResponse {
    pub access: String,
}

/// Request to create a post, or to replace/amend its content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostContentRequest {
    pub content: Option<String>,
}

/// Post projection returned by the content API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Request to comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub content: Option<String>,
}

/// Comment projection returned by the content API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Request to react to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactRequest {
    pub reaction_type: Option<String>,
}

/// Reaction projection returned by the content API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub reaction_type: String,
    pub created_at: DateTime<Utc>,
}
