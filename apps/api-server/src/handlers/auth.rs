//! Authentication handlers.
//!
//! The federated path exchanges a Google ID token for Socialite JWT tokens;
//! the local path issues the same token pair against stored credentials.

use std::sync::Arc;

use actix_web::{HttpResponse, web};

use socialite_core::domain::User;
use socialite_core::error::RepoError;
use socialite_core::ports::{IdentityVerifier, PasswordService, TokenService};
use socialite_shared::dto::{
    AuthTokensResponse, GoogleLoginRequest, RegisterRequest, TokenObtainRequest,
    TokenPairResponse, TokenRefreshRequest, TokenRefreshResponse, UserResponse,
};

use super::require_field;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const NO_ACTIVE_ACCOUNT: &str = "No active account found with the given credentials";

fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        email: user.email.clone(),
        username: user.username.clone(),
    }
}

/// Look up the user for a verified federated email, creating one on first
/// login. A concurrent first login may win the insert; on a username
/// collision the winner's row is fetched instead.
async fn resolve_federated_user(state: &AppState, email: &str) -> Result<User, AppError> {
    if let Some(user) = state.users.find_by_username(email).await? {
        return Ok(user);
    }

    match state.users.insert(User::federated(email.to_string())).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Created user for first federated login");
            Ok(user)
        }
        Err(RepoError::Constraint(_)) => {
            state.users.find_by_username(email).await?.ok_or_else(|| {
                AppError::Internal("user vanished after username collision".to_string())
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /api/auth/google/
///
/// Exchanges a Google ID token for Socialite JWT tokens.
/// Client sends: `{ "id_token": "<google_id_token>" }`
/// Server returns: `{ "access": "...", "refresh": "...", "user": {...} }`
pub async fn google_login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    identity_verifier: web::Data<Arc<dyn IdentityVerifier>>,
    body: web::Json<GoogleLoginRequest>,
) -> AppResult<HttpResponse> {
    let id_token = match body.into_inner().id_token {
        Some(token) if !token.is_empty() => token,
        _ => return Err(AppError::BadRequest("id_token is required.".to_string())),
    };

    // Verify token signature and audience before trusting any claim
    let verified = identity_verifier
        .verify_id_token(&id_token)
        .await
        .map_err(|e| AppError::InvalidIdToken(e.to_string()))?;

    let email = verified.email.ok_or_else(|| {
        AppError::BadRequest("Google token does not include email.".to_string())
    })?;

    let user = resolve_federated_user(&state, &email).await?;

    let pair = token_service
        .issue_pair(&user)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthTokensResponse {
        access: pair.access,
        refresh: pair.refresh,
        user: user_response(&user),
    }))
}

/// POST /api/auth/register/
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let username = require_field(req.username, "username")?;
    let email = require_field(req.email, "email")?;
    let password = require_field(req.password, "password")?;

    if !email.contains('@') {
        return Err(AppError::BadRequest(
            "Enter a valid email address.".to_string(),
        ));
    }
    if password.len() < 8 {
        return Err(AppError::BadRequest(
            "This password is too short. It must contain at least 8 characters.".to_string(),
        ));
    }

    if state.users.find_by_username(&username).await?.is_some() {
        return Err(AppError::Conflict(
            "A user with that username already exists.".to_string(),
        ));
    }

    let password_hash = password_service
        .hash(&password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = state
        .users
        .insert(User::new(username, email, Some(password_hash)))
        .await
        .map_err(|e| match e {
            RepoError::Constraint(_) => {
                AppError::Conflict("A user with that username already exists.".to_string())
            }
            other => other.into(),
        })?;

    let pair = token_service
        .issue_pair(&user)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Created().json(AuthTokensResponse {
        access: pair.access,
        refresh: pair.refresh,
        user: user_response(&user),
    }))
}

/// POST /api/auth/token/
///
/// Issues an access + refresh pair for stored credentials.
pub async fn token_obtain(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<TokenObtainRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let username = require_field(req.username, "username")?;
    let password = require_field(req.password, "password")?;

    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or_else(|| AppError::Unauthorized(NO_ACTIVE_ACCOUNT.to_string()))?;

    // Federated accounts have no local password and cannot use this path
    let hash = user
        .password_hash
        .as_deref()
        .ok_or_else(|| AppError::Unauthorized(NO_ACTIVE_ACCOUNT.to_string()))?;

    let valid = password_service
        .verify(&password, hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized(NO_ACTIVE_ACCOUNT.to_string()));
    }

    let pair = token_service
        .issue_pair(&user)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(TokenPairResponse {
        access: pair.access,
        refresh: pair.refresh,
    }))
}

/// POST /api/auth/token/refresh/
///
/// Issues a new access token using a refresh token.
pub async fn token_refresh(
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<TokenRefreshRequest>,
) -> AppResult<HttpResponse> {
    let refresh = require_field(body.into_inner().refresh, "refresh")?;

    let access = token_service
        .refresh_access(&refresh)
        .map_err(|_| AppError::Unauthorized("Token is invalid or expired".to_string()))?;

    Ok(HttpResponse::Ok().json(TokenRefreshResponse { access }))
}

/// GET /api/auth/me/ - Protected route
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(user_response(&user)))
}
