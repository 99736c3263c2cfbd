//! HTTP handlers and route configuration.
//!
//! Content and auth routes carry a trailing slash; clients are expected to
//! call the canonical slashed paths.

mod auth;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Presence check for request body fields; blank values count as missing.
pub(crate) fn require_field(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("{field} is required."))),
    }
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/google/", web::post().to(auth::google_login))
                    .route("/register/", web::post().to(auth::register))
                    .route("/token/", web::post().to(auth::token_obtain))
                    .route("/token/refresh/", web::post().to(auth::token_refresh))
                    .route("/me/", web::get().to(auth::me)),
            )
            // Content routes
            .service(
                web::scope("/posts")
                    .route("/", web::get().to(posts::list_posts))
                    .route("/", web::post().to(posts::create_post))
                    .route("/{id}/", web::get().to(posts::get_post))
                    .route("/{id}/", web::put().to(posts::replace_post))
                    .route("/{id}/", web::patch().to(posts::amend_post))
                    .route("/{id}/", web::delete().to(posts::delete_post))
                    .route("/{id}/comment/", web::post().to(posts::comment))
                    .route("/{id}/react/", web::post().to(posts::react)),
            ),
    );
}
