//! JWT token service implementation.
//!
//! Issues short-lived access tokens paired with long-lived refresh tokens.
//! The two are distinguished by a `token_type` claim so a refresh token can
//! never be replayed as an access token or vice versa.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use socialite_core::domain::User;
use socialite_core::ports::{AuthError, TokenClaims, TokenPair, TokenService};

const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_minutes: i64,
    pub refresh_days: i64,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            access_minutes: 60,
            refresh_days: 30,
            issuer: "socialite-api".to_string(),
        }
    }
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // user_id
    email: String,
    username: String,
    token_type: String, // "access" or "refresh"
    exp: i64,           // expiration timestamp
    iat: i64,           // issued at
    iss: String,        // issuer
}

/// JWT-based token service.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }

    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| "change-me-in-production".to_string());

        // Warn if using default secret in production
        if secret == "change-me-in-production" {
            let is_production = std::env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
            }
        }

        let config = JwtConfig {
            secret,
            access_minutes: std::env::var("JWT_ACCESS_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            refresh_days: std::env::var("JWT_REFRESH_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "socialite-api".to_string()),
        };
        Self::new(config)
    }

    fn mint(
        &self,
        user_id: &str,
        email: &str,
        username: &str,
        token_type: &str,
        lifetime: TimeDelta,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            token_type: token_type.to_string(),
            exp: (now + lifetime).timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }
}

impl TokenService for JwtTokenService {
    fn issue_pair(&self, user: &User) -> Result<TokenPair, AuthError> {
        let sub = user.id.to_string();

        let access = self.mint(
            &sub,
            &user.email,
            &user.username,
            TOKEN_TYPE_ACCESS,
            TimeDelta::minutes(self.config.access_minutes),
        )?;
        let refresh = self.mint(
            &sub,
            &user.email,
            &user.username,
            TOKEN_TYPE_REFRESH,
            TimeDelta::days(self.config.refresh_days),
        )?;

        Ok(TokenPair { access, refresh })
    }

    fn refresh_access(&self, refresh_token: &str) -> Result<String, AuthError> {
        let claims = self.decode_claims(refresh_token)?;

        if claims.token_type != TOKEN_TYPE_REFRESH {
            return Err(AuthError::InvalidToken(
                "not a refresh token".to_string(),
            ));
        }

        self.mint(
            &claims.sub,
            &claims.email,
            &claims.username,
            TOKEN_TYPE_ACCESS,
            TimeDelta::minutes(self.config.access_minutes),
        )
    }

    fn authenticate(&self, access_token: &str) -> Result<TokenClaims, AuthError> {
        let claims = self.decode_claims(access_token)?;

        if claims.token_type != TOKEN_TYPE_ACCESS {
            return Err(AuthError::InvalidToken("not an access token".to_string()));
        }

        let user_id =
            Uuid::parse_str(&claims.sub).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(TokenClaims {
            user_id,
            email: claims.email,
            username: claims.username,
            exp: claims.exp,
        })
    }
}
