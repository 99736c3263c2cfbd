//! Google ID token verification.
//!
//! Verifies RS256-signed ID tokens against Google's published JWKS:
//! the key id from the token header is matched against the key set,
//! then signature, expiry, issuer, and audience are checked. Fetched
//! keys are cached per verifier instance with a one hour TTL.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;

use socialite_core::ports::{IdentityError, IdentityVerifier, VerifiedIdentity};

const GOOGLE_JWKS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";
const GOOGLE_ISSUERS: [&str; 2] = ["https://accounts.google.com", "accounts.google.com"];
const JWKS_CACHE_TTL_SECS: i64 = 3600; // 1 hour

/// Google JWKS response structure.
#[derive(Debug, Deserialize)]
struct JwksResponse {
    keys: Vec<Jwk>,
}

/// Individual RSA key from Google's key set.
#[derive(Debug, Clone, Deserialize)]
struct Jwk {
    /// Key ID - matched against the JWT header.
    kid: String,
    /// RSA public key modulus (Base64URL encoded).
    n: String,
    /// RSA public key exponent (Base64URL encoded).
    e: String,
}

#[derive(Default)]
struct JwksCache {
    keys: HashMap<String, Jwk>,
    fetched_at: Option<DateTime<Utc>>,
}

impl JwksCache {
    fn is_expired(&self) -> bool {
        match self.fetched_at {
            Some(t) => Utc::now() - t > TimeDelta::seconds(JWKS_CACHE_TTL_SECS),
            None => true,
        }
    }
}

/// Claims read from a verified Google ID token.
#[derive(Debug, Deserialize)]
struct GoogleClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
}

/// Verifier for Google-issued ID tokens.
pub struct GoogleIdentityVerifier {
    client_id: String,
    http: Client,
    jwks: RwLock<JwksCache>,
}

impl GoogleIdentityVerifier {
    /// `client_id` is the OAuth client the tokens must be minted for; it is
    /// checked against the token's `aud` claim.
    pub fn new(client_id: String) -> Self {
        Self {
            client_id,
            http: Client::new(),
            jwks: RwLock::new(JwksCache::default()),
        }
    }

    async fn fetch_jwks(&self) -> Result<Vec<Jwk>, IdentityError> {
        tracing::debug!("Fetching Google JWKS from {GOOGLE_JWKS_URL}");

        let response = self
            .http
            .get(GOOGLE_JWKS_URL)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| IdentityError::KeyDiscovery(e.to_string()))?;

        if !response.status().is_success() {
            return Err(IdentityError::KeyDiscovery(format!(
                "key endpoint returned {}",
                response.status()
            )));
        }

        let jwks: JwksResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::KeyDiscovery(format!("malformed key set: {e}")))?;

        tracing::debug!(count = jwks.keys.len(), "Fetched Google signing keys");
        Ok(jwks.keys)
    }

    /// Look up the signing key for `kid`, refreshing the cache when it is
    /// stale or does not know the key.
    async fn signing_key(&self, kid: &str) -> Result<Jwk, IdentityError> {
        {
            let cache = self.jwks.read().await;
            if !cache.is_expired() {
                if let Some(key) = cache.keys.get(kid) {
                    return Ok(key.clone());
                }
            }
        }

        let keys = self.fetch_jwks().await?;

        let mut cache = self.jwks.write().await;
        cache.keys = keys.into_iter().map(|k| (k.kid.clone(), k)).collect();
        cache.fetched_at = Some(Utc::now());

        cache.keys.get(kid).cloned().ok_or_else(|| {
            IdentityError::KeyDiscovery(format!("no signing key found for kid={kid}"))
        })
    }
}

#[async_trait]
impl IdentityVerifier for GoogleIdentityVerifier {
    async fn verify_id_token(&self, id_token: &str) -> Result<VerifiedIdentity, IdentityError> {
        let header = decode_header(id_token)
            .map_err(|e| IdentityError::Invalid(format!("invalid token header: {e}")))?;

        let kid = header
            .kid
            .ok_or_else(|| IdentityError::Invalid("token header missing key id".to_string()))?;

        if header.alg != Algorithm::RS256 {
            return Err(IdentityError::Invalid(format!(
                "unexpected algorithm: {:?}",
                header.alg
            )));
        }

        let jwk = self.signing_key(&kid).await?;
        let decoding_key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
            .map_err(|e| IdentityError::KeyDiscovery(format!("invalid public key: {e}")))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&GOOGLE_ISSUERS);
        validation.set_audience(&[&self.client_id]);

        let token_data = decode::<GoogleClaims>(id_token, &decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    IdentityError::Invalid("signature verification failed".to_string())
                }
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    IdentityError::Invalid("token has expired".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                    IdentityError::Invalid("invalid issuer".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                    IdentityError::Invalid("invalid audience".to_string())
                }
                _ => IdentityError::Invalid(format!("verification failed: {e}")),
            })?;

        tracing::debug!(sub = %token_data.claims.sub, "Verified Google ID token");

        Ok(VerifiedIdentity {
            subject: token_data.claims.sub,
            email: token_data.claims.email,
        })
    }
}
