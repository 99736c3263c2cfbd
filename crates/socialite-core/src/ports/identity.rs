//! Federated identity port - verification of provider-issued ID tokens.

use async_trait::async_trait;

/// Claims extracted from a provider ID token whose signature and audience
/// checked out.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    /// The provider's stable subject identifier (`sub`).
    pub subject: String,
    /// Email claim, when the provider included one.
    pub email: Option<String>,
}

/// Verifies ID tokens minted by an external identity provider.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify_id_token(&self, id_token: &str) -> Result<VerifiedIdentity, IdentityError>;
}

/// Verification failures. The display string doubles as the diagnostic
/// surfaced to clients alongside the rejection.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("failed to fetch signing keys: {0}")]
    KeyDiscovery(String),

    #[error("{0}")]
    Invalid(String),
}
