use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - represents an account in the system.
///
/// `username` is the unique handle. Federated sign-ins resolve users by it,
/// so Google accounts are stored with the email doubling as the username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Absent for accounts created through a federated provider.
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamp.
    pub fn new(username: String, email: String, password_hash: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Create a user for a federated identity. No local password is stored;
    /// the email serves as the username.
    pub fn federated(email: String) -> Self {
        Self::new(email.clone(), email, None)
    }
}
