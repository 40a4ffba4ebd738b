//! Email signup entity - newsletter subscribers

use chrono::{DateTime, Utc};

/// Email signup, keyed by address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSignup {
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl EmailSignup {
    /// Addresses are stored trimmed and lowercased
    pub fn new(email: &str) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            created_at: Utc::now(),
        }
    }
}
