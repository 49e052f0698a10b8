//! How account passwords are stored and compared.
//!
//! Accounts keep plaintext passwords by default, matching the demo storefront this service
//! backs. The bcrypt policy is opt-in; registries written under one policy cannot be read
//! under the other.

use crate::constants::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use crate::core::errors::RemoError;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CredentialPolicy {
    #[default]
    Plaintext,
    Bcrypt {
        cost: u32,
    },
}

impl CredentialPolicy {
    pub fn bcrypt() -> Self {
        CredentialPolicy::Bcrypt {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Turns a password into the value written to the registry.
    pub fn seal(&self, password: &str) -> Result<String, RemoError> {
        match self {
            CredentialPolicy::Plaintext => Ok(password.to_string()),
            CredentialPolicy::Bcrypt { cost } => bcrypt::hash(password, *cost)
                .map_err(|e| RemoError::InternalServerError(format!("Password hashing error: {}", e))),
        }
    }

    pub fn matches(&self, stored: &str, candidate: &str) -> bool {
        match self {
            CredentialPolicy::Plaintext => stored == candidate,
            CredentialPolicy::Bcrypt { .. } => bcrypt::verify(candidate, stored).unwrap_or_else(|e| {
                warn!("Stored password is not a bcrypt hash: {}", e);
                false
            }),
        }
    }
}

/// The single admin login pair.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        AdminCredentials {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        AdminCredentials::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plaintext_compares_exactly() {
        let policy = CredentialPolicy::Plaintext;
        let stored = policy.seal("secret1").unwrap();
        assert_eq!(stored, "secret1");
        assert!(policy.matches(&stored, "secret1"));
        assert!(!policy.matches(&stored, "Secret1"));
    }

    #[test]
    fn bcrypt_never_stores_the_password() {
        let policy = CredentialPolicy::Bcrypt { cost: 4 };
        let stored = policy.seal("secret1").unwrap();
        assert_ne!(stored, "secret1");
        assert!(policy.matches(&stored, "secret1"));
        assert!(!policy.matches(&stored, "secret2"));
        assert!(!policy.matches("secret1", "secret1"));
    }

    #[test]
    fn admin_debug_hides_password() {
        let rendered = format!("{:?}", AdminCredentials::default());
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("admin123"));
    }
}
