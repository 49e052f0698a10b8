use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use crate::infrastructure::credentials::{AdminCredentials, CredentialPolicy};

pub struct Config {
    pub port: u16,
    pub log_level: String,
    /// Unset means state only lives as long as the process.
    pub storage_path: Option<PathBuf>,
    pub admin_username: String,
    pub admin_password: String,
    pub credential_policy: CredentialPolicy,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("storage_path", &self.storage_path)
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"<redacted>")
            .field("credential_policy", &self.credential_policy)
            .finish()
    }
}

fn parse_credential_policy(value: Option<String>) -> CredentialPolicy {
    match value.as_deref().map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("bcrypt") => CredentialPolicy::bcrypt(),
        _ => CredentialPolicy::Plaintext,
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            storage_path: env::var("REMO_STORAGE_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            admin_username: env::var("REMO_ADMIN_USERNAME")
                .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: env::var("REMO_ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
            credential_policy: parse_credential_policy(env::var("REMO_PASSWORD_HASHING").ok()),
        }
    }

    pub fn admin_credentials(&self) -> AdminCredentials {
        AdminCredentials::new(&self.admin_username, &self.admin_password)
    }

    /// True while the admin pair is still the shipped demo value.
    pub fn uses_demo_admin(&self) -> bool {
        self.admin_username == DEFAULT_ADMIN_USERNAME && self.admin_password == DEFAULT_ADMIN_PASSWORD
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
