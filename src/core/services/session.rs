use crate::constants::{
    ADMIN_EMAIL, ADMIN_ID, ADMIN_LOGIN_FAILED, ADMIN_LOGIN_SUCCEEDED, ADMIN_NAME, LOGGED_OUT,
    LOGIN_FAILED, LOGIN_SUCCEEDED, SIGNUP_FAILED, SIGNUP_SUCCEEDED,
};
use crate::core::errors::RemoError;
use crate::core::models::account::{Account, SessionUser};
use crate::core::models::notification::Notification;
use crate::core::validation::{validate_admin_form, validate_login_form, validate_signup_form};
use crate::infrastructure::credentials::{AdminCredentials, CredentialPolicy};
use crate::infrastructure::notifications::Notifier;
use crate::infrastructure::storage::storage_keys::{SESSION_KEY, USERS_KEY};
use crate::infrastructure::storage::{KeyValueStore, load_json, load_list, save_json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Holds the signed-in identity and owns the account registry.
#[derive(Clone)]
pub struct SessionService<S: KeyValueStore, N: Notifier> {
    storage: S,
    notifier: N,
    admin: AdminCredentials,
    credential_policy: CredentialPolicy,
    current: Arc<RwLock<Option<SessionUser>>>,
}

impl<S: KeyValueStore, N: Notifier> SessionService<S, N> {
    pub fn new(storage: S, notifier: N, admin: AdminCredentials, credential_policy: CredentialPolicy) -> Self {
        SessionService {
            storage,
            notifier,
            admin,
            credential_policy,
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Loads the persisted session, replacing whatever is held in memory.
    pub async fn restore(&self) -> Result<Option<SessionUser>, RemoError> {
        let stored: Option<SessionUser> = load_json(&self.storage, SESSION_KEY).await?;
        match &stored {
            Some(user) => info!("Restored session for {}", user.email),
            None => debug!("No persisted session"),
        }
        *self.current.write().await = stored.clone();
        Ok(stored)
    }

    pub async fn current_user(&self) -> Option<SessionUser> {
        self.current.read().await.clone()
    }

    pub async fn is_admin(&self) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .is_some_and(SessionUser::has_admin_access)
    }

    pub async fn require_user(&self) -> Result<SessionUser, RemoError> {
        self.current_user().await.ok_or(RemoError::NotAuthenticated)
    }

    pub async fn require_admin(&self) -> Result<SessionUser, RemoError> {
        let user = self.require_user().await?;
        if !user.has_admin_access() {
            warn!("User {} attempted an admin-only action", user.id);
            return Err(RemoError::AdminAccessRequired);
        }
        Ok(user)
    }

    pub async fn accounts(&self) -> Result<Vec<Account>, RemoError> {
        load_list(&self.storage, USERS_KEY).await
    }

    async fn start_session(&self, user: SessionUser) -> Result<SessionUser, RemoError> {
        save_json(&self.storage, SESSION_KEY, &user).await?;
        *self.current.write().await = Some(user.clone());
        Ok(user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, RemoError> {
        validate_login_form(email, password)?;

        let accounts = self.accounts().await?;
        let found = accounts
            .iter()
            .find(|a| a.email == email && self.credential_policy.matches(&a.password, password));

        match found {
            Some(account) => {
                let user = self.start_session(SessionUser::from(account)).await?;
                info!("User {} logged in", user.id);
                self.notifier
                    .notify(Notification::info(
                        LOGIN_SUCCEEDED,
                        format!("Logged in successfully as {}", user.name),
                    ))
                    .await?;
                Ok(user)
            }
            None => {
                warn!("Failed login for {}", email);
                self.notifier
                    .notify(Notification::failure(LOGIN_FAILED, "Invalid email or password"))
                    .await?;
                Err(RemoError::InvalidCredentials)
            }
        }
    }

    /// Registers an account. The caller still has to log in afterwards.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<SessionUser, RemoError> {
        validate_signup_form(name, email, password)?;

        let mut accounts = self.accounts().await?;
        if accounts.iter().any(|a| a.email == email) {
            warn!("Signup rejected, {} already registered", email);
            self.notifier
                .notify(Notification::failure(
                    SIGNUP_FAILED,
                    "User with this email already exists",
                ))
                .await?;
            return Err(RemoError::EmailAlreadyRegistered(email.to_string()));
        }

        let account = Account {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password: self.credential_policy.seal(password)?,
            is_admin: None,
        };
        let user = SessionUser::from(&account);
        accounts.push(account);
        save_json(&self.storage, USERS_KEY, &accounts).await?;

        info!("Registered account {} for {}", user.id, user.email);
        self.notifier
            .notify(Notification::info(
                SIGNUP_SUCCEEDED,
                "Please log in with your new account",
            ))
            .await?;
        Ok(user)
    }

    pub async fn admin_login(&self, username: &str, password: &str) -> Result<SessionUser, RemoError> {
        validate_admin_form(username, password)?;

        if !self.admin.matches(username, password) {
            warn!("Failed admin login for {}", username);
            self.notifier
                .notify(Notification::failure(ADMIN_LOGIN_FAILED, "Invalid admin credentials"))
                .await?;
            return Err(RemoError::InvalidAdminCredentials);
        }

        let admin = SessionUser {
            id: ADMIN_ID.to_string(),
            name: ADMIN_NAME.to_string(),
            email: ADMIN_EMAIL.to_string(),
            is_admin: Some(true),
        };
        let admin = self.start_session(admin).await?;
        info!("Admin session started");
        self.notifier
            .notify(Notification::info(
                ADMIN_LOGIN_SUCCEEDED,
                "Welcome to REMO Admin Panel",
            ))
            .await?;
        Ok(admin)
    }

    pub async fn logout(&self) -> Result<(), RemoError> {
        let previous = self.current.write().await.take();
        self.storage.remove(SESSION_KEY).await?;
        match previous {
            Some(user) => info!("User {} logged out", user.id),
            None => debug!("Logout without an active session"),
        }
        self.notifier
            .notify(Notification::info(
                LOGGED_OUT,
                "You have been successfully logged out",
            ))
            .await?;
        Ok(())
    }
}
