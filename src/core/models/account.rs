use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered storefront account as kept in the registry.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Plaintext unless the bcrypt credential policy is active.
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

/// The signed-in identity: an account without its password.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

impl SessionUser {
    pub fn has_admin_access(&self) -> bool {
        self.is_admin.unwrap_or(false)
    }
}

impl From<&Account> for SessionUser {
    fn from(account: &Account) -> Self {
        SessionUser {
            id: account.id.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
            is_admin: account.is_admin,
        }
    }
}
