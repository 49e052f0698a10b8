use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: &str, description: &str) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Error, Debug, Serialize)]
pub enum RemoError {
    #[error("Invalid form input ({} field errors)", .0.len())]
    InvalidForm(Vec<FieldError>),
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Invalid admin credentials")]
    InvalidAdminCredentials,
    #[error("Not signed in")]
    NotAuthenticated,
    #[error("Admin access required")]
    AdminAccessRequired,
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Checkout form is not open")]
    CheckoutNotStarted,
    #[error("Missing checkout fields: {}", .0.join(", "))]
    MissingCheckoutFields(Vec<String>),
    #[error("Stored value under `{0}` is corrupted: {1}")]
    CorruptedState(String, String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl RemoError {
    /// Field errors carried by a form failure, empty for every other variant.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            RemoError::InvalidForm(errors) => errors,
            RemoError::InvalidInput(_, error) => std::slice::from_ref(error),
            _ => &[],
        }
    }
}
