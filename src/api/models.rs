use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::{FieldError, RemoError};
use crate::core::models::account::SessionUser;
use crate::core::models::checkout::CheckoutStage;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub authenticated: bool,
    pub is_admin: bool,
    pub user: Option<SessionUser>,
}

impl From<Option<SessionUser>> for SessionResponse {
    fn from(user: Option<SessionUser>) -> Self {
        SessionResponse {
            authenticated: user.is_some(),
            is_admin: user.as_ref().is_some_and(SessionUser::has_admin_access),
            user,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StageResponse {
    pub stage: CheckoutStage,
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

// Newtype wrapper for RemoError to implement IntoResponse
pub struct ApiError(pub RemoError);

impl From<RemoError> for ApiError {
    fn from(err: RemoError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            RemoError::InvalidForm(_) | RemoError::InvalidInput(..) => StatusCode::BAD_REQUEST,
            RemoError::MissingCheckoutFields(_) | RemoError::EmptyCart => StatusCode::BAD_REQUEST,
            RemoError::EmailAlreadyRegistered(_) => StatusCode::CONFLICT,
            RemoError::CheckoutNotStarted => StatusCode::CONFLICT,
            RemoError::InvalidCredentials
            | RemoError::InvalidAdminCredentials
            | RemoError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            RemoError::AdminAccessRequired => StatusCode::FORBIDDEN,
            RemoError::CorruptedState(..)
            | RemoError::StorageError(_)
            | RemoError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }
        let body = ErrorResponse {
            error: self.0.to_string(),
            fields: self.0.field_errors().to_vec(),
        };
        (status, Json(body)).into_response()
    }
}
