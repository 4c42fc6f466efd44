use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::dto::auth_dto::{AdminAuthRequest, ChangeAdminPasswordRequest, DealerAuthRequest};
use crate::service::auth_service::{AuthService, AuthServiceImpl};
use crate::util::error::HandlerError;
use crate::util::response::success;

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, HandlerError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(HandlerError::validation(format!(
            "Missing required field: {}",
            field
        ))),
    }
}

// POST /dealer-auth
pub async fn dealer_auth_handler(
    State(service): State<Arc<AuthServiceImpl>>,
    Json(payload): Json<DealerAuthRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let email = required(&payload.email, "email")?;
    let password = required(&payload.password, "password")?;
    let lang = required(&payload.lang, "lang")?;

    let dealer = service.dealer_login(email, password, lang).await?;
    Ok(success(json!({ "dealer": dealer })))
}

// POST /admin-auth
pub async fn admin_auth_handler(
    State(service): State<Arc<AuthServiceImpl>>,
    Json(payload): Json<AdminAuthRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let password = required(&payload.password, "password")?;
    service.admin_login(password).await?;
    Ok(success(json!({ "authenticated": true })))
}

// POST /change-admin-password
pub async fn change_admin_password_handler(
    State(service): State<Arc<AuthServiceImpl>>,
    Json(payload): Json<ChangeAdminPasswordRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let current = required(&payload.current_password, "currentPassword")?;
    let new = required(&payload.new_password, "newPassword")?;
    service.change_admin_password(current, new).await?;
    Ok(success(json!({ "changed": true })))
}
