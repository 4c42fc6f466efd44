use axum::{routing::post, Router};
use std::sync::Arc;

use crate::handler::auth_handler::{
    admin_auth_handler, change_admin_password_handler, dealer_auth_handler,
};
use crate::service::auth_service::AuthServiceImpl;

pub fn auth_router(service: Arc<AuthServiceImpl>) -> Router {
    Router::new()
        .route("/dealer-auth", post(dealer_auth_handler))
        .route("/admin-auth", post(admin_auth_handler))
        .route("/change-admin-password", post(change_admin_password_handler))
        .with_state(service)
}
