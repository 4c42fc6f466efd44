use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;

use crate::handler::upload_handler::upload_image_handler;
use crate::service::upload_service::UploadServiceImpl;

/// Transport cap above the 5 MB validation limit, so oversized files reach
/// the handler and get the 400 envelope instead of a bare 413.
const UPLOAD_BODY_LIMIT: usize = 20 * 1024 * 1024;

pub fn upload_router(service: Arc<UploadServiceImpl>) -> Router {
    Router::new()
        .route("/upload-image", post(upload_image_handler))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .with_state(service)
}
