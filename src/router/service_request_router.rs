use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::handler::service_request_handler::{
    get_dealer_service_requests_handler, list_service_requests_handler,
    save_service_request_handler, update_service_request_status_handler,
};
use crate::service::service_request_service::ServiceRequestServiceImpl;

pub fn service_request_router(service: Arc<ServiceRequestServiceImpl>) -> Router {
    Router::new()
        .route("/save-service-request", post(save_service_request_handler))
        .route(
            "/get-dealer-service-requests",
            get(get_dealer_service_requests_handler),
        )
        .route("/service-requests", get(list_service_requests_handler))
        .route(
            "/service-requests/{id}/status",
            put(update_service_request_status_handler),
        )
        .with_state(service)
}
