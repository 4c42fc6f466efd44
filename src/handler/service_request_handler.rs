use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::quote_dto::DealerIdQuery;
use crate::dto::service_request_dto::{SaveServiceRequestRequest, UpdateServiceRequestStatusRequest};
use crate::service::service_request_service::{ServiceRequestService, ServiceRequestServiceImpl};
use crate::util::error::HandlerError;
use crate::util::response::success;

// POST /save-service-request
pub async fn save_service_request_handler(
    State(service): State<Arc<ServiceRequestServiceImpl>>,
    Json(payload): Json<SaveServiceRequestRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let created = service.save_service_request(payload).await?;
    Ok(success(created))
}

// GET /get-dealer-service-requests?dealerId=…
pub async fn get_dealer_service_requests_handler(
    State(service): State<Arc<ServiceRequestServiceImpl>>,
    Query(params): Query<DealerIdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let raw = match params.dealer_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => return Err(HandlerError::validation("Missing required parameter: dealerId")),
    };
    let dealer_id = Uuid::parse_str(raw)
        .map_err(|_| HandlerError::validation("Invalid dealerId: expected a UUID"))?;

    let requests = service.list_dealer_service_requests(dealer_id).await?;
    Ok(success(requests))
}

// GET /service-requests (admin)
pub async fn list_service_requests_handler(
    State(service): State<Arc<ServiceRequestServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let requests = service.list_all().await?;
    Ok(success(requests))
}

// PUT /service-requests/{id}/status (admin)
pub async fn update_service_request_status_handler(
    State(service): State<Arc<ServiceRequestServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateServiceRequestStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let updated = service.update_status(&id, &payload.status).await?;
    Ok(success(updated))
}
