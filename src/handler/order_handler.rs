use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::dto::order_dto::SaveOrderRequest;
use crate::dto::quote_dto::DealerIdQuery;
use crate::service::order_service::{OrderService, OrderServiceImpl};
use crate::util::error::HandlerError;
use crate::util::response::success;

// POST /save-order
pub async fn save_order_handler(
    State(service): State<Arc<OrderServiceImpl>>,
    Json(payload): Json<SaveOrderRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("save-order requested");
    let order = service.save_order(payload).await?;
    Ok(success(order))
}

// GET /get-dealer-orders?dealerId=…
pub async fn get_dealer_orders_handler(
    State(service): State<Arc<OrderServiceImpl>>,
    Query(params): Query<DealerIdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let raw = match params.dealer_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => return Err(HandlerError::validation("Missing required parameter: dealerId")),
    };
    let dealer_id = Uuid::parse_str(raw)
        .map_err(|_| HandlerError::validation("Invalid dealerId: expected a UUID"))?;

    let orders = service.list_dealer_orders(dealer_id).await?;
    Ok(success(orders))
}
