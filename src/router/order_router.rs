use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::order_handler::{get_dealer_orders_handler, save_order_handler};
use crate::service::order_service::OrderServiceImpl;

pub fn order_router(service: Arc<OrderServiceImpl>) -> Router {
    Router::new()
        .route("/save-order", post(save_order_handler))
        .route("/get-dealer-orders", get(get_dealer_orders_handler))
        .with_state(service)
}
