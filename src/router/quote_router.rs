use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::quote_handler::{
    accept_quote_handler, get_dealer_quotes_handler, save_quote_handler,
};
use crate::service::quote_service::QuoteServiceImpl;

pub fn quote_router(service: Arc<QuoteServiceImpl>) -> Router {
    Router::new()
        .route("/save-quote", post(save_quote_handler))
        .route("/accept-quote", post(accept_quote_handler))
        .route("/get-dealer-quotes", get(get_dealer_quotes_handler))
        .with_state(service)
}
