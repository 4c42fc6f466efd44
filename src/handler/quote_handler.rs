use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::dto::quote_dto::{AcceptQuoteRequest, DealerIdQuery, SaveQuoteRequest};
use crate::service::quote_service::{QuoteService, QuoteServiceImpl};
use crate::util::error::HandlerError;
use crate::util::response::success;
use crate::util::validate::parse_canonical_uuid;

// POST /save-quote
pub async fn save_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Json(payload): Json<SaveQuoteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("save-quote requested");
    let quote = service.save_quote(payload).await?;
    Ok(success(quote))
}

// POST /accept-quote
pub async fn accept_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Json(payload): Json<AcceptQuoteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let quote_id = match payload.quote_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(HandlerError::validation("Missing required field: quoteId")),
    };
    info!("accept-quote requested for {}", quote_id);
    let outcome = service.accept_quote(&quote_id).await?;
    Ok(success(outcome))
}

// GET /get-dealer-quotes?dealerId=…
pub async fn get_dealer_quotes_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Query(params): Query<DealerIdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let raw = match params.dealer_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => return Err(HandlerError::validation("Missing required parameter: dealerId")),
    };
    // Strict shape check happens before any storage call.
    let dealer_id = parse_canonical_uuid(raw)
        .ok_or_else(|| HandlerError::validation("Invalid dealerId: expected a canonical UUID"))?;

    let quotes = service.list_dealer_quotes(dealer_id).await?;
    Ok(success(quotes))
}
