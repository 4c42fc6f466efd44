//! Admin CRUD handlers. Every table follows the same list/upsert/delete
//! shape; the four priced option families share their implementation and
//! only pin a different table.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::catalog_dto::{
    IdQuery, UpsertBoatModelRequest, UpsertBoatSaleRequest, UpsertCatalogItemRequest,
    UpsertDealerRequest, UpsertFactoryProductionRequest, UpsertMarketingContentRequest,
};
use crate::model::catalog::CatalogKind;
use crate::service::catalog_service::{CatalogService, CatalogServiceImpl};
use crate::util::error::HandlerError;
use crate::util::response::success;

fn require_id(params: IdQuery) -> Result<Uuid, HandlerError> {
    params
        .id
        .ok_or_else(|| HandlerError::validation("Missing required parameter: id"))
}

async fn list_items(
    service: Arc<CatalogServiceImpl>,
    kind: CatalogKind,
) -> Result<impl IntoResponse, HandlerError> {
    let items = service.list_items(kind).await?;
    Ok(success(items))
}

async fn upsert_item(
    service: Arc<CatalogServiceImpl>,
    kind: CatalogKind,
    payload: UpsertCatalogItemRequest,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let item = service.upsert_item(kind, payload.into_item()).await?;
    Ok(success(item))
}

async fn delete_item(
    service: Arc<CatalogServiceImpl>,
    kind: CatalogKind,
    params: IdQuery,
) -> Result<impl IntoResponse, HandlerError> {
    let id = require_id(params)?;
    service.delete_item(kind, id).await?;
    Ok(success(serde_json::json!({ "deleted": id })))
}

// --- engine packages ---

pub async fn list_engine_packages_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    list_items(service, CatalogKind::EnginePackages).await
}

pub async fn upsert_engine_package_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<UpsertCatalogItemRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    upsert_item(service, CatalogKind::EnginePackages, payload).await
}

pub async fn delete_engine_package_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    delete_item(service, CatalogKind::EnginePackages, params).await
}

// --- hull colors ---

pub async fn list_hull_colors_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    list_items(service, CatalogKind::HullColors).await
}

pub async fn upsert_hull_color_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<UpsertCatalogItemRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    upsert_item(service, CatalogKind::HullColors, payload).await
}

pub async fn delete_hull_color_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    delete_item(service, CatalogKind::HullColors, params).await
}

// --- upholstery packages ---

pub async fn list_upholstery_packages_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    list_items(service, CatalogKind::UpholsteryPackages).await
}

pub async fn upsert_upholstery_package_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<UpsertCatalogItemRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    upsert_item(service, CatalogKind::UpholsteryPackages, payload).await
}

pub async fn delete_upholstery_package_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    delete_item(service, CatalogKind::UpholsteryPackages, params).await
}

// --- additional options ---

pub async fn list_additional_options_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    list_items(service, CatalogKind::AdditionalOptions).await
}

pub async fn upsert_additional_option_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<UpsertCatalogItemRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    upsert_item(service, CatalogKind::AdditionalOptions, payload).await
}

pub async fn delete_additional_option_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    delete_item(service, CatalogKind::AdditionalOptions, params).await
}

// --- boat models ---

pub async fn list_boat_models_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let models = service.list_boat_models().await?;
    Ok(success(models))
}

pub async fn upsert_boat_model_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<UpsertBoatModelRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let model = service.upsert_boat_model(payload.into_model()).await?;
    Ok(success(model))
}

pub async fn delete_boat_model_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = require_id(params)?;
    service.delete_boat_model(id).await?;
    Ok(success(serde_json::json!({ "deleted": id })))
}

// --- marketing content ---

pub async fn list_marketing_content_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let content = service.list_marketing_content().await?;
    Ok(success(content))
}

pub async fn upsert_marketing_content_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<UpsertMarketingContentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let content = service
        .upsert_marketing_content(payload.into_content())
        .await?;
    Ok(success(content))
}

pub async fn delete_marketing_content_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = require_id(params)?;
    service.delete_marketing_content(id).await?;
    Ok(success(serde_json::json!({ "deleted": id })))
}

// --- factory production ---

pub async fn list_factory_production_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let entries = service.list_factory_production().await?;
    Ok(success(entries))
}

pub async fn upsert_factory_production_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<UpsertFactoryProductionRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let entry = service
        .upsert_factory_production(payload.into_entry())
        .await?;
    Ok(success(entry))
}

pub async fn delete_factory_production_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = require_id(params)?;
    service.delete_factory_production(id).await?;
    Ok(success(serde_json::json!({ "deleted": id })))
}

// --- boat sales ---

pub async fn list_boat_sales_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let sales = service.list_boat_sales().await?;
    Ok(success(sales))
}

pub async fn upsert_boat_sale_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<UpsertBoatSaleRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let sale = service.upsert_boat_sale(payload.into_sale()).await?;
    Ok(success(sale))
}

pub async fn delete_boat_sale_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = require_id(params)?;
    service.delete_boat_sale(id).await?;
    Ok(success(serde_json::json!({ "deleted": id })))
}

// --- dealers ---

pub async fn list_dealers_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let dealers = service.list_dealers().await?;
    Ok(success(dealers))
}

pub async fn upsert_dealer_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<UpsertDealerRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let dealer = service.upsert_dealer(payload).await?;
    Ok(success(dealer))
}

pub async fn delete_dealer_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = require_id(params)?;
    service.delete_dealer(id).await?;
    Ok(success(serde_json::json!({ "deleted": id })))
}
