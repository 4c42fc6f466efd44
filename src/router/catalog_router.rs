use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handler::catalog_handler::*;
use crate::service::catalog_service::CatalogServiceImpl;

pub fn catalog_router(service: Arc<CatalogServiceImpl>) -> Router {
    Router::new()
        .route(
            "/engine-packages",
            get(list_engine_packages_handler)
                .post(upsert_engine_package_handler)
                .delete(delete_engine_package_handler),
        )
        .route(
            "/hull-colors",
            get(list_hull_colors_handler)
                .post(upsert_hull_color_handler)
                .delete(delete_hull_color_handler),
        )
        .route(
            "/upholstery-packages",
            get(list_upholstery_packages_handler)
                .post(upsert_upholstery_package_handler)
                .delete(delete_upholstery_package_handler),
        )
        .route(
            "/additional-options",
            get(list_additional_options_handler)
                .post(upsert_additional_option_handler)
                .delete(delete_additional_option_handler),
        )
        .route(
            "/boat-models",
            get(list_boat_models_handler)
                .post(upsert_boat_model_handler)
                .delete(delete_boat_model_handler),
        )
        .route(
            "/marketing-content",
            get(list_marketing_content_handler)
                .post(upsert_marketing_content_handler)
                .delete(delete_marketing_content_handler),
        )
        .route(
            "/factory-production",
            get(list_factory_production_handler)
                .post(upsert_factory_production_handler)
                .delete(delete_factory_production_handler),
        )
        .route(
            "/boat-sales",
            get(list_boat_sales_handler)
                .post(upsert_boat_sale_handler)
                .delete(delete_boat_sale_handler),
        )
        .route(
            "/dealers",
            get(list_dealers_handler)
                .post(upsert_dealer_handler)
                .delete(delete_dealer_handler),
        )
        .with_state(service)
}
