mod common;

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;
use std::sync::Arc;

use common::{send_json, InMemoryCatalogRepo, InMemoryDealerRepo};
use maresul_backend::router::catalog_router::catalog_router;
use maresul_backend::service::catalog_service::CatalogServiceImpl;
use maresul_backend::util::password::{PasswordUtils, PasswordUtilsImpl};
use maresul_backend::util::sync::SyncNotifier;

fn app_with(
    catalog_repo: Arc<InMemoryCatalogRepo>,
    dealer_repo: Arc<InMemoryDealerRepo>,
) -> Router {
    catalog_router(Arc::new(CatalogServiceImpl::new(
        catalog_repo,
        dealer_repo,
        SyncNotifier::disabled(),
    )))
}

#[tokio::test]
async fn engine_package_upsert_list_delete_round_trip() {
    let catalog_repo = Arc::new(InMemoryCatalogRepo::default());
    let dealer_repo = Arc::new(InMemoryDealerRepo::default());

    let app = app_with(catalog_repo.clone(), dealer_repo.clone());
    let (status, body) = send_json(
        app,
        "POST",
        "/engine-packages",
        Some(json!({
            "name_en": "Twin 300HP",
            "name_pt": "Dupla 300HP",
            "price_usd": 42000.0,
            "price_brl": 230000.0,
            "display_order": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    // A second row with a lower display_order lists first.
    let app = app_with(catalog_repo.clone(), dealer_repo.clone());
    let (status, _) = send_json(
        app,
        "POST",
        "/engine-packages",
        Some(json!({ "name_en": "Single 150HP", "display_order": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let app = app_with(catalog_repo.clone(), dealer_repo.clone());
    let (status, body) = send_json(app, "GET", "/engine-packages", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name_en"], "Single 150HP");
    assert_eq!(items[1]["name_en"], "Twin 300HP");

    let app = app_with(catalog_repo.clone(), dealer_repo);
    let (status, _) = send_json(
        app,
        "DELETE",
        &format!("/engine-packages?id={}", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let remaining = catalog_repo.items.lock().unwrap();
    assert_eq!(remaining.get("engine_packages").unwrap().len(), 1);
}

#[tokio::test]
async fn catalog_upsert_requires_name() {
    let catalog_repo = Arc::new(InMemoryCatalogRepo::default());
    let dealer_repo = Arc::new(InMemoryDealerRepo::default());
    let app = app_with(catalog_repo.clone(), dealer_repo);

    let (status, body) = send_json(
        app,
        "POST",
        "/hull-colors",
        Some(json!({ "name_en": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(catalog_repo.items.lock().unwrap().is_empty());
}

#[tokio::test]
async fn delete_requires_id_parameter() {
    let catalog_repo = Arc::new(InMemoryCatalogRepo::default());
    let dealer_repo = Arc::new(InMemoryDealerRepo::default());
    let app = app_with(catalog_repo, dealer_repo);

    let (status, body) = send_json(app, "DELETE", "/boat-models", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("id"));
}

#[tokio::test]
async fn boat_model_and_marketing_upserts_default_numeric_fields() {
    let catalog_repo = Arc::new(InMemoryCatalogRepo::default());
    let dealer_repo = Arc::new(InMemoryDealerRepo::default());

    let app = app_with(catalog_repo.clone(), dealer_repo.clone());
    let (status, body) = send_json(
        app,
        "POST",
        "/boat-models",
        Some(json!({ "name": "Maresul 290" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["base_price_usd"], 0.0);
    assert_eq!(body["data"]["image_url"], "");

    let app = app_with(catalog_repo, dealer_repo);
    let (status, body) = send_json(
        app,
        "POST",
        "/marketing-content",
        Some(json!({ "title_en": "Summer campaign" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["display_order"], 0);
}

#[tokio::test]
async fn dealer_upsert_hashes_the_password() {
    let catalog_repo = Arc::new(InMemoryCatalogRepo::default());
    let dealer_repo = Arc::new(InMemoryDealerRepo::default());

    let app = app_with(catalog_repo, dealer_repo.clone());
    let (status, body) = send_json(
        app,
        "POST",
        "/dealers",
        Some(json!({
            "name": "Marina Sul",
            "email": "sul@example.com",
            "password": "vento-sul-22",
            "country": "Brazil"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["country"], "Brazil");
    // The stored hash verifies and is never the plaintext.
    let dealers = dealer_repo.dealers.lock().unwrap();
    assert_eq!(dealers.len(), 1);
    assert_ne!(dealers[0].password_hash, "vento-sul-22");
    assert!(PasswordUtilsImpl::verify_password("vento-sul-22", &dealers[0].password_hash).unwrap());
}

#[tokio::test]
async fn dealer_upsert_without_password_keeps_existing_hash() {
    let catalog_repo = Arc::new(InMemoryCatalogRepo::default());
    let dealer_repo = Arc::new(InMemoryDealerRepo::default());

    let app = app_with(catalog_repo.clone(), dealer_repo.clone());
    let (_, body) = send_json(
        app,
        "POST",
        "/dealers",
        Some(json!({
            "name": "Marina Sul",
            "email": "sul@example.com",
            "password": "vento-sul-22"
        })),
    )
    .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    let original_hash = dealer_repo.dealers.lock().unwrap()[0].password_hash.clone();

    let app = app_with(catalog_repo, dealer_repo.clone());
    let (status, _) = send_json(
        app,
        "POST",
        "/dealers",
        Some(json!({
            "id": id,
            "name": "Marina Sul Renamed",
            "email": "sul@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let dealers = dealer_repo.dealers.lock().unwrap();
    assert_eq!(dealers[0].name, "Marina Sul Renamed");
    assert_eq!(dealers[0].password_hash, original_hash);
}
