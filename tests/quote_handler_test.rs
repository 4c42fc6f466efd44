mod common;

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;
use std::sync::Arc;

use common::{sample_dealer, send_json, InMemoryDealerRepo, InMemoryQuoteRepo, DEALER_ID};
use maresul_backend::router::quote_router::quote_router;
use maresul_backend::service::quote_service::QuoteServiceImpl;

fn app_with(
    quote_repo: Arc<InMemoryQuoteRepo>,
    dealer_repo: Arc<InMemoryDealerRepo>,
) -> Router {
    quote_router(Arc::new(QuoteServiceImpl::new(quote_repo, dealer_repo, None)))
}

fn full_quote_payload() -> serde_json::Value {
    json!({
        "customer": {
            "name": "Ana Souza",
            "email": "ana@example.com",
            "phone": "+55 48 99999-0000",
            "city": "Florianópolis",
            "country": "Brazil"
        },
        "model": "Maresul 290",
        "engine": "Twin 300HP",
        "hull_color": "Navy Blue",
        "options": ["Bow thruster", "Teak deck"],
        "payment_method": "financing",
        "deposit_amount": 15000.0,
        "totalUsd": 185000.0,
        "totalBrl": 980000.0,
        "dealerId": DEALER_ID
    })
}

#[tokio::test]
async fn save_quote_returns_mapped_quote() {
    let quote_repo = Arc::new(InMemoryQuoteRepo::default());
    let dealer_repo = Arc::new(InMemoryDealerRepo::with(vec![sample_dealer("Brazil", "pw")]));
    let app = app_with(quote_repo.clone(), dealer_repo);

    let (status, body) = send_json(app, "POST", "/save-quote", Some(full_quote_payload())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert!(data["quoteId"].as_str().unwrap().starts_with("QT-"));
    assert_eq!(data["customer"]["name"], "Ana Souza");
    assert_eq!(data["status"], "pending");
    assert_eq!(data["totalUsd"], 185000.0);

    // Optional fields were defaulted before reaching storage.
    let stored = quote_repo.quotes.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].upholstery_package, "");
    assert_eq!(stored[0].additional_notes, "");
    assert_eq!(stored[0].customer_state, "");
}

#[tokio::test]
async fn save_quote_missing_customer_email_names_field_and_writes_nothing() {
    let quote_repo = Arc::new(InMemoryQuoteRepo::default());
    let dealer_repo = Arc::new(InMemoryDealerRepo::with(vec![sample_dealer("Brazil", "pw")]));
    let app = app_with(quote_repo.clone(), dealer_repo);

    let mut payload = full_quote_payload();
    payload["customer"]
        .as_object_mut()
        .unwrap()
        .remove("email");

    let (status, body) = send_json(app, "POST", "/save-quote", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("customer.email"));
    assert!(quote_repo.quotes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn save_quote_rejects_non_canonical_dealer_id_before_storage() {
    let quote_repo = Arc::new(InMemoryQuoteRepo::default());
    let dealer_repo = Arc::new(InMemoryDealerRepo::default());
    let app = app_with(quote_repo.clone(), dealer_repo);

    let mut payload = full_quote_payload();
    payload["dealerId"] = json!("67e5504410b1426f9247bb680e5fe0c8");

    let (status, body) = send_json(app, "POST", "/save-quote", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("dealerId"));
    assert!(quote_repo.quotes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn save_quote_rejects_unknown_dealer() {
    let quote_repo = Arc::new(InMemoryQuoteRepo::default());
    let dealer_repo = Arc::new(InMemoryDealerRepo::default());
    let app = app_with(quote_repo.clone(), dealer_repo);

    let (status, body) = send_json(app, "POST", "/save-quote", Some(full_quote_payload())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Unknown dealer"));
    assert!(quote_repo.quotes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn get_dealer_quotes_requires_canonical_uuid() {
    let quote_repo = Arc::new(InMemoryQuoteRepo::default());
    let dealer_repo = Arc::new(InMemoryDealerRepo::default());

    let app = app_with(quote_repo.clone(), dealer_repo.clone());
    let (status, body) = send_json(app, "GET", "/get-dealer-quotes", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("dealerId"));

    let app = app_with(quote_repo, dealer_repo);
    let (status, body) = send_json(
        app,
        "GET",
        "/get-dealer-quotes?dealerId=not-a-uuid",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("UUID"));
}

#[tokio::test]
async fn saved_quote_round_trips_through_dealer_listing() {
    let quote_repo = Arc::new(InMemoryQuoteRepo::default());
    let dealer_repo = Arc::new(InMemoryDealerRepo::with(vec![sample_dealer("Brazil", "pw")]));

    let app = app_with(quote_repo.clone(), dealer_repo.clone());
    let (status, _) = send_json(app, "POST", "/save-quote", Some(full_quote_payload())).await;
    assert_eq!(status, StatusCode::OK);

    let app = app_with(quote_repo, dealer_repo);
    let (status, body) = send_json(
        app,
        "GET",
        &format!("/get-dealer-quotes?dealerId={}", DEALER_ID),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let quotes = body["data"].as_array().unwrap();
    assert_eq!(quotes.len(), 1);
    let entry = &quotes[0];
    assert_eq!(entry["customer"]["name"], "Ana Souza");
    assert_eq!(entry["customer"]["email"], "ana@example.com");
    assert_eq!(entry["model"], "Maresul 290");
    assert_eq!(entry["totalUsd"], 185000.0);
    assert_eq!(entry["totalBrl"], 980000.0);
    assert_eq!(entry["status"], "pending");
}
