use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;

use maresul_backend::config::UploadConfig;
use maresul_backend::router::upload_router::upload_router;
use maresul_backend::service::upload_service::UploadServiceImpl;
use maresul_backend::util::cdn::CdnClient;
use tower::ServiceExt;

const BOUNDARY: &str = "X-BOUNDARY";

fn app() -> Router {
    // No CDN configured: anything passing local validation answers 503,
    // proving validation runs before the upstream call.
    upload_router(Arc::new(UploadServiceImpl::new(CdnClient::new(
        UploadConfig::unconfigured(),
    ))))
}

fn multipart_body(filename: &str, content_type: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
            BOUNDARY, filename, content_type
        )
        .as_bytes(),
    );
    body.extend(content);
    body.extend(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

async fn upload(filename: &str, content_type: &str, content: &[u8]) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/upload-image")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(filename, content_type, content)))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

#[tokio::test]
async fn six_megabyte_file_is_rejected_with_400() {
    let six_mb = vec![0u8; 6 * 1024 * 1024];
    let (status, body) = upload("photo.png", "image/png", &six_mb).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("maximum size"));
}

#[tokio::test]
async fn text_file_is_rejected_with_400() {
    let (status, body) = upload("notes.txt", "text/plain", b"not an image").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Unsupported image type"));
}

#[tokio::test]
async fn valid_image_reaches_the_configuration_gate() {
    let (status, _) = upload("photo.jpg", "image/jpeg", &[0xFFu8; 128]).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn missing_file_field_is_rejected() {
    let body = format!(
        "--{}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{}--\r\n",
        BOUNDARY, BOUNDARY
    );
    let request = Request::builder()
        .method("POST")
        .uri("/upload-image")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
