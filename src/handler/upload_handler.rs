use axum::{extract::Multipart, extract::State, response::IntoResponse};
use bytes::BytesMut;
use std::sync::Arc;
use tracing::{error, info};

use crate::service::upload_service::{UploadService, UploadServiceImpl};
use crate::util::error::HandlerError;
use crate::util::response::success;

// POST /upload-image (multipart, field "file")
pub async fn upload_image_handler(
    State(service): State<Arc<UploadServiceImpl>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    info!("upload-image requested");

    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        HandlerError::bad_request(format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();
        if name != "file" {
            continue;
        }

        let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_default();

        let mut buf = BytesMut::new();
        let mut stream = field;
        while let Some(chunk) = stream.chunk().await.map_err(|e| {
            error!("Failed to read file chunk: {}", e);
            HandlerError::bad_request(format!("Failed to read file chunk: {}", e))
        })? {
            buf.extend_from_slice(&chunk);
        }

        info!("Received file '{}' ({} bytes)", filename, buf.len());
        file = Some((filename, content_type, buf.to_vec()));
    }

    let (filename, content_type, data) =
        file.ok_or_else(|| HandlerError::validation("Missing required field: file"))?;

    let url = service.upload_image(&filename, &content_type, data).await?;
    Ok(success(serde_json::json!({ "url": url })))
}
