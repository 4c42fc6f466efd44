use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::util::cdn::{CdnClient, CdnError};
use crate::util::error::ServiceError;

/// Content types the portal accepts for catalog and marketing imagery.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];

#[async_trait]
pub trait UploadService: Send + Sync {
    /// Validate and forward an image to the CDN, returning the hosted URL.
    async fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String, ServiceError>;
}

pub struct UploadServiceImpl {
    pub cdn: CdnClient,
}

impl UploadServiceImpl {
    pub fn new(cdn: CdnClient) -> Self {
        Self { cdn }
    }
}

#[async_trait]
impl UploadService for UploadServiceImpl {
    #[instrument(skip(self, data), fields(filename = %filename, content_type = %content_type, size = data.len()))]
    async fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String, ServiceError> {
        info!("Image upload requested");

        // Local validation always runs before any upstream call.
        if data.is_empty() {
            return Err(ServiceError::InvalidInput("Uploaded file is empty".to_string()));
        }

        let max = self.cdn.config.max_file_bytes;
        if data.len() > max {
            warn!("Rejected oversized upload ({} bytes)", data.len());
            return Err(ServiceError::InvalidInput(format!(
                "File exceeds the maximum size of {} bytes",
                max
            )));
        }

        if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
            warn!("Rejected upload with content type '{}'", content_type);
            return Err(ServiceError::InvalidInput(format!(
                "Unsupported image type: {}",
                content_type
            )));
        }

        match self.cdn.upload(filename, content_type, data).await {
            Ok(url) => Ok(url),
            Err(CdnError::NotConfigured) => Err(ServiceError::Unavailable(
                "Image CDN is not configured".to_string(),
            )),
            Err(CdnError::RateLimited) => Err(ServiceError::RateLimited(
                "Image CDN rate limit exceeded".to_string(),
            )),
            Err(CdnError::Upstream(msg)) => Err(ServiceError::InternalError(msg)),
        }
    }
}
