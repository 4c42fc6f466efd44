//! Client for the third-party image CDN. The portal never stores image
//! bytes itself; accepted files are forwarded and the hosted URL returned.

use crate::config::UploadConfig;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{error, info, instrument};

#[derive(Debug, thiserror::Error)]
pub enum CdnError {
    #[error("Image CDN is not configured")]
    NotConfigured,

    #[error("Image CDN rate limit exceeded")]
    RateLimited,

    #[error("Image CDN upload failed: {0}")]
    Upstream(String),
}

#[derive(Debug, Deserialize)]
struct CdnUploadResponse {
    url: String,
}

#[derive(Clone)]
pub struct CdnClient {
    client: reqwest::Client,
    pub config: UploadConfig,
}

impl CdnClient {
    pub fn new(config: UploadConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();
        CdnClient { client, config }
    }

    /// Upload image bytes, returning the hosted URL.
    #[instrument(skip(self, data), fields(filename = %filename, size = data.len()))]
    pub async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String, CdnError> {
        let endpoint = self
            .config
            .endpoint
            .as_deref()
            .ok_or(CdnError::NotConfigured)?;

        info!("Uploading image '{}' to CDN", filename);

        let part = reqwest::multipart::Part::bytes(data)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(|e| CdnError::Upstream(format!("Invalid content type: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let mut request = self.client.post(endpoint).multipart(form);
        if let Some(ref key) = self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            error!("CDN request failed: {}", e);
            CdnError::Upstream(e.to_string())
        })?;

        match response.status() {
            status if status.is_success() => {
                let body: CdnUploadResponse = response.json().await.map_err(|e| {
                    error!("Failed to decode CDN response: {}", e);
                    CdnError::Upstream(format!("Invalid CDN response: {}", e))
                })?;
                info!("Image uploaded successfully: {}", body.url);
                Ok(body.url)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                error!("CDN rate limit exceeded");
                Err(CdnError::RateLimited)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                error!("CDN upload failed with {}: {}", status, body);
                Err(CdnError::Upstream(format!("CDN answered {}: {}", status, body)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_upload_fails_fast() {
        let client = CdnClient::new(UploadConfig::unconfigured());
        let result = client
            .upload("photo.png", "image/png", vec![0u8; 16])
            .await;
        assert!(matches!(result, Err(CdnError::NotConfigured)));
    }
}
