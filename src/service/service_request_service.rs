use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::service_request_dto::SaveServiceRequestRequest;
use crate::model::dealer::Dealer;
use crate::model::service_request::ServiceRequest;
use crate::repository::dealer_repo::DealerRepository;
use crate::repository::service_request_repo::ServiceRequestRepository;
use crate::util::error::ServiceError;
use crate::util::ident;

#[async_trait]
pub trait ServiceRequestService: Send + Sync {
    async fn save_service_request(
        &self,
        request: SaveServiceRequestRequest,
    ) -> Result<ServiceRequest, ServiceError>;
    async fn list_dealer_service_requests(
        &self,
        dealer_id: Uuid,
    ) -> Result<Vec<ServiceRequest>, ServiceError>;
    async fn list_all(&self) -> Result<Vec<ServiceRequest>, ServiceError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<ServiceRequest, ServiceError>;
}

pub struct ServiceRequestServiceImpl {
    pub request_repo: Arc<dyn ServiceRequestRepository>,
    pub dealer_repo: Arc<dyn DealerRepository>,
}

impl ServiceRequestServiceImpl {
    pub fn new(
        request_repo: Arc<dyn ServiceRequestRepository>,
        dealer_repo: Arc<dyn DealerRepository>,
    ) -> Self {
        Self {
            request_repo,
            dealer_repo,
        }
    }

    /// Resolve the dealer from the id when present, falling back to the name.
    async fn resolve_dealer(
        &self,
        request: &SaveServiceRequestRequest,
    ) -> Result<Dealer, ServiceError> {
        if let Some(raw_id) = request.dealer_id.as_deref().filter(|s| !s.trim().is_empty()) {
            let id = Uuid::parse_str(raw_id)
                .map_err(|_| ServiceError::InvalidInput("Invalid dealer_id: expected a UUID".to_string()))?;
            if let Some(dealer) = self
                .dealer_repo
                .find_by_id(id)
                .await
                .map_err(ServiceError::from)?
            {
                return Ok(dealer);
            }
        } else if let Some(name) = request.dealer_name.as_deref().filter(|s| !s.trim().is_empty()) {
            if let Some(dealer) = self
                .dealer_repo
                .find_by_name(name)
                .await
                .map_err(ServiceError::from)?
            {
                return Ok(dealer);
            }
        }
        warn!("Service request references an unknown dealer");
        Err(ServiceError::NotFound("Dealer not found".to_string()))
    }
}

#[async_trait]
impl ServiceRequestService for ServiceRequestServiceImpl {
    #[instrument(skip(self, request))]
    async fn save_service_request(
        &self,
        request: SaveServiceRequestRequest,
    ) -> Result<ServiceRequest, ServiceError> {
        info!("Saving service request");

        request
            .validate_required()
            .map_err(ServiceError::InvalidInput)?;

        let dealer = self.resolve_dealer(&request).await?;
        let service_request =
            request.into_service_request(ident::service_request_id(), dealer.id);
        let created = self
            .request_repo
            .create(service_request)
            .await
            .map_err(ServiceError::from)?;
        info!("Service request {} saved", created.id);
        Ok(created)
    }

    #[instrument(skip(self), fields(dealer_id = %dealer_id))]
    async fn list_dealer_service_requests(
        &self,
        dealer_id: Uuid,
    ) -> Result<Vec<ServiceRequest>, ServiceError> {
        self.request_repo
            .list_by_dealer(dealer_id)
            .await
            .map_err(ServiceError::from)
    }

    async fn list_all(&self) -> Result<Vec<ServiceRequest>, ServiceError> {
        self.request_repo.list_all().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id, status = %status))]
    async fn update_status(&self, id: &str, status: &str) -> Result<ServiceRequest, ServiceError> {
        self.request_repo
            .update_status(id, status)
            .await
            .map_err(ServiceError::from)
    }
}
