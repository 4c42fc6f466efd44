use crate::model::service_request::ServiceRequest;
use crate::repository::db::Database;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

#[async_trait]
pub trait ServiceRequestRepository: Send + Sync {
    async fn create(&self, request: ServiceRequest) -> RepositoryResult<ServiceRequest>;
    async fn list_by_dealer(&self, dealer_id: Uuid) -> RepositoryResult<Vec<ServiceRequest>>;
    async fn list_all(&self) -> RepositoryResult<Vec<ServiceRequest>>;
    async fn update_status(&self, id: &str, status: &str) -> RepositoryResult<ServiceRequest>;
}

pub struct PgServiceRequestRepository {
    db: Database,
}

impl PgServiceRequestRepository {
    pub fn new(db: Database) -> Self {
        PgServiceRequestRepository { db }
    }
}

#[async_trait]
impl ServiceRequestRepository for PgServiceRequestRepository {
    #[tracing::instrument(skip(self, request), fields(id = %request.id, dealer_id = %request.dealer_id))]
    async fn create(&self, request: ServiceRequest) -> RepositoryResult<ServiceRequest> {
        info!("Creating service request");
        let created = sqlx::query_as::<_, ServiceRequest>(
            r#"
            INSERT INTO service_requests (
                id, dealer_id, customer_name, customer_email, customer_phone,
                boat_model, hull_id, purchase_date, engine_hours, issues,
                status, request_type, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(&request.id)
        .bind(request.dealer_id)
        .bind(&request.customer_name)
        .bind(&request.customer_email)
        .bind(&request.customer_phone)
        .bind(&request.boat_model)
        .bind(&request.hull_id)
        .bind(&request.purchase_date)
        .bind(request.engine_hours)
        .bind(&request.issues)
        .bind(&request.status)
        .bind(&request.request_type)
        .bind(request.created_at)
        .bind(request.updated_at)
        .fetch_one(self.db.pool()?)
        .await?;
        Ok(created)
    }

    async fn list_by_dealer(&self, dealer_id: Uuid) -> RepositoryResult<Vec<ServiceRequest>> {
        let requests = sqlx::query_as::<_, ServiceRequest>(
            "SELECT * FROM service_requests WHERE dealer_id = $1 ORDER BY created_at DESC",
        )
        .bind(dealer_id)
        .fetch_all(self.db.pool()?)
        .await?;
        Ok(requests)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<ServiceRequest>> {
        let requests = sqlx::query_as::<_, ServiceRequest>(
            "SELECT * FROM service_requests ORDER BY created_at DESC",
        )
        .fetch_all(self.db.pool()?)
        .await?;
        Ok(requests)
    }

    #[tracing::instrument(skip(self), fields(id = %id, status = %status))]
    async fn update_status(&self, id: &str, status: &str) -> RepositoryResult<ServiceRequest> {
        let updated = sqlx::query_as::<_, ServiceRequest>(
            "UPDATE service_requests SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(self.db.pool()?)
        .await?;
        updated.ok_or_else(|| {
            RepositoryError::not_found(format!("No service request found for ID: {}", id))
        })
    }
}
