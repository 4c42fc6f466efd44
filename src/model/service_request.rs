use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const STATUS_OPEN: &str = "open";

/// Post-sale support/warranty ticket tied to a dealer and a specific boat.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ServiceRequest {
    pub id: String,
    pub dealer_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub boat_model: String,
    pub hull_id: String,
    pub purchase_date: String,
    pub engine_hours: f64,
    pub issues: Vec<String>,
    pub status: String,
    pub request_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
