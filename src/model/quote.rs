use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_ACCEPTED: &str = "accepted";

/// Storage shape of a quote: flat snake_case columns, no nesting. The wire
/// shape (nested customer object, camelCase totals) lives in the dto layer.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Quote {
    pub id: String,
    pub dealer_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub customer_city: String,
    pub customer_state: String,
    pub customer_zip: String,
    pub customer_country: String,
    pub model: String,
    pub engine: String,
    pub hull_color: String,
    pub upholstery_package: String,
    pub options: Vec<String>,
    pub payment_method: String,
    pub deposit_amount: f64,
    pub additional_notes: String,
    pub total_usd: f64,
    pub total_brl: f64,
    pub status: String,
    pub valid_until: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
