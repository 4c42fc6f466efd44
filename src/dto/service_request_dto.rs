use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::model::service_request::{ServiceRequest, STATUS_OPEN};

/// A dealer may be referenced either by id or by display name; the service
/// resolves whichever is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveServiceRequestRequest {
    pub dealer_id: Option<String>,
    #[serde(rename = "dealerName")]
    pub dealer_name: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub boat_model: Option<String>,
    pub hull_id: Option<String>,
    pub purchase_date: Option<String>,
    pub engine_hours: Option<f64>,
    pub issues: Option<Vec<String>>,
    pub request_type: Option<String>,
}

fn required(value: &Option<String>, field: &str) -> Result<(), String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(format!("Missing required field: {}", field)),
    }
}

impl SaveServiceRequestRequest {
    pub fn validate_required(&self) -> Result<(), String> {
        if required(&self.dealer_id, "dealer_id").is_err()
            && required(&self.dealer_name, "dealerName").is_err()
        {
            return Err("Missing required field: dealer_id or dealerName".to_string());
        }
        required(&self.customer_name, "customer_name")?;
        required(&self.boat_model, "boat_model")?;
        Ok(())
    }

    pub fn into_service_request(self, id: String, dealer_id: Uuid) -> ServiceRequest {
        let now = Utc::now();
        ServiceRequest {
            id,
            dealer_id,
            customer_name: self.customer_name.unwrap_or_default(),
            customer_email: self.customer_email.unwrap_or_default(),
            customer_phone: self.customer_phone.unwrap_or_default(),
            boat_model: self.boat_model.unwrap_or_default(),
            hull_id: self.hull_id.unwrap_or_default(),
            purchase_date: self.purchase_date.unwrap_or_default(),
            engine_hours: self.engine_hours.unwrap_or_default(),
            issues: self.issues.unwrap_or_default(),
            status: STATUS_OPEN.to_string(),
            request_type: self.request_type.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateServiceRequestStatusRequest {
    #[validate(length(min = 2, max = 50))]
    pub status: String,
}
