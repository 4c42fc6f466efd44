use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::quote_dto::CustomerView;
use crate::model::order::Order;
use crate::model::quote::STATUS_PENDING;

/// Direct order creation arrives flat and snake_case, already close to the
/// storage shape; only defaulting and the dealer id parse remain.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveOrderRequest {
    pub order_id: Option<String>,
    pub dealer_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub customer_city: Option<String>,
    pub customer_state: Option<String>,
    pub customer_zip: Option<String>,
    pub customer_country: Option<String>,
    pub model: Option<String>,
    pub engine: Option<String>,
    pub hull_color: Option<String>,
    pub upholstery_package: Option<String>,
    pub options: Option<Vec<String>>,
    pub payment_method: Option<String>,
    pub deposit_amount: Option<f64>,
    pub additional_notes: Option<String>,
    pub total_usd: Option<f64>,
    pub total_brl: Option<f64>,
}

fn required(value: &Option<String>, field: &str) -> Result<(), String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(format!("Missing required field: {}", field)),
    }
}

impl SaveOrderRequest {
    pub fn validate_required(&self) -> Result<Uuid, String> {
        required(&self.order_id, "order_id")?;
        required(&self.dealer_id, "dealer_id")?;
        required(&self.customer_name, "customer_name")?;
        required(&self.customer_email, "customer_email")?;
        required(&self.model, "model")?;
        required(&self.engine, "engine")?;
        required(&self.hull_color, "hull_color")?;

        let raw = self.dealer_id.as_deref().unwrap_or_default();
        Uuid::parse_str(raw).map_err(|_| "Invalid dealer_id: expected a UUID".to_string())
    }

    pub fn into_order(self, dealer_id: Uuid) -> Order {
        let now = Utc::now();
        Order {
            id: self.order_id.unwrap_or_default(),
            dealer_id,
            customer_name: self.customer_name.unwrap_or_default(),
            customer_email: self.customer_email.unwrap_or_default(),
            customer_phone: self.customer_phone.unwrap_or_default(),
            customer_address: self.customer_address.unwrap_or_default(),
            customer_city: self.customer_city.unwrap_or_default(),
            customer_state: self.customer_state.unwrap_or_default(),
            customer_zip: self.customer_zip.unwrap_or_default(),
            customer_country: self.customer_country.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            engine: self.engine.unwrap_or_default(),
            hull_color: self.hull_color.unwrap_or_default(),
            upholstery_package: self.upholstery_package.unwrap_or_default(),
            options: self.options.unwrap_or_default(),
            payment_method: self.payment_method.unwrap_or_default(),
            deposit_amount: self.deposit_amount.unwrap_or_default(),
            additional_notes: self.additional_notes.unwrap_or_default(),
            total_usd: self.total_usd.unwrap_or_default(),
            total_brl: self.total_brl.unwrap_or_default(),
            status: STATUS_PENDING.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "dealerId")]
    pub dealer_id: Uuid,
    pub customer: CustomerView,
    pub model: String,
    pub engine: String,
    pub hull_color: String,
    pub upholstery_package: String,
    pub options: Vec<String>,
    pub payment_method: String,
    pub deposit_amount: f64,
    pub additional_notes: String,
    #[serde(rename = "totalUsd")]
    pub total_usd: f64,
    #[serde(rename = "totalBrl")]
    pub total_brl: f64,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            order_id: order.id,
            dealer_id: order.dealer_id,
            customer: CustomerView {
                name: order.customer_name,
                email: order.customer_email,
                phone: order.customer_phone,
                address: order.customer_address,
                city: order.customer_city,
                state: order.customer_state,
                zip: order.customer_zip,
                country: order.customer_country,
            },
            model: order.model,
            engine: order.engine,
            hull_color: order.hull_color,
            upholstery_package: order.upholstery_package,
            options: order.options,
            payment_method: order.payment_method,
            deposit_amount: order.deposit_amount,
            additional_notes: order.additional_notes,
            total_usd: order.total_usd,
            total_brl: order.total_brl,
            status: order.status,
            created_at: order.created_at,
        }
    }
}
