use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::quote::{Quote, STATUS_PENDING};
use crate::util::validate::parse_canonical_uuid;

/// Days a freshly created quote stays valid.
const QUOTE_VALIDITY_DAYS: i64 = 30;

/// Nested customer object as the portal client submits it. Every field is
/// optional on the wire; required ones are enforced by `validate_required`
/// so the error can name the exact field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveQuoteRequest {
    #[serde(default)]
    pub customer: CustomerDto,
    pub model: Option<String>,
    pub engine: Option<String>,
    pub hull_color: Option<String>,
    pub upholstery_package: Option<String>,
    pub options: Option<Vec<String>>,
    pub payment_method: Option<String>,
    pub deposit_amount: Option<f64>,
    pub additional_notes: Option<String>,
    #[serde(rename = "totalUsd")]
    pub total_usd: Option<f64>,
    #[serde(rename = "totalBrl")]
    pub total_brl: Option<f64>,
    #[serde(rename = "dealerId")]
    pub dealer_id: Option<String>,
}

fn missing(field: &str) -> String {
    format!("Missing required field: {}", field)
}

fn required(value: &Option<String>, field: &str) -> Result<(), String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(missing(field)),
    }
}

impl SaveQuoteRequest {
    /// Check the required fields and the dealer id shape. Returns the parsed
    /// dealer id so callers never re-parse.
    pub fn validate_required(&self) -> Result<Uuid, String> {
        required(&self.customer.name, "customer.name")?;
        required(&self.customer.email, "customer.email")?;
        required(&self.customer.phone, "customer.phone")?;
        required(&self.model, "model")?;
        required(&self.engine, "engine")?;
        required(&self.hull_color, "hull_color")?;
        required(&self.dealer_id, "dealerId")?;

        let raw = self.dealer_id.as_deref().unwrap_or_default();
        parse_canonical_uuid(raw)
            .ok_or_else(|| "Invalid dealerId: expected a canonical UUID".to_string())
    }

    /// Map the wire shape into the flat storage shape, defaulting every
    /// optional field so nothing missing reaches storage.
    pub fn into_quote(self, id: String, dealer_id: Uuid) -> Quote {
        let now = Utc::now();
        Quote {
            id,
            dealer_id,
            customer_name: self.customer.name.unwrap_or_default(),
            customer_email: self.customer.email.unwrap_or_default(),
            customer_phone: self.customer.phone.unwrap_or_default(),
            customer_address: self.customer.address.unwrap_or_default(),
            customer_city: self.customer.city.unwrap_or_default(),
            customer_state: self.customer.state.unwrap_or_default(),
            customer_zip: self.customer.zip.unwrap_or_default(),
            customer_country: self.customer.country.unwrap_or_default(),
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
            valid_until: now + Duration::days(QUOTE_VALIDITY_DAYS),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AcceptQuoteRequest {
    #[serde(rename = "quoteId")]
    pub quote_id: Option<String>,
}

/// Dealer-scoped listing query string: `?dealerId=…`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DealerIdQuery {
    #[serde(rename = "dealerId")]
    pub dealer_id: Option<String>,
}

/// Customer block rendered back to the client.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Wire shape of a stored quote: nested customer, camelCase totals.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    #[serde(rename = "quoteId")]
    pub quote_id: String,
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
    #[serde(rename = "validUntil")]
    pub valid_until: DateTime<Utc>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        QuoteResponse {
            quote_id: quote.id,
            dealer_id: quote.dealer_id,
            customer: CustomerView {
                name: quote.customer_name,
                email: quote.customer_email,
                phone: quote.customer_phone,
                address: quote.customer_address,
                city: quote.customer_city,
                state: quote.customer_state,
                zip: quote.customer_zip,
                country: quote.customer_country,
            },
            model: quote.model,
            engine: quote.engine,
            hull_color: quote.hull_color,
            upholstery_package: quote.upholstery_package,
            options: quote.options,
            payment_method: quote.payment_method,
            deposit_amount: quote.deposit_amount,
            additional_notes: quote.additional_notes,
            total_usd: quote.total_usd,
            total_brl: quote.total_brl,
            status: quote.status,
            valid_until: quote.valid_until,
            created_at: quote.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> SaveQuoteRequest {
        serde_json::from_value(serde_json::json!({
            "customer": {
                "name": "Ana Souza",
                "email": "ana@example.com",
                "phone": "+55 48 99999-0000"
            },
            "model": "Maresul 290",
            "engine": "Twin 300HP",
            "hull_color": "Navy Blue",
            "totalUsd": 185000.0,
            "totalBrl": 980000.0,
            "dealerId": "67e55044-10b1-426f-9247-bb680e5fe0c8"
        }))
        .unwrap()
    }

    #[test]
    fn test_validate_required_accepts_full_request() {
        assert!(full_request().validate_required().is_ok());
    }

    #[test]
    fn test_validate_required_names_missing_email() {
        let mut request = full_request();
        request.customer.email = None;
        let err = request.validate_required().unwrap_err();
        assert!(err.contains("customer.email"), "error was: {}", err);
    }

    #[test]
    fn test_validate_required_rejects_blank_model() {
        let mut request = full_request();
        request.model = Some("   ".to_string());
        let err = request.validate_required().unwrap_err();
        assert!(err.contains("model"));
    }

    #[test]
    fn test_validate_required_rejects_non_canonical_dealer_id() {
        let mut request = full_request();
        request.dealer_id = Some("67e5504410b1426f9247bb680e5fe0c8".to_string());
        let err = request.validate_required().unwrap_err();
        assert!(err.contains("dealerId"));
    }

    #[test]
    fn test_into_quote_defaults_optionals() {
        let request = full_request();
        let dealer_id = request.validate_required().unwrap();
        let quote = request.into_quote("QT-20250801-AB12CD".to_string(), dealer_id);
        assert_eq!(quote.customer_address, "");
        assert_eq!(quote.upholstery_package, "");
        assert_eq!(quote.options, Vec::<String>::new());
        assert_eq!(quote.deposit_amount, 0.0);
        assert_eq!(quote.status, STATUS_PENDING);
        assert!(quote.valid_until > quote.created_at);
    }

    #[test]
    fn test_map_back_round_trip() {
        let request = full_request();
        let dealer_id = request.validate_required().unwrap();
        let quote = request.into_quote("QT-20250801-AB12CD".to_string(), dealer_id);
        let response = QuoteResponse::from(quote);
        assert_eq!(response.customer.name, "Ana Souza");
        assert_eq!(response.customer.email, "ana@example.com");
        assert_eq!(response.model, "Maresul 290");
        assert_eq!(response.total_usd, 185000.0);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("totalUsd").is_some());
        assert!(json.get("quoteId").is_some());
    }
}
