use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::quote::Quote;

/// Same column set as a quote minus the validity date. An order converted
/// from a quote does not keep a reference to it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Copy-and-reinterpret a quote into a fresh pending order.
    pub fn from_quote(quote: &Quote, order_id: String) -> Self {
        let now = Utc::now();
        Order {
            id: order_id,
            dealer_id: quote.dealer_id,
            customer_name: quote.customer_name.clone(),
            customer_email: quote.customer_email.clone(),
            customer_phone: quote.customer_phone.clone(),
            customer_address: quote.customer_address.clone(),
            customer_city: quote.customer_city.clone(),
            customer_state: quote.customer_state.clone(),
            customer_zip: quote.customer_zip.clone(),
            customer_country: quote.customer_country.clone(),
            model: quote.model.clone(),
            engine: quote.engine.clone(),
            hull_color: quote.hull_color.clone(),
            upholstery_package: quote.upholstery_package.clone(),
            options: quote.options.clone(),
            payment_method: quote.payment_method.clone(),
            deposit_amount: quote.deposit_amount,
            additional_notes: quote.additional_notes.clone(),
            total_usd: quote.total_usd,
            total_brl: quote.total_brl,
            status: crate::model::quote::STATUS_PENDING.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_quote() -> Quote {
        let now = Utc::now();
        Quote {
            id: "QT-20250801-AB12CD".to_string(),
            dealer_id: Uuid::new_v4(),
            customer_name: "Ana Souza".to_string(),
            customer_email: "ana@example.com".to_string(),
            customer_phone: "+55 48 99999-0000".to_string(),
            customer_address: "Av. Beira Mar 100".to_string(),
            customer_city: "Florianópolis".to_string(),
            customer_state: "SC".to_string(),
            customer_zip: "88000-000".to_string(),
            customer_country: "Brazil".to_string(),
            model: "Maresul 290".to_string(),
            engine: "Twin 300HP".to_string(),
            hull_color: "Navy Blue".to_string(),
            upholstery_package: "Premium".to_string(),
            options: vec!["Bow thruster".to_string(), "Teak deck".to_string()],
            payment_method: "financing".to_string(),
            deposit_amount: 15000.0,
            additional_notes: "Delivery in March".to_string(),
            total_usd: 185000.0,
            total_brl: 980000.0,
            status: crate::model::quote::STATUS_PENDING.to_string(),
            valid_until: now,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_from_quote_copies_product_fields() {
        let quote = sample_quote();
        let order = Order::from_quote(&quote, "ORD-20250801-FF00AA".to_string());
        assert_eq!(order.id, "ORD-20250801-FF00AA");
        assert_eq!(order.dealer_id, quote.dealer_id);
        assert_eq!(order.model, quote.model);
        assert_eq!(order.engine, quote.engine);
        assert_eq!(order.hull_color, quote.hull_color);
        assert_eq!(order.options, quote.options);
        assert_eq!(order.total_usd, quote.total_usd);
        assert_eq!(order.total_brl, quote.total_brl);
        assert_eq!(order.status, crate::model::quote::STATUS_PENDING);
    }
}
