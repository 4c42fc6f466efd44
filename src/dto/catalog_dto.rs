use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::model::catalog::{BoatModel, BoatSale, CatalogItem, FactoryProduction, MarketingContent};

/// Delete-by-id query string: `DELETE /engine-packages?id=…`.
#[derive(Debug, Clone, Deserialize)]
pub struct IdQuery {
    pub id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertCatalogItemRequest {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, message = "name_en is required"))]
    pub name_en: String,
    #[serde(default)]
    pub name_pt: String,
    #[serde(default)]
    pub price_usd: f64,
    #[serde(default)]
    pub price_brl: f64,
    #[serde(default)]
    pub display_order: i32,
}

impl UpsertCatalogItemRequest {
    pub fn into_item(self) -> CatalogItem {
        CatalogItem {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name_en: self.name_en,
            name_pt: self.name_pt,
            price_usd: self.price_usd,
            price_brl: self.price_brl,
            display_order: self.display_order,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertBoatModelRequest {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_pt: String,
    #[serde(default)]
    pub base_price_usd: f64,
    #[serde(default)]
    pub base_price_brl: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub display_order: i32,
}

impl UpsertBoatModelRequest {
    pub fn into_model(self) -> BoatModel {
        BoatModel {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            description_en: self.description_en,
            description_pt: self.description_pt,
            base_price_usd: self.base_price_usd,
            base_price_brl: self.base_price_brl,
            image_url: self.image_url,
            display_order: self.display_order,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertMarketingContentRequest {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, message = "title_en is required"))]
    pub title_en: String,
    #[serde(default)]
    pub title_pt: String,
    #[serde(default)]
    pub body_en: String,
    #[serde(default)]
    pub body_pt: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub display_order: i32,
}

impl UpsertMarketingContentRequest {
    pub fn into_content(self) -> MarketingContent {
        MarketingContent {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            title_en: self.title_en,
            title_pt: self.title_pt,
            body_en: self.body_en,
            body_pt: self.body_pt,
            image_url: self.image_url,
            display_order: self.display_order,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertFactoryProductionRequest {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,
    #[serde(default)]
    pub hull_number: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub scheduled_date: String,
    #[serde(default)]
    pub display_order: i32,
}

impl UpsertFactoryProductionRequest {
    pub fn into_entry(self) -> FactoryProduction {
        FactoryProduction {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            model: self.model,
            hull_number: self.hull_number,
            stage: self.stage,
            scheduled_date: self.scheduled_date,
            display_order: self.display_order,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertBoatSaleRequest {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,
    #[serde(default)]
    pub hull_id: String,
    #[serde(default)]
    pub dealer_name: String,
    #[serde(default)]
    pub sale_price_usd: f64,
    #[serde(default)]
    pub sale_price_brl: f64,
    #[serde(default)]
    pub sale_date: String,
    #[serde(default)]
    pub display_order: i32,
}

impl UpsertBoatSaleRequest {
    pub fn into_sale(self) -> BoatSale {
        BoatSale {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            model: self.model,
            hull_id: self.hull_id,
            dealer_name: self.dealer_name,
            sale_price_usd: self.sale_price_usd,
            sale_price_brl: self.sale_price_brl,
            sale_date: self.sale_date,
            display_order: self.display_order,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertDealerRequest {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Absent means keep the stored password on update.
    pub password: Option<String>,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    crate::model::dealer::COUNTRY_ALL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_catalog_item_upsert_requires_name() {
        let request = UpsertCatalogItemRequest {
            id: None,
            name_en: "".to_string(),
            name_pt: "".to_string(),
            price_usd: 0.0,
            price_brl: 0.0,
            display_order: 0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_catalog_item_upsert_generates_id() {
        let request = UpsertCatalogItemRequest {
            id: None,
            name_en: "Twin 300HP".to_string(),
            name_pt: "Dupla 300HP".to_string(),
            price_usd: 42000.0,
            price_brl: 230000.0,
            display_order: 1,
        };
        assert!(request.validate().is_ok());
        let item = request.into_item();
        assert!(!item.id.is_nil());
        assert_eq!(item.name_en, "Twin 300HP");
    }

    #[test]
    fn test_dealer_upsert_rejects_bad_email() {
        let request = UpsertDealerRequest {
            id: None,
            name: "Marina Norte".to_string(),
            email: "not-an-email".to_string(),
            password: None,
            country: "Brazil".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_dealer_upsert_defaults_country_to_all() {
        let request: UpsertDealerRequest = serde_json::from_value(serde_json::json!({
            "name": "Marina Norte",
            "email": "norte@example.com"
        }))
        .unwrap();
        assert_eq!(request.country, crate::model::dealer::COUNTRY_ALL);
    }
}
