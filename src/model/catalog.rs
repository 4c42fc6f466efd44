use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four priced option families share one column shape and differ only in
/// which table they live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    EnginePackages,
    HullColors,
    UpholsteryPackages,
    AdditionalOptions,
}

impl CatalogKind {
    pub fn table(self) -> &'static str {
        match self {
            CatalogKind::EnginePackages => "engine_packages",
            CatalogKind::HullColors => "hull_colors",
            CatalogKind::UpholsteryPackages => "upholstery_packages",
            CatalogKind::AdditionalOptions => "additional_options",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table())
    }
}

/// Priced option row: name in two languages, price in two currencies.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CatalogItem {
    pub id: Uuid,
    pub name_en: String,
    pub name_pt: String,
    pub price_usd: f64,
    pub price_brl: f64,
    pub display_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BoatModel {
    pub id: Uuid,
    pub name: String,
    pub description_en: String,
    pub description_pt: String,
    pub base_price_usd: f64,
    pub base_price_brl: f64,
    pub image_url: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MarketingContent {
    pub id: Uuid,
    pub title_en: String,
    pub title_pt: String,
    pub body_en: String,
    pub body_pt: String,
    pub image_url: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FactoryProduction {
    pub id: Uuid,
    pub model: String,
    pub hull_number: String,
    pub stage: String,
    pub scheduled_date: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BoatSale {
    pub id: Uuid,
    pub model: String,
    pub hull_id: String,
    pub dealer_name: String,
    pub sale_price_usd: f64,
    pub sale_price_brl: f64,
    pub sale_date: String,
    pub display_order: i32,
}
