#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use tower::ServiceExt;
use uuid::Uuid;

use maresul_backend::model::catalog::{
    BoatModel, BoatSale, CatalogItem, CatalogKind, FactoryProduction, MarketingContent,
};
use maresul_backend::model::dealer::Dealer;
use maresul_backend::model::order::Order;
use maresul_backend::model::quote::{Quote, STATUS_ACCEPTED, STATUS_PENDING};
use maresul_backend::model::service_request::ServiceRequest;
use maresul_backend::repository::catalog_repo::CatalogRepository;
use maresul_backend::repository::dealer_repo::DealerRepository;
use maresul_backend::repository::order_repo::OrderRepository;
use maresul_backend::repository::quote_repo::QuoteRepository;
use maresul_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use maresul_backend::repository::service_request_repo::ServiceRequestRepository;
use maresul_backend::repository::settings_repo::SettingsRepository;
use maresul_backend::util::password::{PasswordUtils, PasswordUtilsImpl};

// ---- request helpers ----

pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            builder.body(Body::from(json.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

// ---- fixtures ----

pub const DEALER_ID: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

pub fn sample_dealer(country: &str, password: &str) -> Dealer {
    let now = Utc::now();
    Dealer {
        id: Uuid::parse_str(DEALER_ID).unwrap(),
        name: "Marina Norte".to_string(),
        email: "norte@example.com".to_string(),
        password_hash: PasswordUtilsImpl::hash_password(password).unwrap(),
        country: country.to_string(),
        created_at: now,
        updated_at: now,
    }
}

// ---- in-memory repositories ----

#[derive(Default)]
pub struct InMemoryDealerRepo {
    pub dealers: Mutex<Vec<Dealer>>,
}

impl InMemoryDealerRepo {
    pub fn with(dealers: Vec<Dealer>) -> Self {
        InMemoryDealerRepo {
            dealers: Mutex::new(dealers),
        }
    }
}

#[async_trait]
impl DealerRepository for InMemoryDealerRepo {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Dealer>> {
        Ok(self.dealers.lock().unwrap().iter().find(|d| d.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Dealer>> {
        Ok(self
            .dealers
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.email == email)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Dealer>> {
        Ok(self
            .dealers
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.name == name)
            .cloned())
    }

    async fn list(&self) -> RepositoryResult<Vec<Dealer>> {
        Ok(self.dealers.lock().unwrap().clone())
    }

    async fn upsert(
        &self,
        id: Uuid,
        name: &str,
        email: &str,
        password_hash: Option<&str>,
        country: &str,
    ) -> RepositoryResult<Dealer> {
        let mut dealers = self.dealers.lock().unwrap();
        let now = Utc::now();
        if let Some(existing) = dealers.iter_mut().find(|d| d.id == id) {
            existing.name = name.to_string();
            existing.email = email.to_string();
            if let Some(hash) = password_hash {
                existing.password_hash = hash.to_string();
            }
            existing.country = country.to_string();
            existing.updated_at = now;
            return Ok(existing.clone());
        }
        let dealer = Dealer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.unwrap_or_default().to_string(),
            country: country.to_string(),
            created_at: now,
            updated_at: now,
        };
        dealers.push(dealer.clone());
        Ok(dealer)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let mut dealers = self.dealers.lock().unwrap();
        let before = dealers.len();
        dealers.retain(|d| d.id != id);
        if dealers.len() == before {
            return Err(RepositoryError::not_found(format!("No dealer {}", id)));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryQuoteRepo {
    pub quotes: Mutex<Vec<Quote>>,
    pub orders: Mutex<Vec<Order>>,
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepo {
    async fn create(&self, quote: Quote) -> RepositoryResult<Quote> {
        self.quotes.lock().unwrap().push(quote.clone());
        Ok(quote)
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Quote>> {
        Ok(self.quotes.lock().unwrap().iter().find(|q| q.id == id).cloned())
    }

    async fn list_by_dealer(&self, dealer_id: Uuid) -> RepositoryResult<Vec<Quote>> {
        Ok(self
            .quotes
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.dealer_id == dealer_id)
            .cloned()
            .collect())
    }

    async fn accept_into_order(
        &self,
        quote_id: &str,
        order: Order,
    ) -> RepositoryResult<(Quote, Order)> {
        let mut quotes = self.quotes.lock().unwrap();
        let quote = quotes
            .iter_mut()
            .find(|q| q.id == quote_id && q.status == STATUS_PENDING)
            .ok_or_else(|| {
                RepositoryError::not_found(format!("No pending quote found for ID: {}", quote_id))
            })?;
        quote.status = STATUS_ACCEPTED.to_string();
        quote.updated_at = Utc::now();
        let accepted = quote.clone();
        self.orders.lock().unwrap().push(order.clone());
        Ok((accepted, order))
    }
}

#[derive(Default)]
pub struct InMemoryOrderRepo {
    pub orders: Mutex<Vec<Order>>,
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepo {
    async fn create(&self, order: Order) -> RepositoryResult<Order> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn list_by_dealer(&self, dealer_id: Uuid) -> RepositoryResult<Vec<Order>> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.dealer_id == dealer_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemorySettingsRepo {
    pub values: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepo {
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> RepositoryResult<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryServiceRequestRepo {
    pub requests: Mutex<Vec<ServiceRequest>>,
}

#[async_trait]
impl ServiceRequestRepository for InMemoryServiceRequestRepo {
    async fn create(&self, request: ServiceRequest) -> RepositoryResult<ServiceRequest> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(request)
    }

    async fn list_by_dealer(&self, dealer_id: Uuid) -> RepositoryResult<Vec<ServiceRequest>> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.dealer_id == dealer_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<ServiceRequest>> {
        Ok(self.requests.lock().unwrap().clone())
    }

    async fn update_status(&self, id: &str, status: &str) -> RepositoryResult<ServiceRequest> {
        let mut requests = self.requests.lock().unwrap();
        let request = requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RepositoryError::not_found(format!("No service request {}", id)))?;
        request.status = status.to_string();
        request.updated_at = Utc::now();
        Ok(request.clone())
    }
}

#[derive(Default)]
pub struct InMemoryCatalogRepo {
    pub items: Mutex<HashMap<&'static str, Vec<CatalogItem>>>,
    pub boat_models: Mutex<Vec<BoatModel>>,
    pub marketing: Mutex<Vec<MarketingContent>>,
    pub factory: Mutex<Vec<FactoryProduction>>,
    pub sales: Mutex<Vec<BoatSale>>,
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepo {
    async fn list_items(&self, kind: CatalogKind) -> RepositoryResult<Vec<CatalogItem>> {
        let mut items = self
            .items
            .lock()
            .unwrap()
            .get(kind.table())
            .cloned()
            .unwrap_or_default();
        items.sort_by_key(|i| i.display_order);
        Ok(items)
    }

    async fn upsert_item(
        &self,
        kind: CatalogKind,
        item: CatalogItem,
    ) -> RepositoryResult<CatalogItem> {
        let mut tables = self.items.lock().unwrap();
        let items = tables.entry(kind.table()).or_default();
        if let Some(existing) = items.iter_mut().find(|i| i.id == item.id) {
            *existing = item.clone();
        } else {
            items.push(item.clone());
        }
        Ok(item)
    }

    async fn delete_item(&self, kind: CatalogKind, id: Uuid) -> RepositoryResult<()> {
        let mut tables = self.items.lock().unwrap();
        let items = tables.entry(kind.table()).or_default();
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(RepositoryError::not_found(format!("No row for {}", id)));
        }
        Ok(())
    }

    async fn list_boat_models(&self) -> RepositoryResult<Vec<BoatModel>> {
        Ok(self.boat_models.lock().unwrap().clone())
    }

    async fn upsert_boat_model(&self, model: BoatModel) -> RepositoryResult<BoatModel> {
        let mut models = self.boat_models.lock().unwrap();
        if let Some(existing) = models.iter_mut().find(|m| m.id == model.id) {
            *existing = model.clone();
        } else {
            models.push(model.clone());
        }
        Ok(model)
    }

    async fn delete_boat_model(&self, id: Uuid) -> RepositoryResult<()> {
        let mut models = self.boat_models.lock().unwrap();
        let before = models.len();
        models.retain(|m| m.id != id);
        if models.len() == before {
            return Err(RepositoryError::not_found(format!("No row for {}", id)));
        }
        Ok(())
    }

    async fn list_marketing_content(&self) -> RepositoryResult<Vec<MarketingContent>> {
        Ok(self.marketing.lock().unwrap().clone())
    }

    async fn upsert_marketing_content(
        &self,
        content: MarketingContent,
    ) -> RepositoryResult<MarketingContent> {
        let mut rows = self.marketing.lock().unwrap();
        if let Some(existing) = rows.iter_mut().find(|c| c.id == content.id) {
            *existing = content.clone();
        } else {
            rows.push(content.clone());
        }
        Ok(content)
    }

    async fn delete_marketing_content(&self, id: Uuid) -> RepositoryResult<()> {
        let mut rows = self.marketing.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(RepositoryError::not_found(format!("No row for {}", id)));
        }
        Ok(())
    }

    async fn list_factory_production(&self) -> RepositoryResult<Vec<FactoryProduction>> {
        Ok(self.factory.lock().unwrap().clone())
    }

    async fn upsert_factory_production(
        &self,
        entry: FactoryProduction,
    ) -> RepositoryResult<FactoryProduction> {
        let mut rows = self.factory.lock().unwrap();
        if let Some(existing) = rows.iter_mut().find(|f| f.id == entry.id) {
            *existing = entry.clone();
        } else {
            rows.push(entry.clone());
        }
        Ok(entry)
    }

    async fn delete_factory_production(&self, id: Uuid) -> RepositoryResult<()> {
        let mut rows = self.factory.lock().unwrap();
        let before = rows.len();
        rows.retain(|f| f.id != id);
        if rows.len() == before {
            return Err(RepositoryError::not_found(format!("No row for {}", id)));
        }
        Ok(())
    }

    async fn list_boat_sales(&self) -> RepositoryResult<Vec<BoatSale>> {
        Ok(self.sales.lock().unwrap().clone())
    }

    async fn upsert_boat_sale(&self, sale: BoatSale) -> RepositoryResult<BoatSale> {
        let mut rows = self.sales.lock().unwrap();
        if let Some(existing) = rows.iter_mut().find(|s| s.id == sale.id) {
            *existing = sale.clone();
        } else {
            rows.push(sale.clone());
        }
        Ok(sale)
    }

    async fn delete_boat_sale(&self, id: Uuid) -> RepositoryResult<()> {
        let mut rows = self.sales.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        if rows.len() == before {
            return Err(RepositoryError::not_found(format!("No row for {}", id)));
        }
        Ok(())
    }
}
