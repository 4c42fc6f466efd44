use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::catalog_dto::UpsertDealerRequest;
use crate::model::catalog::{
    BoatModel, BoatSale, CatalogItem, CatalogKind, FactoryProduction, MarketingContent,
};
use crate::model::dealer::Dealer;
use crate::repository::catalog_repo::CatalogRepository;
use crate::repository::dealer_repo::DealerRepository;
use crate::util::error::ServiceError;
use crate::util::password::{PasswordUtils, PasswordUtilsImpl};
use crate::util::sync::SyncNotifier;

/// Admin CRUD over every catalog table. Mutations fire a best-effort sync
/// ping for the touched table; the pings never delay or fail the call.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_items(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, ServiceError>;
    async fn upsert_item(
        &self,
        kind: CatalogKind,
        item: CatalogItem,
    ) -> Result<CatalogItem, ServiceError>;
    async fn delete_item(&self, kind: CatalogKind, id: Uuid) -> Result<(), ServiceError>;

    async fn list_boat_models(&self) -> Result<Vec<BoatModel>, ServiceError>;
    async fn upsert_boat_model(&self, model: BoatModel) -> Result<BoatModel, ServiceError>;
    async fn delete_boat_model(&self, id: Uuid) -> Result<(), ServiceError>;

    async fn list_marketing_content(&self) -> Result<Vec<MarketingContent>, ServiceError>;
    async fn upsert_marketing_content(
        &self,
        content: MarketingContent,
    ) -> Result<MarketingContent, ServiceError>;
    async fn delete_marketing_content(&self, id: Uuid) -> Result<(), ServiceError>;

    async fn list_factory_production(&self) -> Result<Vec<FactoryProduction>, ServiceError>;
    async fn upsert_factory_production(
        &self,
        entry: FactoryProduction,
    ) -> Result<FactoryProduction, ServiceError>;
    async fn delete_factory_production(&self, id: Uuid) -> Result<(), ServiceError>;

    async fn list_boat_sales(&self) -> Result<Vec<BoatSale>, ServiceError>;
    async fn upsert_boat_sale(&self, sale: BoatSale) -> Result<BoatSale, ServiceError>;
    async fn delete_boat_sale(&self, id: Uuid) -> Result<(), ServiceError>;

    async fn list_dealers(&self) -> Result<Vec<Dealer>, ServiceError>;
    async fn upsert_dealer(&self, request: UpsertDealerRequest) -> Result<Dealer, ServiceError>;
    async fn delete_dealer(&self, id: Uuid) -> Result<(), ServiceError>;
}

pub struct CatalogServiceImpl {
    pub catalog_repo: Arc<dyn CatalogRepository>,
    pub dealer_repo: Arc<dyn DealerRepository>,
    pub sync: SyncNotifier,
}

impl CatalogServiceImpl {
    pub fn new(
        catalog_repo: Arc<dyn CatalogRepository>,
        dealer_repo: Arc<dyn DealerRepository>,
        sync: SyncNotifier,
    ) -> Self {
        Self {
            catalog_repo,
            dealer_repo,
            sync,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_items(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, ServiceError> {
        self.catalog_repo
            .list_items(kind)
            .await
            .map_err(ServiceError::from)
    }

    #[instrument(skip(self, item), fields(table = %kind))]
    async fn upsert_item(
        &self,
        kind: CatalogKind,
        item: CatalogItem,
    ) -> Result<CatalogItem, ServiceError> {
        let upserted = self
            .catalog_repo
            .upsert_item(kind, item)
            .await
            .map_err(ServiceError::from)?;
        self.sync.notify(kind.table());
        Ok(upserted)
    }

    async fn delete_item(&self, kind: CatalogKind, id: Uuid) -> Result<(), ServiceError> {
        self.catalog_repo
            .delete_item(kind, id)
            .await
            .map_err(ServiceError::from)?;
        self.sync.notify(kind.table());
        Ok(())
    }

    async fn list_boat_models(&self) -> Result<Vec<BoatModel>, ServiceError> {
        self.catalog_repo
            .list_boat_models()
            .await
            .map_err(ServiceError::from)
    }

    async fn upsert_boat_model(&self, model: BoatModel) -> Result<BoatModel, ServiceError> {
        let upserted = self
            .catalog_repo
            .upsert_boat_model(model)
            .await
            .map_err(ServiceError::from)?;
        self.sync.notify("boat_models");
        Ok(upserted)
    }

    async fn delete_boat_model(&self, id: Uuid) -> Result<(), ServiceError> {
        self.catalog_repo
            .delete_boat_model(id)
            .await
            .map_err(ServiceError::from)?;
        self.sync.notify("boat_models");
        Ok(())
    }

    async fn list_marketing_content(&self) -> Result<Vec<MarketingContent>, ServiceError> {
        self.catalog_repo
            .list_marketing_content()
            .await
            .map_err(ServiceError::from)
    }

    async fn upsert_marketing_content(
        &self,
        content: MarketingContent,
    ) -> Result<MarketingContent, ServiceError> {
        let upserted = self
            .catalog_repo
            .upsert_marketing_content(content)
            .await
            .map_err(ServiceError::from)?;
        self.sync.notify("marketing_content");
        Ok(upserted)
    }

    async fn delete_marketing_content(&self, id: Uuid) -> Result<(), ServiceError> {
        self.catalog_repo
            .delete_marketing_content(id)
            .await
            .map_err(ServiceError::from)?;
        self.sync.notify("marketing_content");
        Ok(())
    }

    async fn list_factory_production(&self) -> Result<Vec<FactoryProduction>, ServiceError> {
        self.catalog_repo
            .list_factory_production()
            .await
            .map_err(ServiceError::from)
    }

    async fn upsert_factory_production(
        &self,
        entry: FactoryProduction,
    ) -> Result<FactoryProduction, ServiceError> {
        let upserted = self
            .catalog_repo
            .upsert_factory_production(entry)
            .await
            .map_err(ServiceError::from)?;
        self.sync.notify("factory_production");
        Ok(upserted)
    }

    async fn delete_factory_production(&self, id: Uuid) -> Result<(), ServiceError> {
        self.catalog_repo
            .delete_factory_production(id)
            .await
            .map_err(ServiceError::from)?;
        self.sync.notify("factory_production");
        Ok(())
    }

    async fn list_boat_sales(&self) -> Result<Vec<BoatSale>, ServiceError> {
        self.catalog_repo
            .list_boat_sales()
            .await
            .map_err(ServiceError::from)
    }

    async fn upsert_boat_sale(&self, sale: BoatSale) -> Result<BoatSale, ServiceError> {
        let upserted = self
            .catalog_repo
            .upsert_boat_sale(sale)
            .await
            .map_err(ServiceError::from)?;
        self.sync.notify("boat_sales");
        Ok(upserted)
    }

    async fn delete_boat_sale(&self, id: Uuid) -> Result<(), ServiceError> {
        self.catalog_repo
            .delete_boat_sale(id)
            .await
            .map_err(ServiceError::from)?;
        self.sync.notify("boat_sales");
        Ok(())
    }

    async fn list_dealers(&self) -> Result<Vec<Dealer>, ServiceError> {
        self.dealer_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn upsert_dealer(&self, request: UpsertDealerRequest) -> Result<Dealer, ServiceError> {
        info!("Upserting dealer");
        let id = request.id.unwrap_or_else(Uuid::new_v4);

        // Incoming plaintext is hashed here; absent means keep the stored hash.
        let password_hash = match request.password.as_deref().filter(|p| !p.is_empty()) {
            Some(plain) => Some(
                PasswordUtilsImpl::hash_password(plain)
                    .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?,
            ),
            None => None,
        };

        let dealer = self
            .dealer_repo
            .upsert(
                id,
                &request.name,
                &request.email,
                password_hash.as_deref(),
                &request.country,
            )
            .await
            .map_err(ServiceError::from)?;
        self.sync.notify("dealers");
        Ok(dealer)
    }

    async fn delete_dealer(&self, id: Uuid) -> Result<(), ServiceError> {
        self.dealer_repo
            .delete(id)
            .await
            .map_err(ServiceError::from)?;
        self.sync.notify("dealers");
        Ok(())
    }
}
