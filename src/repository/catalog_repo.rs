use crate::model::catalog::{
    BoatModel, BoatSale, CatalogItem, CatalogKind, FactoryProduction, MarketingContent,
};
use crate::repository::db::Database;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

/// CRUD over every admin-managed table. The four priced option families
/// share one shape and are addressed by `CatalogKind`; the remaining tables
/// carry their own row types.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_items(&self, kind: CatalogKind) -> RepositoryResult<Vec<CatalogItem>>;
    async fn upsert_item(&self, kind: CatalogKind, item: CatalogItem) -> RepositoryResult<CatalogItem>;
    async fn delete_item(&self, kind: CatalogKind, id: Uuid) -> RepositoryResult<()>;

    async fn list_boat_models(&self) -> RepositoryResult<Vec<BoatModel>>;
    async fn upsert_boat_model(&self, model: BoatModel) -> RepositoryResult<BoatModel>;
    async fn delete_boat_model(&self, id: Uuid) -> RepositoryResult<()>;

    async fn list_marketing_content(&self) -> RepositoryResult<Vec<MarketingContent>>;
    async fn upsert_marketing_content(
        &self,
        content: MarketingContent,
    ) -> RepositoryResult<MarketingContent>;
    async fn delete_marketing_content(&self, id: Uuid) -> RepositoryResult<()>;

    async fn list_factory_production(&self) -> RepositoryResult<Vec<FactoryProduction>>;
    async fn upsert_factory_production(
        &self,
        entry: FactoryProduction,
    ) -> RepositoryResult<FactoryProduction>;
    async fn delete_factory_production(&self, id: Uuid) -> RepositoryResult<()>;

    async fn list_boat_sales(&self) -> RepositoryResult<Vec<BoatSale>>;
    async fn upsert_boat_sale(&self, sale: BoatSale) -> RepositoryResult<BoatSale>;
    async fn delete_boat_sale(&self, id: Uuid) -> RepositoryResult<()>;
}

pub struct PgCatalogRepository {
    db: Database,
}

impl PgCatalogRepository {
    pub fn new(db: Database) -> Self {
        PgCatalogRepository { db }
    }

    async fn delete_row(&self, table: &str, id: Uuid) -> RepositoryResult<()> {
        // `table` only ever comes from a static name, never from input.
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", table))
            .bind(id)
            .execute(self.db.pool()?)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(format!(
                "No row in {} for ID: {}",
                table, id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn list_items(&self, kind: CatalogKind) -> RepositoryResult<Vec<CatalogItem>> {
        let items = sqlx::query_as::<_, CatalogItem>(&format!(
            "SELECT * FROM {} ORDER BY display_order, name_en",
            kind.table()
        ))
        .fetch_all(self.db.pool()?)
        .await?;
        Ok(items)
    }

    #[tracing::instrument(skip(self, item), fields(table = %kind, id = %item.id))]
    async fn upsert_item(&self, kind: CatalogKind, item: CatalogItem) -> RepositoryResult<CatalogItem> {
        info!("Upserting catalog item");
        let upserted = sqlx::query_as::<_, CatalogItem>(&format!(
            r#"
            INSERT INTO {} (id, name_en, name_pt, price_usd, price_brl, display_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name_en = EXCLUDED.name_en,
                name_pt = EXCLUDED.name_pt,
                price_usd = EXCLUDED.price_usd,
                price_brl = EXCLUDED.price_brl,
                display_order = EXCLUDED.display_order
            RETURNING *
            "#,
            kind.table()
        ))
        .bind(item.id)
        .bind(&item.name_en)
        .bind(&item.name_pt)
        .bind(item.price_usd)
        .bind(item.price_brl)
        .bind(item.display_order)
        .fetch_one(self.db.pool()?)
        .await?;
        Ok(upserted)
    }

    async fn delete_item(&self, kind: CatalogKind, id: Uuid) -> RepositoryResult<()> {
        self.delete_row(kind.table(), id).await
    }

    async fn list_boat_models(&self) -> RepositoryResult<Vec<BoatModel>> {
        let models = sqlx::query_as::<_, BoatModel>(
            "SELECT * FROM boat_models ORDER BY display_order, name",
        )
        .fetch_all(self.db.pool()?)
        .await?;
        Ok(models)
    }

    async fn upsert_boat_model(&self, model: BoatModel) -> RepositoryResult<BoatModel> {
        let upserted = sqlx::query_as::<_, BoatModel>(
            r#"
            INSERT INTO boat_models
                (id, name, description_en, description_pt, base_price_usd, base_price_brl,
                 image_url, display_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description_en = EXCLUDED.description_en,
                description_pt = EXCLUDED.description_pt,
                base_price_usd = EXCLUDED.base_price_usd,
                base_price_brl = EXCLUDED.base_price_brl,
                image_url = EXCLUDED.image_url,
                display_order = EXCLUDED.display_order
            RETURNING *
            "#,
        )
        .bind(model.id)
        .bind(&model.name)
        .bind(&model.description_en)
        .bind(&model.description_pt)
        .bind(model.base_price_usd)
        .bind(model.base_price_brl)
        .bind(&model.image_url)
        .bind(model.display_order)
        .fetch_one(self.db.pool()?)
        .await?;
        Ok(upserted)
    }

    async fn delete_boat_model(&self, id: Uuid) -> RepositoryResult<()> {
        self.delete_row("boat_models", id).await
    }

    async fn list_marketing_content(&self) -> RepositoryResult<Vec<MarketingContent>> {
        let content = sqlx::query_as::<_, MarketingContent>(
            "SELECT * FROM marketing_content ORDER BY display_order, title_en",
        )
        .fetch_all(self.db.pool()?)
        .await?;
        Ok(content)
    }

    async fn upsert_marketing_content(
        &self,
        content: MarketingContent,
    ) -> RepositoryResult<MarketingContent> {
        let upserted = sqlx::query_as::<_, MarketingContent>(
            r#"
            INSERT INTO marketing_content
                (id, title_en, title_pt, body_en, body_pt, image_url, display_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                title_en = EXCLUDED.title_en,
                title_pt = EXCLUDED.title_pt,
                body_en = EXCLUDED.body_en,
                body_pt = EXCLUDED.body_pt,
                image_url = EXCLUDED.image_url,
                display_order = EXCLUDED.display_order
            RETURNING *
            "#,
        )
        .bind(content.id)
        .bind(&content.title_en)
        .bind(&content.title_pt)
        .bind(&content.body_en)
        .bind(&content.body_pt)
        .bind(&content.image_url)
        .bind(content.display_order)
        .fetch_one(self.db.pool()?)
        .await?;
        Ok(upserted)
    }

    async fn delete_marketing_content(&self, id: Uuid) -> RepositoryResult<()> {
        self.delete_row("marketing_content", id).await
    }

    async fn list_factory_production(&self) -> RepositoryResult<Vec<FactoryProduction>> {
        let entries = sqlx::query_as::<_, FactoryProduction>(
            "SELECT * FROM factory_production ORDER BY display_order, model",
        )
        .fetch_all(self.db.pool()?)
        .await?;
        Ok(entries)
    }

    async fn upsert_factory_production(
        &self,
        entry: FactoryProduction,
    ) -> RepositoryResult<FactoryProduction> {
        let upserted = sqlx::query_as::<_, FactoryProduction>(
            r#"
            INSERT INTO factory_production
                (id, model, hull_number, stage, scheduled_date, display_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                model = EXCLUDED.model,
                hull_number = EXCLUDED.hull_number,
                stage = EXCLUDED.stage,
                scheduled_date = EXCLUDED.scheduled_date,
                display_order = EXCLUDED.display_order
            RETURNING *
            "#,
        )
        .bind(entry.id)
        .bind(&entry.model)
        .bind(&entry.hull_number)
        .bind(&entry.stage)
        .bind(&entry.scheduled_date)
        .bind(entry.display_order)
        .fetch_one(self.db.pool()?)
        .await?;
        Ok(upserted)
    }

    async fn delete_factory_production(&self, id: Uuid) -> RepositoryResult<()> {
        self.delete_row("factory_production", id).await
    }

    async fn list_boat_sales(&self) -> RepositoryResult<Vec<BoatSale>> {
        let sales = sqlx::query_as::<_, BoatSale>(
            "SELECT * FROM boat_sales ORDER BY display_order, model",
        )
        .fetch_all(self.db.pool()?)
        .await?;
        Ok(sales)
    }

    async fn upsert_boat_sale(&self, sale: BoatSale) -> RepositoryResult<BoatSale> {
        let upserted = sqlx::query_as::<_, BoatSale>(
            r#"
            INSERT INTO boat_sales
                (id, model, hull_id, dealer_name, sale_price_usd, sale_price_brl,
                 sale_date, display_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                model = EXCLUDED.model,
                hull_id = EXCLUDED.hull_id,
                dealer_name = EXCLUDED.dealer_name,
                sale_price_usd = EXCLUDED.sale_price_usd,
                sale_price_brl = EXCLUDED.sale_price_brl,
                sale_date = EXCLUDED.sale_date,
                display_order = EXCLUDED.display_order
            RETURNING *
            "#,
        )
        .bind(sale.id)
        .bind(&sale.model)
        .bind(&sale.hull_id)
        .bind(&sale.dealer_name)
        .bind(sale.sale_price_usd)
        .bind(sale.sale_price_brl)
        .bind(&sale.sale_date)
        .bind(sale.display_order)
        .fetch_one(self.db.pool()?)
        .await?;
        Ok(upserted)
    }

    async fn delete_boat_sale(&self, id: Uuid) -> RepositoryResult<()> {
        self.delete_row("boat_sales", id).await
    }
}
