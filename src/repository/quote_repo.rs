use crate::model::order::Order;
use crate::model::quote::{Quote, STATUS_ACCEPTED, STATUS_PENDING};
use crate::repository::db::Database;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn create(&self, quote: Quote) -> RepositoryResult<Quote>;
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Quote>>;
    async fn list_by_dealer(&self, dealer_id: Uuid) -> RepositoryResult<Vec<Quote>>;
    /// Insert the given order and flip the source quote from pending to
    /// accepted, both inside one transaction.
    async fn accept_into_order(
        &self,
        quote_id: &str,
        order: Order,
    ) -> RepositoryResult<(Quote, Order)>;
}

pub struct PgQuoteRepository {
    db: Database,
}

impl PgQuoteRepository {
    pub fn new(db: Database) -> Self {
        PgQuoteRepository { db }
    }
}

#[async_trait]
impl QuoteRepository for PgQuoteRepository {
    #[tracing::instrument(skip(self, quote), fields(id = %quote.id, dealer_id = %quote.dealer_id))]
    async fn create(&self, quote: Quote) -> RepositoryResult<Quote> {
        info!("Creating new quote");
        let result = sqlx::query_as::<_, Quote>(
            r#"
            INSERT INTO quotes (
                id, dealer_id,
                customer_name, customer_email, customer_phone, customer_address,
                customer_city, customer_state, customer_zip, customer_country,
                model, engine, hull_color, upholstery_package, options,
                payment_method, deposit_amount, additional_notes,
                total_usd, total_brl, status, valid_until, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                    $15, $16, $17, $18, $19, $20, $21, $22, $23, $24)
            RETURNING *
            "#,
        )
        .bind(&quote.id)
        .bind(quote.dealer_id)
        .bind(&quote.customer_name)
        .bind(&quote.customer_email)
        .bind(&quote.customer_phone)
        .bind(&quote.customer_address)
        .bind(&quote.customer_city)
        .bind(&quote.customer_state)
        .bind(&quote.customer_zip)
        .bind(&quote.customer_country)
        .bind(&quote.model)
        .bind(&quote.engine)
        .bind(&quote.hull_color)
        .bind(&quote.upholstery_package)
        .bind(&quote.options)
        .bind(&quote.payment_method)
        .bind(quote.deposit_amount)
        .bind(&quote.additional_notes)
        .bind(quote.total_usd)
        .bind(quote.total_brl)
        .bind(&quote.status)
        .bind(quote.valid_until)
        .bind(quote.created_at)
        .bind(quote.updated_at)
        .fetch_one(self.db.pool()?)
        .await;

        match result {
            Ok(created) => {
                info!("Quote created successfully");
                Ok(created)
            }
            Err(e) => {
                error!("Failed to create quote: {}", e);
                Err(e.into())
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Quote>> {
        let quote = sqlx::query_as::<_, Quote>("SELECT * FROM quotes WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db.pool()?)
            .await?;
        Ok(quote)
    }

    #[tracing::instrument(skip(self), fields(dealer_id = %dealer_id))]
    async fn list_by_dealer(&self, dealer_id: Uuid) -> RepositoryResult<Vec<Quote>> {
        info!("Listing quotes for dealer");
        let quotes = sqlx::query_as::<_, Quote>(
            "SELECT * FROM quotes WHERE dealer_id = $1 ORDER BY created_at DESC",
        )
        .bind(dealer_id)
        .fetch_all(self.db.pool()?)
        .await?;
        info!("Fetched {} quotes", quotes.len());
        Ok(quotes)
    }

    #[tracing::instrument(skip(self, order), fields(quote_id = %quote_id, order_id = %order.id))]
    async fn accept_into_order(
        &self,
        quote_id: &str,
        order: Order,
    ) -> RepositoryResult<(Quote, Order)> {
        info!("Converting quote into order");
        let mut tx = self.db.pool()?.begin().await?;

        // The status guard makes a concurrent double-accept lose the race.
        let quote = sqlx::query_as::<_, Quote>(
            "UPDATE quotes SET status = $2, updated_at = NOW() \
             WHERE id = $1 AND status = $3 RETURNING *",
        )
        .bind(quote_id)
        .bind(STATUS_ACCEPTED)
        .bind(STATUS_PENDING)
        .fetch_optional(&mut *tx)
        .await?;

        let quote = match quote {
            Some(q) => q,
            None => {
                error!("No pending quote found for ID: {}", quote_id);
                return Err(RepositoryError::not_found(format!(
                    "No pending quote found for ID: {}",
                    quote_id
                )));
            }
        };

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (
                id, dealer_id,
                customer_name, customer_email, customer_phone, customer_address,
                customer_city, customer_state, customer_zip, customer_country,
                model, engine, hull_color, upholstery_package, options,
                payment_method, deposit_amount, additional_notes,
                total_usd, total_brl, status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                    $15, $16, $17, $18, $19, $20, $21, $22, $23)
            RETURNING *
            "#,
        )
        .bind(&order.id)
        .bind(order.dealer_id)
        .bind(&order.customer_name)
        .bind(&order.customer_email)
        .bind(&order.customer_phone)
        .bind(&order.customer_address)
        .bind(&order.customer_city)
        .bind(&order.customer_state)
        .bind(&order.customer_zip)
        .bind(&order.customer_country)
        .bind(&order.model)
        .bind(&order.engine)
        .bind(&order.hull_color)
        .bind(&order.upholstery_package)
        .bind(&order.options)
        .bind(&order.payment_method)
        .bind(order.deposit_amount)
        .bind(&order.additional_notes)
        .bind(order.total_usd)
        .bind(order.total_brl)
        .bind(&order.status)
        .bind(order.created_at)
        .bind(order.updated_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        info!("Quote {} accepted into order {}", quote.id, order.id);
        Ok((quote, order))
    }
}
