use crate::model::order::Order;
use crate::repository::db::Database;
use crate::repository::repository_error::RepositoryResult;
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: Order) -> RepositoryResult<Order>;
    async fn list_by_dealer(&self, dealer_id: Uuid) -> RepositoryResult<Vec<Order>>;
}

pub struct PgOrderRepository {
    db: Database,
}

impl PgOrderRepository {
    pub fn new(db: Database) -> Self {
        PgOrderRepository { db }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    #[tracing::instrument(skip(self, order), fields(id = %order.id, dealer_id = %order.dealer_id))]
    async fn create(&self, order: Order) -> RepositoryResult<Order> {
        info!("Creating new order");
        let result = sqlx::query_as::<_, Order>(
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
        .fetch_one(self.db.pool()?)
        .await;

        match result {
            Ok(created) => {
                info!("Order created successfully");
                Ok(created)
            }
            Err(e) => {
                error!("Failed to create order: {}", e);
                Err(e.into())
            }
        }
    }

    #[tracing::instrument(skip(self), fields(dealer_id = %dealer_id))]
    async fn list_by_dealer(&self, dealer_id: Uuid) -> RepositoryResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE dealer_id = $1 ORDER BY created_at DESC",
        )
        .bind(dealer_id)
        .fetch_all(self.db.pool()?)
        .await?;
        Ok(orders)
    }
}
