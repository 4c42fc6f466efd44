use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::dto::order_dto::{OrderResponse, SaveOrderRequest};
use crate::model::order::Order;
use crate::repository::dealer_repo::DealerRepository;
use crate::repository::order_repo::OrderRepository;
use crate::util::email::SmtpEmailService;
use crate::util::error::ServiceError;

#[async_trait]
pub trait OrderService: Send + Sync {
    async fn save_order(&self, request: SaveOrderRequest) -> Result<OrderResponse, ServiceError>;
    async fn list_dealer_orders(&self, dealer_id: Uuid)
        -> Result<Vec<OrderResponse>, ServiceError>;
}

pub struct OrderServiceImpl {
    pub order_repo: Arc<dyn OrderRepository>,
    pub dealer_repo: Arc<dyn DealerRepository>,
    pub mailer: Option<Arc<SmtpEmailService>>,
}

impl OrderServiceImpl {
    pub fn new(
        order_repo: Arc<dyn OrderRepository>,
        dealer_repo: Arc<dyn DealerRepository>,
        mailer: Option<Arc<SmtpEmailService>>,
    ) -> Self {
        Self {
            order_repo,
            dealer_repo,
            mailer,
        }
    }

    fn send_confirmation(&self, order: &Order) {
        let Some(mailer) = self.mailer.clone() else {
            return;
        };
        let order = order.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer
                .send_order_confirmation(
                    &order.customer_email,
                    &order.customer_name,
                    &order.id,
                    &order.model,
                    order.total_usd,
                    order.total_brl,
                )
                .await
            {
                warn!("Order confirmation email for {} failed: {}", order.id, e);
            }
        });
    }
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    #[instrument(skip(self, request))]
    async fn save_order(&self, request: SaveOrderRequest) -> Result<OrderResponse, ServiceError> {
        info!("Saving new order");

        let dealer_id = request
            .validate_required()
            .map_err(ServiceError::InvalidInput)?;

        let dealer = self
            .dealer_repo
            .find_by_id(dealer_id)
            .await
            .map_err(ServiceError::from)?;
        if dealer.is_none() {
            warn!("Order submitted for unknown dealer {}", dealer_id);
            return Err(ServiceError::InvalidInput(format!(
                "Unknown dealer: {}",
                dealer_id
            )));
        }

        let order = request.into_order(dealer_id);
        let created = self.order_repo.create(order).await;
        match &created {
            Ok(o) => info!("Order {} saved", o.id),
            Err(e) => error!("Failed to save order: {e}"),
        }
        let created = created.map_err(ServiceError::from)?;

        self.send_confirmation(&created);
        Ok(OrderResponse::from(created))
    }

    #[instrument(skip(self), fields(dealer_id = %dealer_id))]
    async fn list_dealer_orders(
        &self,
        dealer_id: Uuid,
    ) -> Result<Vec<OrderResponse>, ServiceError> {
        let orders = self
            .order_repo
            .list_by_dealer(dealer_id)
            .await
            .map_err(ServiceError::from)?;
        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }
}
