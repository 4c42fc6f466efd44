use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::dto::order_dto::OrderResponse;
use crate::dto::quote_dto::{QuoteResponse, SaveQuoteRequest};
use crate::model::order::Order;
use crate::model::quote::STATUS_PENDING;
use crate::repository::dealer_repo::DealerRepository;
use crate::repository::quote_repo::QuoteRepository;
use crate::util::email::SmtpEmailService;
use crate::util::error::ServiceError;
use crate::util::ident;

/// Result of converting a quote: the fresh order plus the accepted quote.
#[derive(Debug, Serialize)]
pub struct AcceptQuoteOutcome {
    pub order: OrderResponse,
    pub quote: QuoteResponse,
}

#[async_trait]
pub trait QuoteService: Send + Sync {
    async fn save_quote(&self, request: SaveQuoteRequest) -> Result<QuoteResponse, ServiceError>;
    async fn accept_quote(&self, quote_id: &str) -> Result<AcceptQuoteOutcome, ServiceError>;
    async fn list_dealer_quotes(&self, dealer_id: Uuid)
        -> Result<Vec<QuoteResponse>, ServiceError>;
}

pub struct QuoteServiceImpl {
    pub quote_repo: Arc<dyn QuoteRepository>,
    pub dealer_repo: Arc<dyn DealerRepository>,
    pub mailer: Option<Arc<SmtpEmailService>>,
}

impl QuoteServiceImpl {
    pub fn new(
        quote_repo: Arc<dyn QuoteRepository>,
        dealer_repo: Arc<dyn DealerRepository>,
        mailer: Option<Arc<SmtpEmailService>>,
    ) -> Self {
        Self {
            quote_repo,
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
impl QuoteService for QuoteServiceImpl {
    #[instrument(skip(self, request))]
    async fn save_quote(&self, request: SaveQuoteRequest) -> Result<QuoteResponse, ServiceError> {
        info!("Saving new quote");

        let dealer_id = request
            .validate_required()
            .map_err(ServiceError::InvalidInput)?;

        let dealer = self
            .dealer_repo
            .find_by_id(dealer_id)
            .await
            .map_err(ServiceError::from)?;
        if dealer.is_none() {
            warn!("Quote submitted for unknown dealer {}", dealer_id);
            return Err(ServiceError::InvalidInput(format!(
                "Unknown dealer: {}",
                dealer_id
            )));
        }

        let quote = request.into_quote(ident::quote_id(), dealer_id);
        let created = self.quote_repo.create(quote).await;
        match &created {
            Ok(q) => info!("Quote {} saved", q.id),
            Err(e) => error!("Failed to save quote: {e}"),
        }
        created.map(QuoteResponse::from).map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(quote_id = %quote_id))]
    async fn accept_quote(&self, quote_id: &str) -> Result<AcceptQuoteOutcome, ServiceError> {
        info!("Accepting quote");

        let quote = self
            .quote_repo
            .find_by_id(quote_id)
            .await
            .map_err(ServiceError::from)?
            .ok_or_else(|| {
                warn!("Quote not found for acceptance");
                ServiceError::NotFound(format!("Quote not found: {}", quote_id))
            })?;

        if quote.status != STATUS_PENDING {
            warn!("Quote {} is not pending (status {})", quote.id, quote.status);
            return Err(ServiceError::InvalidInput(format!(
                "Quote {} has already been accepted",
                quote.id
            )));
        }

        let order = Order::from_quote(&quote, ident::order_id());
        let (accepted, created) = self
            .quote_repo
            .accept_into_order(quote_id, order)
            .await
            .map_err(ServiceError::from)?;

        self.send_confirmation(&created);

        info!("Quote {} converted into order {}", accepted.id, created.id);
        Ok(AcceptQuoteOutcome {
            order: OrderResponse::from(created),
            quote: QuoteResponse::from(accepted),
        })
    }

    #[instrument(skip(self), fields(dealer_id = %dealer_id))]
    async fn list_dealer_quotes(
        &self,
        dealer_id: Uuid,
    ) -> Result<Vec<QuoteResponse>, ServiceError> {
        let quotes = self
            .quote_repo
            .list_by_dealer(dealer_id)
            .await
            .map_err(ServiceError::from)?;
        Ok(quotes.into_iter().map(QuoteResponse::from).collect())
    }
}
