use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::app_conf::AppConfig;
use crate::config::{AdminConfig, DatabaseConfig, EmailConfig, SyncConfig, UploadConfig};
use crate::middlewares::cache_control::no_store;
use crate::repository::catalog_repo::{CatalogRepository, PgCatalogRepository};
use crate::repository::db::Database;
use crate::repository::dealer_repo::{DealerRepository, PgDealerRepository};
use crate::repository::order_repo::{OrderRepository, PgOrderRepository};
use crate::repository::quote_repo::{PgQuoteRepository, QuoteRepository};
use crate::repository::service_request_repo::{
    PgServiceRequestRepository, ServiceRequestRepository,
};
use crate::repository::settings_repo::{PgSettingsRepository, SettingsRepository};
use crate::router::auth_router::auth_router;
use crate::router::catalog_router::catalog_router;
use crate::router::order_router::order_router;
use crate::router::quote_router::quote_router;
use crate::router::service_request_router::service_request_router;
use crate::router::upload_router::upload_router;
use crate::service::auth_service::{AuthService, AuthServiceImpl};
use crate::service::catalog_service::CatalogServiceImpl;
use crate::service::order_service::OrderServiceImpl;
use crate::service::quote_service::QuoteServiceImpl;
use crate::service::service_request_service::ServiceRequestServiceImpl;
use crate::service::upload_service::UploadServiceImpl;
use crate::util::cdn::CdnClient;
use crate::util::email::SmtpEmailService;
use crate::util::sync::SyncNotifier;

pub struct App {
    config: AppConfig,
    router: Router,
    pub auth_service: Arc<AuthServiceImpl>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();

        let database_config = DatabaseConfig::from_env().expect("Database config error");
        let db = Database::connect(&database_config).expect("Database pool error");

        if let Ok(pool) = db.pool() {
            match sqlx::migrate!().run(pool).await {
                Ok(_) => info!("Database migrations applied"),
                Err(e) => warn!("Database migrations failed: {e}"),
            }
        }

        // Transactional email is optional; the portal runs without it and
        // order confirmations are simply skipped.
        let mailer = match EmailConfig::from_env() {
            Ok(email_config) => match SmtpEmailService::new(email_config) {
                Ok(service) => Some(Arc::new(service)),
                Err(e) => {
                    warn!("Email service disabled: {e}");
                    None
                }
            },
            Err(e) => {
                warn!("Email configuration not loaded, confirmations disabled: {e}");
                None
            }
        };

        let upload_config = UploadConfig::from_env().expect("Upload config error");
        let sync = SyncNotifier::new(SyncConfig::from_env());

        let dealer_repo: Arc<dyn DealerRepository> =
            Arc::new(PgDealerRepository::new(db.clone()));
        let quote_repo: Arc<dyn QuoteRepository> = Arc::new(PgQuoteRepository::new(db.clone()));
        let order_repo: Arc<dyn OrderRepository> = Arc::new(PgOrderRepository::new(db.clone()));
        let request_repo: Arc<dyn ServiceRequestRepository> =
            Arc::new(PgServiceRequestRepository::new(db.clone()));
        let catalog_repo: Arc<dyn CatalogRepository> =
            Arc::new(PgCatalogRepository::new(db.clone()));
        let settings_repo: Arc<dyn SettingsRepository> =
            Arc::new(PgSettingsRepository::new(db.clone()));

        let auth_service = Arc::new(AuthServiceImpl::new(
            dealer_repo.clone(),
            settings_repo.clone(),
        ));
        let quote_service = Arc::new(QuoteServiceImpl::new(
            quote_repo,
            dealer_repo.clone(),
            mailer.clone(),
        ));
        let order_service = Arc::new(OrderServiceImpl::new(
            order_repo,
            dealer_repo.clone(),
            mailer,
        ));
        let request_service = Arc::new(ServiceRequestServiceImpl::new(
            request_repo,
            dealer_repo.clone(),
        ));
        let catalog_service = Arc::new(CatalogServiceImpl::new(
            catalog_repo,
            dealer_repo,
            sync,
        ));
        let upload_service = Arc::new(UploadServiceImpl::new(CdnClient::new(upload_config)));

        let router = Router::new()
            .merge(auth_router(auth_service.clone()))
            .merge(quote_router(quote_service))
            .merge(order_router(order_service))
            .merge(service_request_router(request_service))
            .merge(catalog_router(catalog_service))
            .merge(upload_router(upload_service))
            .route("/health", get(|| async { "OK" }))
            .layer(middleware::from_fn(no_store));

        let app = App {
            config,
            router,
            auth_service,
        };
        app.seed_admin_password().await;
        app
    }

    pub async fn start(self) {
        let addr = self.config.addr().expect("Invalid host");
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }

    async fn seed_admin_password(&self) {
        let admin_config = match AdminConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Admin config not loaded, skipping password seed: {e}");
                return;
            }
        };

        match self
            .auth_service
            .seed_admin_password(&admin_config.password)
            .await
        {
            Ok(true) => info!("Admin password seeded."),
            Ok(false) => info!("Admin password already set, skipping seed."),
            Err(e) => error!("Failed to seed admin password: {e}"),
        }
    }
}
