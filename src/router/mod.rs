pub mod auth_router;
pub mod quote_router;
pub mod order_router;
pub mod service_request_router;
pub mod catalog_router;
pub mod upload_router;
