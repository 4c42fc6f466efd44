pub mod auth_handler;
pub mod quote_handler;
pub mod order_handler;
pub mod service_request_handler;
pub mod catalog_handler;
pub mod upload_handler;
