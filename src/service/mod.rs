pub mod auth_service;
pub mod quote_service;
pub mod order_service;
pub mod service_request_service;
pub mod catalog_service;
pub mod upload_service;
