//! HTTP request handlers.

pub mod cat_handler;
pub mod health_handler;

pub use cat_handler::cat_routes;
pub use health_handler::health_routes;
