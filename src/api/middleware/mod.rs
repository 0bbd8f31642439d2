//! API middleware.

mod catch_panic;
mod cors;
mod logging;

pub use catch_panic::handle_panic;
pub use cors::cors_layer;
pub use logging::{request_logging_middleware, resolve_client_identity};
