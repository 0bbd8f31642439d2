//! Cats API - CRUD HTTP service for cat records
//!
//! Exposes create/read/update/delete over a single relational table,
//! wrapped in a CORS and request-logging middleware chain.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Cat entity and input validation rules
//! - **services**: Application use cases
//! - **infra**: Database connection, schema and repository
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared request/response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Bind elsewhere with JSON logs
//! cargo run -- --json-logs serve --host 127.0.0.1 --port 9000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Cat, CatInput};
pub use errors::{AppError, AppResult};
pub use infra::Database;
