//! Infrastructure layer - External systems integration
//!
//! This module handles the relational store: the connection pool,
//! startup schema creation and the cat repository.

pub mod db;
pub mod repositories;

pub use db::{ensure_schema, Database};
pub use repositories::{CatRepository, CatStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockCatRepository;
