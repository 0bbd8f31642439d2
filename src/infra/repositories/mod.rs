//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod cat_repository;
pub(crate) mod entities;

pub use cat_repository::{CatRepository, CatStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use cat_repository::MockCatRepository;
