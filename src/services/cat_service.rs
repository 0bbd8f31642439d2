//! Cat service - Handles cat-related business logic.
//!
//! Turns the repository's "absent" outcomes into [`AppError::NotFound`] so
//! handlers only deal with success or a response-ready error.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ENTITY_CAT;
use crate::domain::{Cat, CatInput};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::CatRepository;

/// Cat service trait for dependency injection.
#[async_trait]
pub trait CatService: Send + Sync {
    /// Create a new cat
    async fn create_cat(&self, input: CatInput) -> AppResult<Cat>;

    /// List a window of cats
    async fn list_cats(&self, skip: u64, limit: u64) -> AppResult<Vec<Cat>>;

    /// Get cat by ID
    async fn get_cat(&self, id: i32) -> AppResult<Cat>;

    /// Replace every field of an existing cat
    async fn update_cat(&self, id: i32, input: CatInput) -> AppResult<Cat>;

    /// Delete cat by ID
    async fn delete_cat(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of CatService over a repository.
pub struct CatManager {
    cats: Arc<dyn CatRepository>,
}

impl CatManager {
    /// Create new cat service instance
    pub fn new(cats: Arc<dyn CatRepository>) -> Self {
        Self { cats }
    }
}

#[async_trait]
impl CatService for CatManager {
    async fn create_cat(&self, input: CatInput) -> AppResult<Cat> {
        let cat = self.cats.create(input).await?;
        tracing::debug!(cat_id = cat.id, "Cat created");
        Ok(cat)
    }

    async fn list_cats(&self, skip: u64, limit: u64) -> AppResult<Vec<Cat>> {
        self.cats.list(skip, limit).await
    }

    async fn get_cat(&self, id: i32) -> AppResult<Cat> {
        self.cats.find_by_id(id).await?.ok_or_not_found(ENTITY_CAT)
    }

    async fn update_cat(&self, id: i32, input: CatInput) -> AppResult<Cat> {
        self.cats.update(id, input).await?.ok_or_not_found(ENTITY_CAT)
    }

    async fn delete_cat(&self, id: i32) -> AppResult<()> {
        if self.cats.delete(id).await? {
            tracing::debug!(cat_id = id, "Cat deleted");
            Ok(())
        } else {
            Err(AppError::not_found(ENTITY_CAT))
        }
    }
}
