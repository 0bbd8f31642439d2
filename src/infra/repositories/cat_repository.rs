//! Cat repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use super::entities::cat::{self, ActiveModel, Entity as CatEntity};
use crate::domain::{Cat, CatInput};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Cat repository trait for dependency injection.
///
/// "Absent" is reported as `None`/`false`, never as an error; only store
/// faults travel through the `Err` side.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CatRepository: Send + Sync {
    /// Insert a new record; the store assigns the id
    async fn create(&self, input: CatInput) -> AppResult<Cat>;

    /// Up to `limit` records after skipping `skip`, ordered by id
    async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<Cat>>;

    /// Find record by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Cat>>;

    /// Overwrite every field of an existing record
    async fn update(&self, id: i32, input: CatInput) -> AppResult<Option<Cat>>;

    /// Delete record by ID, returning whether it existed
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Count all records
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of CatRepository backed by SeaORM
pub struct CatStore {
    db: DatabaseConnection,
}

impl CatStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatRepository for CatStore {
    async fn create(&self, input: CatInput) -> AppResult<Cat> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(input.name),
            breed: Set(input.breed),
            age: Set(input.age),
            weight: Set(input.weight),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Cat::from(model))
    }

    async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<Cat>> {
        let models = CatEntity::find()
            .order_by_asc(cat::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Cat::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Cat>> {
        let result = CatEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Cat::from))
    }

    async fn update(&self, id: i32, input: CatInput) -> AppResult<Option<Cat>> {
        // Dropping an uncommitted transaction rolls it back
        let txn = self.db.begin().await?;

        let Some(existing) = CatEntity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        active.name = Set(input.name);
        active.breed = Set(input.breed);
        active.age = Set(input.age);
        active.weight = Set(input.weight);

        let model = active.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(Cat::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = CatEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let total = CatEntity::find().count(&self.db).await?;
        Ok(total)
    }
}
