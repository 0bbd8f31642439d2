//! Cat database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Cat;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub breed: String,
    pub age: f64,
    pub weight: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Cat {
    fn from(model: Model) -> Self {
        Cat {
            id: model.id,
            name: model.name,
            breed: model.breed,
            age: model.age,
            weight: model.weight,
        }
    }
}
