//! Cat domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Persisted cat record, also the public response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cat {
    /// Store-assigned identifier, never reused
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Tom")]
    pub name: String,
    #[schema(example = "Tabby")]
    pub breed: String,
    /// Age in years
    #[schema(example = 3.0)]
    pub age: f64,
    /// Weight in kilograms
    #[schema(example = 4.5)]
    pub weight: f64,
}

/// Payload accepted by create and update.
///
/// Every field is required and strictly typed: a number sent as a string
/// is rejected rather than coerced. Unknown fields (including `id`) are
/// ignored, so the identifier can never be written through this type.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct CatInput {
    #[schema(example = "Tom")]
    pub name: String,
    #[schema(example = "Tabby")]
    pub breed: String,
    #[validate(range(min = 0.0, message = "age must be non-negative"))]
    #[schema(example = 3.0, minimum = 0.0)]
    pub age: f64,
    #[validate(range(min = 0.0, message = "weight must be non-negative"))]
    #[schema(example = 4.5, minimum = 0.0)]
    pub weight: f64,
}

#[cfg(test)]
impl Cat {
    /// Build the record the store would hold for `input` under `id`.
    pub(crate) fn from_input(id: i32, input: CatInput) -> Self {
        Self {
            id,
            name: input.name,
            breed: input.breed,
            age: input.age,
            weight: input.weight,
        }
    }
}
