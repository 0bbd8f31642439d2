//! Offset/limit query parameters for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::config::{DEFAULT_LIST_LIMIT, DEFAULT_LIST_SKIP};

/// List query parameters
///
/// Signed so that anything beyond what the store can bind fails to parse,
/// and negatives are caught by validation.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of records to skip
    #[serde(default = "default_skip")]
    #[validate(range(min = 0, message = "skip must be non-negative"))]
    pub skip: i64,
    /// Maximum number of records to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 0, message = "limit must be non-negative"))]
    pub limit: i64,
}

impl ListParams {
    /// The validated `(skip, limit)` window as store offsets.
    pub fn window(&self) -> (u64, u64) {
        (
            u64::try_from(self.skip).unwrap_or(0),
            u64::try_from(self.limit).unwrap_or(0),
        )
    }
}

fn default_skip() -> i64 {
    DEFAULT_LIST_SKIP
}

fn default_limit() -> i64 {
    DEFAULT_LIST_LIMIT
}
