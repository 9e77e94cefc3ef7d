// Records, request/response shapes and their helpers

pub mod date;
pub mod exercise;
pub mod user;
pub mod validation;

pub use date::*;
pub use exercise::*;
pub use user::*;
pub use validation::*;

use serde::{Deserialize, Serialize};

/// Outcome of a bulk delete, returned under `result` by the delete endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

/// Body returned by both bulk-delete endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub result: DeleteResult,
}
