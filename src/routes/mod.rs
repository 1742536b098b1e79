pub mod entries;
pub mod health;
pub mod photos;
pub mod votes;

use crate::errors::ApiError;

/// Method-router fallback so unsupported verbs get the JSON error
/// envelope instead of an empty 405.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
