use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(u64),

    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl From<validator::ValidationErrors> for ItemError {
    fn from(err: validator::ValidationErrors) -> Self {
        ItemError::Validation(err.to_string())
    }
}

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(id) => {
                tracing::debug!(item_id = id, "Item lookup missed");
                AppError::NotFound("Item not found".to_string())
            }
            ItemError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
