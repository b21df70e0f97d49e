//! Positive integer path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for integer identifiers in path parameters.
///
/// Accepts only integers `>= 1`; anything else (zero, negatives,
/// non-numeric text) is rejected with a 400 response.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_item(IdPath(id): IdPath) -> String {
///     format!("Item ID: {}", id)
/// }
///
/// let app = Router::new().route("/items/{id}", get(get_item));
/// ```
pub struct IdPath(pub u64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        parse_id(&raw)
            .map(IdPath)
            .ok_or_else(|| AppError::InvalidId(raw).into_response())
    }
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().filter(|id| *id >= 1)
}
