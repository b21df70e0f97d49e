//! Query string extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor that validates the parsed parameters.
///
/// Parse failures (e.g. a negative value for an unsigned field) and
/// validation failures (e.g. a `limit` outside its range) both produce a
/// 400 response with the standard error envelope.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        params
            .validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedQuery(params))
    }
}
