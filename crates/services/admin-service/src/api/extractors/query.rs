//! Query-string extractor with the service's error envelope.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use common::AppError;

/// Query extractor whose rejections become `AppError::Validation`.
///
/// Field types do their own checking while deserializing, so a bad value
/// (an unknown account kind, say) is rejected here with a `400` JSON body
/// instead of axum's plain-text rejection.
pub struct AppQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(AppQuery(value))
    }
}
