//! Extractor che trasformano ogni rifiuto di axum in un `AppError` JSON

use crate::core::AppError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::warn;
use validator::Validate;

/// Come `Json<T>`, ma i body malformati e le violazioni dei vincoli
/// diventano un `AppError` 422 con dettaglio testuale.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            warn!("Rejected request body: {}", rejection.body_text());
            AppError::unprocessable_entity("Invalid request body")
                .with_details(rejection.body_text())
        })?;

        value.validate().inspect_err(|e| warn!("Validation failed: {}", e))?;
        Ok(Self(value))
    }
}

/// Come `Query<T>`: una query string non deserializzabile diventa un 422 JSON
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                warn!("Rejected query string: {}", rejection.body_text());
                AppError::unprocessable_entity("Invalid query parameters")
                    .with_details(rejection.body_text())
            })?;
        Ok(Self(value))
    }
}

/// Come `Path<T>`: un parametro di path non valido (es. id non numerico) diventa un 422 JSON
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                warn!("Rejected path parameters: {}", rejection.body_text());
                AppError::unprocessable_entity("Invalid path parameters")
                    .with_details(rejection.body_text())
            })?;
        Ok(Self(value))
    }
}
