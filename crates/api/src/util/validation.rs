use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use attendance_result::{create_error, Error, Result};

/// Extractor which validates its payload before the handler runs
pub struct Validated<T>(pub T);

fn failed_validation(error: impl ToString) -> Error {
    create_error!(FailedValidation {
        error: error.to_string()
    })
}

#[async_trait]
impl<S, T> FromRequest<S> for Validated<Json<T>>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| failed_validation(rejection.body_text()))?;

        data.validate().map_err(failed_validation)?;
        Ok(Validated(Json(data)))
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for Validated<Query<T>>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| failed_validation(rejection.body_text()))?;

        data.validate().map_err(failed_validation)?;
        Ok(Validated(Query(data)))
    }
}
