use super::ApiError;
use crate::{
    domain::ValidationError,
    locale::{Locale, Notice},
};
use axum::{
    async_trait,
    extract::{FromRef, FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

/// `Json` body whose rejections are reported as invalid input.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    Locale: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(malformed(rejection.body_text(), state)),
        }
    }
}

/// `Query` parameters whose rejections are reported as invalid input.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    Locale: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(malformed(rejection.body_text(), state)),
        }
    }
}

fn malformed<S>(reason: String, state: &S) -> ApiError
where
    Locale: FromRef<S>,
{
    ApiError::new(
        ValidationError::MalformedRequest(reason),
        Locale::from_ref(state),
        Notice::MalformedRequest,
    )
}
