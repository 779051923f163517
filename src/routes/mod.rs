use crate::{
    locale::{Locale, Notice},
    store::{ErrorKind, StoreError},
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

mod extract;
pub mod health_check;
pub mod notifications;
pub mod subscriptions;

pub use extract::{ApiJson, ApiQuery};

/// A store failure rendered for HTTP callers in the configured locale.
#[derive(Debug)]
pub struct ApiError {
    error: StoreError,
    locale: Locale,
    on_storage_failure: Notice,
}

impl ApiError {
    pub fn new(error: impl Into<StoreError>, locale: Locale, on_storage_failure: Notice) -> Self {
        Self {
            error: error.into(),
            locale,
            on_storage_failure,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: &'static str,
    message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.error.kind();
        let status = match kind {
            ErrorKind::InvalidInput => {
                tracing::warn!(error.message = %self.error, "Rejected invalid input");
                StatusCode::BAD_REQUEST
            }
            ErrorKind::StorageUnavailable => {
                tracing::error!("{:#?}", self.error);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            success: false,
            error: kind.as_str(),
            message: self.error.message(self.locale, self.on_storage_failure),
        };

        (status, Json(body)).into_response()
    }
}

/// Builds a `map_err` adapter that tags failures with the notice for storage errors.
pub fn reject<E>(locale: Locale, on_storage_failure: Notice) -> impl FnOnce(E) -> ApiError
where
    E: Into<StoreError>,
{
    move |e| ApiError::new(e, locale, on_storage_failure)
}
