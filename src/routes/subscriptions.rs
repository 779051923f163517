use super::{reject, ApiError, ApiJson, ApiQuery};
use crate::{
    app_state::AppState,
    domain::{
        ActiveSubscription, DaysBeforeNotification, NewSubscription, NotificationType,
        PlaceFilter, SubscriberEmail, SubscriptionStatus, ValidationError,
    },
    locale::{Locale, Notice},
    store::SubscriptionStore,
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subscriptions", post(subscribe))
        .route("/subscriptions/unsubscribe", post(unsubscribe))
        .route("/subscriptions/status", get(check_status))
        .route("/subscriptions/active", get(list_active))
}

#[tracing::instrument(
    name = "Adding or updating a subscription",
    skip(store, locale, body),
    fields(subscriber_email = %body.email)
)]
async fn subscribe(
    State(store): State<SubscriptionStore>,
    State(locale): State<Locale>,
    ApiJson(body): ApiJson<SubscribeBody>,
) -> Result<Json<SubscribeResponse>, ApiError> {
    let new_subscription =
        NewSubscription::try_from(body).map_err(reject(locale, Notice::SubscribeFailed))?;
    let outcome = store
        .upsert(&new_subscription)
        .await
        .map_err(reject(locale, Notice::SubscribeFailed))?;

    let notice = if outcome.created {
        Notice::SubscriptionCreated
    } else {
        Notice::SubscriptionUpdated
    };

    Ok(Json(SubscribeResponse {
        success: true,
        created: outcome.created,
        message: notice.text(locale),
    }))
}

#[tracing::instrument(
    name = "Cancelling a subscription",
    skip(store, locale, body),
    fields(subscriber_email = %body.email)
)]
async fn unsubscribe(
    State(store): State<SubscriptionStore>,
    State(locale): State<Locale>,
    ApiJson(body): ApiJson<EmailData>,
) -> Result<Json<UnsubscribeResponse>, ApiError> {
    let email =
        SubscriberEmail::parse(body.email).map_err(reject(locale, Notice::UnsubscribeFailed))?;
    store
        .deactivate(&email)
        .await
        .map_err(reject(locale, Notice::UnsubscribeFailed))?;

    Ok(Json(UnsubscribeResponse {
        success: true,
        message: Notice::SubscriptionCancelled.text(locale),
    }))
}

#[tracing::instrument(
    name = "Checking subscription status",
    skip(store, locale, parameters),
    fields(subscriber_email = %parameters.email)
)]
async fn check_status(
    State(store): State<SubscriptionStore>,
    State(locale): State<Locale>,
    ApiQuery(parameters): ApiQuery<EmailData>,
) -> Result<Json<SubscriptionStatus>, ApiError> {
    let email = SubscriberEmail::parse(parameters.email)
        .map_err(reject(locale, Notice::StatusCheckFailed))?;
    let status = store
        .status(&email)
        .await
        .map_err(reject(locale, Notice::StatusCheckFailed))?;

    Ok(Json(status))
}

#[tracing::instrument(name = "Listing active subscriptions", skip(store, locale))]
async fn list_active(
    State(store): State<SubscriptionStore>,
    State(locale): State<Locale>,
) -> Result<Json<Vec<ActiveSubscription>>, ApiError> {
    let subscriptions = store
        .list_active()
        .await
        .map_err(reject(locale, Notice::ListActiveFailed))?;

    Ok(Json(subscriptions))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeBody {
    email: String,
    #[serde(default)]
    states: Vec<String>,
    #[serde(default)]
    cities: Vec<String>,
    notification_type: Option<Value>,
    days_before_notification: Option<Value>,
}

impl TryFrom<SubscribeBody> for NewSubscription {
    type Error = ValidationError;

    fn try_from(body: SubscribeBody) -> Result<Self, Self::Error> {
        let email = SubscriberEmail::parse(body.email)?;
        let notification_type = match body.notification_type {
            None => NotificationType::default(),
            Some(Value::String(t)) => NotificationType::parse(&t)?,
            Some(other) => {
                return Err(ValidationError::UnknownNotificationType(other.to_string()))
            }
        };
        let days_before_notification = match body.days_before_notification {
            None => DaysBeforeNotification::default(),
            Some(Value::Number(days)) => DaysBeforeNotification::parse_number(&days)?,
            Some(other) => return Err(ValidationError::NonIntegralDays(other.to_string())),
        };

        Ok(Self {
            email,
            states: PlaceFilter::new(body.states),
            cities: PlaceFilter::new(body.cities),
            notification_type,
            days_before_notification,
        })
    }
}

#[derive(Deserialize)]
struct EmailData {
    email: String,
}

#[derive(Serialize)]
struct SubscribeResponse {
    success: bool,
    created: bool,
    message: &'static str,
}

#[derive(Serialize)]
struct UnsubscribeResponse {
    success: bool,
    message: &'static str,
}
