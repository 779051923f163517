use super::{reject, ApiError, ApiJson, ApiQuery};
use crate::{
    app_state::AppState,
    domain::{
        DeliveryStatus, HolidayDate, HolidayName, NewNotificationLogEntry, NotificationLogView,
        ValidationError,
    },
    locale::{Locale, Notice},
    store::NotificationLedger,
};
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

pub fn router() -> Router<AppState> {
    Router::new().route("/notifications", post(log_notification).get(notification_history))
}

#[tracing::instrument(
    name = "Logging a notification attempt",
    skip(ledger, locale, body),
    fields(subscription_id = body.subscription_id)
)]
async fn log_notification(
    State(ledger): State<NotificationLedger>,
    State(locale): State<Locale>,
    ApiJson(body): ApiJson<LogNotificationBody>,
) -> Result<Json<LogNotificationResponse>, ApiError> {
    let entry = NewNotificationLogEntry::try_from(body)
        .map_err(reject(locale, Notice::NotificationLogFailed))?;
    ledger
        .record(&entry)
        .await
        .map_err(reject(locale, Notice::NotificationLogFailed))?;

    Ok(Json(LogNotificationResponse { success: true }))
}

#[tracing::instrument(name = "Fetching notification history", skip(ledger, locale))]
async fn notification_history(
    State(ledger): State<NotificationLedger>,
    State(locale): State<Locale>,
    ApiQuery(parameters): ApiQuery<HistoryParameters>,
) -> Result<Json<Vec<NotificationLogView>>, ApiError> {
    let entries = ledger
        .entries_for(parameters.subscription_id)
        .await
        .map_err(reject(locale, Notice::NotificationLogFailed))?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogNotificationBody {
    subscription_id: i64,
    holiday_date: String,
    holiday_name: String,
    status: Option<String>,
}

impl TryFrom<LogNotificationBody> for NewNotificationLogEntry {
    type Error = ValidationError;

    fn try_from(body: LogNotificationBody) -> Result<Self, Self::Error> {
        let status = match body.status {
            Some(status) => DeliveryStatus::parse(&status)?,
            None => DeliveryStatus::default(),
        };

        Ok(Self {
            subscription_id: body.subscription_id,
            holiday_date: HolidayDate::parse(body.holiday_date)?,
            holiday_name: HolidayName::parse(body.holiday_name)?,
            status,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryParameters {
    subscription_id: i64,
}

#[derive(Serialize)]
struct LogNotificationResponse {
    success: bool,
}
