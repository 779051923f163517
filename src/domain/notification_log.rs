use super::{DeliveryStatus, HolidayDate, HolidayName};
use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct NewNotificationLogEntry {
    pub subscription_id: i64,
    pub holiday_date: HolidayDate,
    pub holiday_name: HolidayName,
    pub status: DeliveryStatus,
}

#[derive(Clone, Debug, FromRow)]
pub struct NotificationLogEntry {
    pub id: i64,
    pub subscription_id: i64,
    pub holiday_date: String,
    pub holiday_name: String,
    pub status: DeliveryStatus,
    pub sent_at: OffsetDateTime,
}

/// Wire form of a ledger row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationLogView {
    pub id: i64,
    pub subscription_id: i64,
    pub holiday_date: String,
    pub holiday_name: String,
    pub status: DeliveryStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub sent_at: OffsetDateTime,
}

impl From<NotificationLogEntry> for NotificationLogView {
    fn from(entry: NotificationLogEntry) -> Self {
        Self {
            id: entry.id,
            subscription_id: entry.subscription_id,
            holiday_date: entry.holiday_date,
            holiday_name: entry.holiday_name,
            status: entry.status,
            sent_at: entry.sent_at,
        }
    }
}
