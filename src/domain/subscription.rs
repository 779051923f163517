use super::{DaysBeforeNotification, NotificationType, PlaceFilter, SubscriberEmail};
use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, FromRow)]
pub struct Subscription {
    pub id: i64,
    pub email: SubscriberEmail,
    pub states: Option<PlaceFilter>,
    pub cities: Option<PlaceFilter>,
    pub notification_type: NotificationType,
    pub days_before_notification: DaysBeforeNotification,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Subscription {
    pub fn into_view(self) -> SubscriptionView {
        SubscriptionView {
            email: self.email,
            states: self.states.unwrap_or_default(),
            cities: self.cities.unwrap_or_default(),
            notification_type: self.notification_type,
            days_before_notification: self.days_before_notification,
        }
    }
}

/// Externally visible projection of a subscription. Lists are never null.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionView {
    pub email: SubscriberEmail,
    pub states: PlaceFilter,
    pub cities: PlaceFilter,
    pub notification_type: NotificationType,
    pub days_before_notification: DaysBeforeNotification,
}

/// An active subscription together with the id ledger entries refer to.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActiveSubscription {
    pub id: i64,
    #[serde(flatten)]
    pub subscription: SubscriptionView,
}
