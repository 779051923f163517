use super::{DaysBeforeNotification, NotificationType, PlaceFilter, SubscriberEmail};

/// Validated preferences for a create-or-update of a subscription.
#[derive(Clone, Debug)]
pub struct NewSubscription {
    pub email: SubscriberEmail,
    pub states: PlaceFilter,
    pub cities: PlaceFilter,
    pub notification_type: NotificationType,
    pub days_before_notification: DaysBeforeNotification,
}
