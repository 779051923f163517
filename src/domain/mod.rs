mod days_before_notification;
mod delivery_status;
mod holiday_date;
mod holiday_name;
mod new_subscription;
mod notification_log;
mod notification_type;
mod place_filter;
mod subscriber_email;
mod subscription;
mod subscription_status;
mod validation_error;

pub use days_before_notification::DaysBeforeNotification;
pub use delivery_status::DeliveryStatus;
pub use holiday_date::HolidayDate;
pub use holiday_name::HolidayName;
pub use new_subscription::NewSubscription;
pub use notification_log::{NewNotificationLogEntry, NotificationLogEntry, NotificationLogView};
pub use notification_type::NotificationType;
pub use place_filter::PlaceFilter;
pub use subscriber_email::SubscriberEmail;
pub use subscription::{ActiveSubscription, Subscription, SubscriptionView};
pub use subscription_status::SubscriptionStatus;
pub use validation_error::ValidationError;
