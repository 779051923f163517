use super::SubscriptionView;
use serde::Serialize;

/// Point lookup result for an email.
///
/// An inactive row reports `subscribed = false` but still carries the stored
/// preferences, so callers can show what the subscriber had chosen before.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubscriptionStatus {
    pub subscribed: bool,
    pub subscription: Option<SubscriptionView>,
}

impl SubscriptionStatus {
    pub fn not_subscribed() -> Self {
        Self {
            subscribed: false,
            subscription: None,
        }
    }
}
