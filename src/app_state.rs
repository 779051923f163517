use crate::{
    locale::Locale,
    store::{NotificationLedger, SubscriptionStore},
};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub subscriptions: SubscriptionStore,
    pub ledger: NotificationLedger,
    pub locale: Locale,
}

impl FromRef<AppState> for SubscriptionStore {
    fn from_ref(state: &AppState) -> Self {
        state.subscriptions.clone()
    }
}

impl FromRef<AppState> for NotificationLedger {
    fn from_ref(state: &AppState) -> Self {
        state.ledger.clone()
    }
}

impl FromRef<AppState> for Locale {
    fn from_ref(state: &AppState) -> Self {
        state.locale
    }
}
