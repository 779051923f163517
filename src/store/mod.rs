mod notification_ledger;
mod subscriptions;

pub use notification_ledger::NotificationLedger;
pub use subscriptions::{SubscriptionStore, UpsertOutcome};

use crate::{
    domain::ValidationError,
    locale::{Locale, Notice},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    StorageUnavailable,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::StorageUnavailable => "storage_unavailable",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),
    #[error("Storage is unavailable")]
    StorageUnavailable(#[from] sqlx::Error),
    #[error("Failed to encode a place list column")]
    ColumnEncoding(#[from] serde_json::Error),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::StorageUnavailable(_) | Self::ColumnEncoding(_) => ErrorKind::StorageUnavailable,
        }
    }

    /// Caller-facing text. Storage failures are never detailed to the caller, they
    /// get the generic `on_storage_failure` notice of the operation instead.
    pub fn message(&self, locale: Locale, on_storage_failure: Notice) -> &'static str {
        match self {
            Self::InvalidInput(e) => e.notice().text(locale),
            Self::StorageUnavailable(_) | Self::ColumnEncoding(_) => {
                on_storage_failure.text(locale)
            }
        }
    }
}
