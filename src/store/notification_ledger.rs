use super::StoreError;
use crate::domain::{NewNotificationLogEntry, NotificationLogEntry};
use sqlx::SqlitePool;
use time::OffsetDateTime;

/// Append-only record of reminder delivery attempts.
///
/// Entries reference a subscription id supplied by the caller; the id is not checked
/// against the subscriptions table.
#[derive(Clone, Debug)]
pub struct NotificationLedger {
    db_pool: SqlitePool,
}

impl NotificationLedger {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    #[tracing::instrument(
        name = "Record notification attempt",
        skip(self, entry),
        fields(
            subscription_id = entry.subscription_id,
            holiday_date = entry.holiday_date.as_ref(),
            status = entry.status.as_str()
        )
    )]
    pub async fn record(&self, entry: &NewNotificationLogEntry) -> Result<i64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO notification_logs (
                subscription_id,
                holiday_date,
                holiday_name,
                status,
                sent_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(entry.subscription_id)
        .bind(entry.holiday_date.as_ref())
        .bind(entry.holiday_name.as_ref())
        .bind(entry.status.as_str())
        .bind(OffsetDateTime::now_utc())
        .execute(&self.db_pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Ledger entries of one subscription, newest first.
    #[tracing::instrument(name = "Fetch notification history", skip(self))]
    pub async fn entries_for(
        &self,
        subscription_id: i64,
    ) -> Result<Vec<NotificationLogEntry>, StoreError> {
        let entries = sqlx::query_as::<_, NotificationLogEntry>(
            r#"
            SELECT id, subscription_id, holiday_date, holiday_name, status, sent_at
            FROM notification_logs
            WHERE subscription_id = ?1
            ORDER BY id DESC
            "#,
        )
        .bind(subscription_id)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(entries)
    }
}
