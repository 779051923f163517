use super::StoreError;
use crate::domain::{
    ActiveSubscription, NewSubscription, SubscriberEmail, Subscription, SubscriptionStatus,
};
use sqlx::{Sqlite, SqlitePool, Transaction};
use time::OffsetDateTime;

const SELECT_SUBSCRIPTION: &str = r#"
    SELECT
        id, email, states, cities, notification_type,
        days_before_notification, is_active, created_at, updated_at
    FROM subscriptions
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub created: bool,
}

/// Persisted holiday reminder subscriptions, one row per email.
#[derive(Clone, Debug)]
pub struct SubscriptionStore {
    db_pool: SqlitePool,
}

impl SubscriptionStore {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    /// Creates the subscription, or overwrites every preference of an existing one
    /// and reactivates it.
    ///
    /// The insert attempt and the overwrite share a transaction and the `email`
    /// column is unique, so concurrent calls for one email leave a single row holding
    /// exactly one of the payloads.
    #[tracing::instrument(
        name = "Upsert subscription",
        skip(self, new_subscription),
        fields(subscriber_email = %new_subscription.email)
    )]
    pub async fn upsert(
        &self,
        new_subscription: &NewSubscription,
    ) -> Result<UpsertOutcome, StoreError> {
        let columns = PreferenceColumns::encode(new_subscription)?;
        let now = OffsetDateTime::now_utc();

        let mut transaction = self.db_pool.begin().await?;

        let created = insert_subscription(&mut transaction, &columns, now).await?;
        if !created {
            overwrite_subscription(&mut transaction, &columns, now).await?;
        }

        transaction.commit().await?;

        tracing::info!(created, "Subscription stored");
        Ok(UpsertOutcome { created })
    }

    /// Marks the subscription inactive. A missing row is left missing.
    #[tracing::instrument(name = "Deactivate subscription", skip(self))]
    pub async fn deactivate(&self, email: &SubscriberEmail) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE subscriptions SET is_active = FALSE, updated_at = ?1
            WHERE email = ?2
            "#,
        )
        .bind(OffsetDateTime::now_utc())
        .bind(email.as_ref())
        .execute(&self.db_pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::info!("No subscription to deactivate");
        }

        Ok(())
    }

    #[tracing::instrument(name = "Check subscription status", skip(self))]
    pub async fn status(&self, email: &SubscriberEmail) -> Result<SubscriptionStatus, StoreError> {
        let status = match self.find(email).await? {
            Some(subscription) => SubscriptionStatus {
                subscribed: subscription.is_active,
                subscription: Some(subscription.into_view()),
            },
            None => SubscriptionStatus::not_subscribed(),
        };

        Ok(status)
    }

    #[tracing::instrument(name = "Find subscription by email", skip(self))]
    pub async fn find(&self, email: &SubscriberEmail) -> Result<Option<Subscription>, StoreError> {
        let subscription =
            sqlx::query_as::<_, Subscription>(&format!("{SELECT_SUBSCRIPTION} WHERE email = ?1"))
                .bind(email.as_ref())
                .fetch_optional(&self.db_pool)
                .await?;

        Ok(subscription)
    }

    #[tracing::instrument(name = "List active subscriptions", skip(self))]
    pub async fn list_active(&self) -> Result<Vec<ActiveSubscription>, StoreError> {
        let subscriptions = sqlx::query_as::<_, Subscription>(&format!(
            "{SELECT_SUBSCRIPTION} WHERE is_active = TRUE ORDER BY id"
        ))
        .fetch_all(&self.db_pool)
        .await?
        .into_iter()
        .map(|subscription| ActiveSubscription {
            id: subscription.id,
            subscription: subscription.into_view(),
        })
        .collect();

        Ok(subscriptions)
    }
}

struct PreferenceColumns<'a> {
    email: &'a str,
    states: Option<String>,
    cities: Option<String>,
    notification_type: &'static str,
    days_before_notification: i64,
}

impl<'a> PreferenceColumns<'a> {
    fn encode(new_subscription: &'a NewSubscription) -> Result<Self, StoreError> {
        Ok(Self {
            email: new_subscription.email.as_ref(),
            states: new_subscription.states.to_column()?,
            cities: new_subscription.cities.to_column()?,
            notification_type: new_subscription.notification_type.as_str(),
            days_before_notification: new_subscription.days_before_notification.into(),
        })
    }
}

#[tracing::instrument(name = "Insert new subscription", skip_all)]
async fn insert_subscription(
    transaction: &mut Transaction<'_, Sqlite>,
    columns: &PreferenceColumns<'_>,
    now: OffsetDateTime,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO subscriptions (
            email,
            states,
            cities,
            notification_type,
            days_before_notification,
            is_active,
            created_at,
            updated_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, TRUE, ?6, ?6)
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(columns.email)
    .bind(columns.states.as_deref())
    .bind(columns.cities.as_deref())
    .bind(columns.notification_type)
    .bind(columns.days_before_notification)
    .bind(now)
    .execute(&mut **transaction)
    .await?;

    Ok(result.rows_affected() == 1)
}

#[tracing::instrument(name = "Overwrite existing subscription", skip_all)]
async fn overwrite_subscription(
    transaction: &mut Transaction<'_, Sqlite>,
    columns: &PreferenceColumns<'_>,
    now: OffsetDateTime,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE subscriptions SET
            states = ?1,
            cities = ?2,
            notification_type = ?3,
            days_before_notification = ?4,
            is_active = TRUE,
            updated_at = ?5
        WHERE email = ?6
        "#,
    )
    .bind(columns.states.as_deref())
    .bind(columns.cities.as_deref())
    .bind(columns.notification_type)
    .bind(columns.days_before_notification)
    .bind(now)
    .bind(columns.email)
    .execute(&mut **transaction)
    .await?;

    Ok(())
}
