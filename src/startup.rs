use crate::{
    app_state::AppState,
    configuration::{DatabaseSettings, Settings},
    request_id::RequestUuid,
    routes::{health_check, notifications, subscriptions},
    store::{NotificationLedger, SubscriptionStore},
    telemetry::request_span,
};
use anyhow::Context;
use axum::{body::Body, Router};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub struct Application {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: Router,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let db_pool = get_connection_pool(&config.database);

        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .context("Failed to migrate the database")?;

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind `{address}`"))?;
        let local_addr = listener
            .local_addr()
            .context("Failed to read the local address")?;

        let app_state = AppState {
            subscriptions: SubscriptionStore::new(db_pool.clone()),
            ledger: NotificationLedger::new(db_pool),
            locale: config.application.locale,
        };

        tracing::info!(
            locale = app_state.locale.as_str(),
            "Holiday reminders application built"
        );

        Ok(Self {
            listener,
            local_addr,
            router: router(app_state),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tracing::info!("Listening on {}", self.local_addr);
        axum::serve(self.listener, self.router).await
    }
}

pub fn get_connection_pool(config: &DatabaseSettings) -> SqlitePool {
    SqlitePoolOptions::new()
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(config.connect_options())
}

fn router(app_state: AppState) -> Router {
    Router::new()
        .merge(health_check::router())
        .merge(subscriptions::router())
        .merge(notifications::router())
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(RequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(request_span::<Body>))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
