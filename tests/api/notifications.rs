use crate::helpers::{json_body, TestApp};
use serde_json::json;
use sqlx::Row;

#[tokio::test]
async fn logging_a_notification_appends_a_ledger_row() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app
        .post_notifications(&json!({
            "subscriptionId": 1,
            "holidayDate": "2026-12-25",
            "holidayName": "Natal",
            "status": "sent"
        }))
        .await;

    // then
    assert_eq!(response.status(), 200);
    assert_eq!(json_body(response).await, json!({ "success": true }));

    let rows = sqlx::query(
        r#"
        SELECT subscription_id, holiday_date, holiday_name, status, sent_at
        FROM notification_logs
        "#,
    )
    .fetch_all(&app.db_pool)
    .await
    .expect("Failed to fetch notification logs");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get::<i64, _>("subscription_id"), 1);
    assert_eq!(rows[0].get::<String, _>("holiday_date"), "2026-12-25");
    assert_eq!(rows[0].get::<String, _>("holiday_name"), "Natal");
    assert_eq!(rows[0].get::<String, _>("status"), "sent");
    assert!(!rows[0].get::<String, _>("sent_at").is_empty());
}

#[tokio::test]
async fn status_defaults_to_sent() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app
        .post_notifications(&json!({
            "subscriptionId": 3,
            "holidayDate": "2026-11-15",
            "holidayName": "Proclamação da República"
        }))
        .await;

    // then
    assert_eq!(response.status(), 200);
    let history = json_body(app.get_notifications(3).await).await;
    assert_eq!(history[0]["status"], "sent");
}

#[tokio::test]
async fn orphaned_subscription_ids_are_accepted() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app
        .post_notifications(&json!({
            "subscriptionId": 999,
            "holidayDate": "2026-09-07",
            "holidayName": "Independência do Brasil",
            "status": "bounced"
        }))
        .await;

    // then
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn logging_returns_a_400_for_invalid_input() {
    // given
    let app = TestApp::spawn().await;
    let test_cases = vec![
        (
            json!({
                "subscriptionId": 1,
                "holidayDate": "2026-12-25",
                "holidayName": "Natal",
                "status": "delivered"
            }),
            "unknown status",
        ),
        (
            json!({
                "subscriptionId": 1,
                "holidayDate": "2026-12-25T00:00:00Z",
                "holidayName": "Natal"
            }),
            "over-long holiday date",
        ),
        (
            json!({
                "subscriptionId": "one",
                "holidayDate": "2026-12-25",
                "holidayName": "Natal"
            }),
            "non-numeric subscription id",
        ),
        (
            json!({
                "subscriptionId": 1,
                "holidayName": "Natal"
            }),
            "missing holiday date",
        ),
        (
            json!({
                "subscriptionId": 1,
                "holidayDate": "2026-12-25",
                "holidayName": "N".repeat(256)
            }),
            "over-long holiday name",
        ),
    ];

    for (body, description) in test_cases {
        // when
        let response = app.post_notifications(&body).await;

        // then
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 BAD_REQUEST for {}",
            description
        );
        assert_eq!(json_body(response).await["error"], "invalid_input");
    }

    let history = json_body(app.get_notifications(1).await).await;
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn history_lists_entries_newest_first() {
    // given
    let app = TestApp::spawn().await;
    for (date, name, status) in [
        ("2026-04-21", "Tiradentes", "failed"),
        ("2026-05-01", "Dia do Trabalho", "sent"),
    ] {
        app.post_notifications(&json!({
            "subscriptionId": 7,
            "holidayDate": date,
            "holidayName": name,
            "status": status
        }))
        .await;
    }

    // when
    let history = json_body(app.get_notifications(7).await).await;

    // then
    assert_eq!(history.as_array().unwrap().len(), 2);
    assert_eq!(history[0]["holidayName"], "Dia do Trabalho");
    assert_eq!(history[0]["holidayDate"], "2026-05-01");
    assert_eq!(history[1]["status"], "failed");
    assert!(history[0]["sentAt"].as_str().is_some());
}

#[tokio::test]
async fn holiday_dates_are_stored_as_given() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app
        .post_notifications(&json!({
            "subscriptionId": 4,
            "holidayDate": "25/12/2026",
            "holidayName": "Natal"
        }))
        .await;

    // then
    assert_eq!(response.status(), 200);
    let history = json_body(app.get_notifications(4).await).await;
    assert_eq!(history[0]["holidayDate"], "25/12/2026");
}

#[tokio::test]
async fn history_without_a_numeric_subscription_id_is_invalid_input() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get_notifications_with_query("subscriptionId=abc").await;

    // then
    assert_eq!(response.status(), 400);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "invalid_input");
}
