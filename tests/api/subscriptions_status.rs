use crate::helpers::{json_body, TestApp};
use holiday_reminders::locale::Locale;
use serde_json::json;

#[tokio::test]
async fn status_of_an_unknown_email_is_not_subscribed() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get_subscription_status("nonexistent@example.com").await;

    // then
    assert_eq!(response.status(), 200);
    assert_eq!(
        json_body(response).await,
        json!({ "subscribed": false, "subscription": null })
    );
}

#[tokio::test]
async fn status_returns_the_stored_lists() {
    // given
    let app = TestApp::spawn().await;
    app.subscribe(json!({
        "email": "test@example.com",
        "states": ["SP", "RJ"],
        "cities": ["São Paulo"],
        "notificationType": "all",
        "daysBeforeNotification": 7
    }))
    .await;

    // when
    let status = json_body(app.get_subscription_status("test@example.com").await).await;

    // then
    assert_eq!(status["subscribed"], true);
    assert_eq!(status["subscription"]["states"], json!(["SP", "RJ"]));
    assert_eq!(status["subscription"]["cities"], json!(["São Paulo"]));
}

#[tokio::test]
async fn status_returns_a_400_for_an_invalid_email() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get_subscription_status("invalid-email").await;

    // then
    assert_eq!(response.status(), 400);
    assert_eq!(json_body(response).await["error"], "invalid_input");
}

#[tokio::test]
async fn status_check_does_not_create_a_subscription() {
    // given
    let app = TestApp::spawn().await;

    // when
    app.get_subscription_status("someone@example.com").await;

    // then
    assert_eq!(app.subscription_count().await, 0);
}

#[tokio::test]
async fn status_without_an_email_parameter_is_invalid_input() {
    // given
    let app = TestApp::spawn_with_locale(Locale::En).await;

    // when
    let response = app.get_subscription_status_with_query("").await;

    // then
    assert_eq!(response.status(), 400);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "invalid_input");
    assert_eq!(body["message"], "Invalid request data");
}
