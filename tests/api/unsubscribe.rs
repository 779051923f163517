use crate::helpers::{json_body, subscription_body, TestApp};

#[tokio::test]
async fn unsubscribe_deactivates_the_subscription() {
    // given
    let app = TestApp::spawn().await;
    app.subscribe(subscription_body("a@x.com")).await;

    // when
    let response = app.post_unsubscribe("a@x.com").await;

    // then
    assert_eq!(response.status(), 200);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Inscrição cancelada com sucesso!");

    let status = json_body(app.get_subscription_status("a@x.com").await).await;
    assert_eq!(status["subscribed"], false);
}

#[tokio::test]
async fn unsubscribed_status_still_reports_previous_preferences() {
    // given
    let app = TestApp::spawn().await;
    app.subscribe(subscription_body("a@x.com")).await;
    app.post_unsubscribe("a@x.com").await;

    // when
    let status = json_body(app.get_subscription_status("a@x.com").await).await;

    // then
    assert_eq!(status["subscribed"], false);
    assert_eq!(status["subscription"]["states"][0], "SP");
    assert_eq!(status["subscription"]["notificationType"], "national");
}

#[tokio::test]
async fn unsubscribing_an_unknown_email_succeeds_without_creating_a_row() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.post_unsubscribe("nobody@example.com").await;

    // then
    assert_eq!(response.status(), 200);
    assert_eq!(json_body(response).await["success"], true);
    assert_eq!(app.subscription_count().await, 0);
}

#[tokio::test]
async fn unsubscribe_returns_a_400_for_an_invalid_email() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.post_unsubscribe("invalid-email").await;

    // then
    assert_eq!(response.status(), 400);
    assert_eq!(json_body(response).await["message"], "E-mail inválido");
}

#[tokio::test]
async fn subscribing_again_reactivates_an_unsubscribed_email() {
    // given
    let app = TestApp::spawn().await;
    app.subscribe(subscription_body("a@x.com")).await;
    app.post_unsubscribe("a@x.com").await;

    // when
    let response = app.post_subscriptions(&subscription_body("a@x.com")).await;

    // then
    assert_eq!(json_body(response).await["created"], false);
    let status = json_body(app.get_subscription_status("a@x.com").await).await;
    assert_eq!(status["subscribed"], true);
    assert_eq!(app.subscription_count().await, 1);
}
