use crate::helpers::{spawn_app, spawn_app_with};
use console_api::handlers::AlertDismissal;
use console_api::utils::ResponseErrorMessage;
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use wiremock::matchers::{any, basic_auth, body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn sign_up_returns_a_200_when_the_identify_is_accepted() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/api/segment/v1/identify"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.analytics_server)
        .await;

    // Act
    let response = app.post_email_subscription_sign_up("c1", "a@b.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let response_body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        serde_json::json!({"delivered": true, "alert_dismissed": true}),
        response_body
    );
}

#[tokio::test]
async fn sign_up_sends_one_identify_with_the_cluster_and_consent_traits() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/api/segment/v1/identify"))
        .and(method("POST"))
        .and(basic_auth("72EEC0nqQKfoLWq0ZcGoTkJFIG9G9SII", ""))
        .and(body_partial_json(serde_json::json!({
            "type": "identify",
            "userId": "c1",
            "traits": {
                "email": "a@b.com",
                "release_notes_sign_up_from_admin_ui": "true",
                "product_updates": "true"
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.analytics_server)
        .await;

    // Act
    app.post_email_subscription_sign_up("c1", "a@b.com").await;

    // Assert
    // Mock verifies on Drop that we have sent exactly one identify.
}

#[tokio::test]
async fn sign_up_dismisses_the_subscription_alert() {
    // Arrange
    let app = spawn_app().await;
    let email: String = SafeEmail().fake();

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.analytics_server)
        .await;
    assert!(!app.email_subscription_alert().await);

    // Act
    app.post_email_subscription_sign_up("c1", &email).await;

    // Assert
    assert!(app.email_subscription_alert().await);
}

#[tokio::test]
async fn sign_up_returns_a_502_and_keeps_the_alert_when_delivery_fails() {
    // Arrange
    let app = spawn_app_with(AlertDismissal::OnSuccess).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.analytics_server)
        .await;

    // Act
    let response = app.post_email_subscription_sign_up("c1", "a@b.com").await;

    // Assert
    assert_eq!(502, response.status().as_u16());

    let response_body: ResponseErrorMessage = response.json().await.unwrap();
    assert_eq!(
        "Failed to register the email subscription with the analytics service.",
        response_body.error
    );
    assert!(!app.email_subscription_alert().await);
}

#[tokio::test]
async fn sign_up_dismisses_the_alert_anyway_when_configured_to_always_dismiss() {
    // Arrange
    let app = spawn_app_with(AlertDismissal::Always).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.analytics_server)
        .await;

    // Act
    let response = app.post_email_subscription_sign_up("c1", "a@b.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let response_body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        serde_json::json!({"delivered": false, "alert_dismissed": true}),
        response_body
    );
    assert!(app.email_subscription_alert().await);
}

#[tokio::test]
async fn malformed_actions_are_rejected_with_a_400() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (
            serde_json::json!({"type": "EMAIL_SUBSCRIPTION_SIGN_UP", "payload": {"email": "a@b.com"}}),
            "missing cluster id",
        ),
        (
            serde_json::json!({"type": "EMAIL_SUBSCRIPTION_SIGN_UP", "payload": {"clusterId": "c1"}}),
            "missing email",
        ),
        (
            serde_json::json!({"type": "EMAIL_SUBSCRIPTION_SIGN_OUT", "payload": {"clusterId": "c1", "email": "a@b.com"}}),
            "unknown action type",
        ),
        (serde_json::json!({}), "empty action"),
    ];

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.analytics_server)
        .await;

    for (invalid_body, error_message) in test_cases {
        // Act
        let response = app.post_action(&invalid_body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
    }
}
