use crate::helpers::spawn_app;
use console_api::utils::ResponseErrorMessage;
use wiremock::matchers::{any, basic_auth, body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn track_is_forwarded_to_the_resolved_target() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/api/segment/v1/track"))
        .and(method("POST"))
        .and(basic_auth("72EEC0nqQKfoLWq0ZcGoTkJFIG9G9SII", ""))
        .and(body_partial_json(serde_json::json!({
            "type": "track",
            "userId": "c1",
            "event": "Release Notes Viewed",
            "properties": {"page": "overview"}
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.analytics_server)
        .await;

    // Act
    let response = app
        .post_track(
            "email_sign_up",
            &serde_json::json!({
                "userId": "c1",
                "event": "Release Notes Viewed",
                "properties": {"page": "overview"}
            }),
        )
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn track_without_properties_sends_an_empty_object() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/api/segment/v1/track"))
        .and(body_partial_json(serde_json::json!({"properties": {}})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.analytics_server)
        .await;

    // Act
    let response = app
        .post_track(
            "email_sign_up",
            &serde_json::json!({"userId": "c1", "event": "Banner Closed"}),
        )
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn unknown_targets_return_a_404_without_contacting_the_analytics_service() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.analytics_server)
        .await;

    // Act
    let response = app
        .post_track(
            "page_views",
            &serde_json::json!({"userId": "c1", "event": "Page Viewed"}),
        )
        .await;

    // Assert
    assert_eq!(404, response.status().as_u16());

    let response_body: ResponseErrorMessage = response.json().await.unwrap();
    assert_eq!("Unrecognized Analytics Client target.", response_body.error);
}

#[tokio::test]
async fn track_returns_a_502_when_delivery_fails() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.analytics_server)
        .await;

    // Act
    let response = app
        .post_track(
            "email_sign_up",
            &serde_json::json!({"userId": "c1", "event": "Page Viewed"}),
        )
        .await;

    // Assert
    assert_eq!(502, response.status().as_u16());
}

#[tokio::test]
async fn track_requests_missing_fields_are_rejected_with_a_400() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (serde_json::json!({"event": "Page Viewed"}), "missing user id"),
        (serde_json::json!({"userId": "c1"}), "missing event"),
    ];

    for (invalid_body, error_message) in test_cases {
        // Act
        let response = app.post_track("email_sign_up", &invalid_body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
    }
}
