use crate::helpers::spawn_app;
use console_api::utils::ResponseErrorMessage;

#[tokio::test]
async fn email_subscription_alert_defaults_to_false() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_local_setting("email_subscription_alert").await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let response_body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        serde_json::json!({"name": "email_subscription_alert", "value": false}),
        response_body
    );
}

#[tokio::test]
async fn unknown_local_settings_return_a_404() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_local_setting("cluster_overview_alert").await;

    // Assert
    assert_eq!(404, response.status().as_u16());

    let response_body: ResponseErrorMessage = response.json().await.unwrap();
    assert_eq!(
        "No local setting is named `cluster_overview_alert`.",
        response_body.error
    );
}
