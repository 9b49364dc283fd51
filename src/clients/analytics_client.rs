use crate::domain::{AnalyticsTarget, UnrecognizedTarget};
use crate::utils::error_chain_fmt;
use chrono::{DateTime, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use uuid::Uuid;

/// Write key and host for one analytics target.
#[derive(Clone, Debug)]
pub struct AnalyticsClientConfig {
    pub write_key: Secret<String>,
    pub host: String,
}

/// Hands out analytics clients by target. Clients are built on every call;
/// only the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct AnalyticsClientResolver {
    email_sign_up: AnalyticsClientConfig,
    http_client: Client,
}

impl AnalyticsClientResolver {
    pub fn new(email_sign_up: AnalyticsClientConfig, timeout: std::time::Duration) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();

        Self {
            email_sign_up,
            http_client,
        }
    }

    pub fn client_for(&self, target: AnalyticsTarget) -> AnalyticsClient {
        let config = match target {
            AnalyticsTarget::EmailSignUp => self.email_sign_up.clone(),
        };

        AnalyticsClient {
            http_client: self.http_client.clone(),
            config,
        }
    }

    pub fn client_for_name(&self, target: &str) -> Result<AnalyticsClient, AnalyticsError> {
        let target: AnalyticsTarget = target.parse()?;

        Ok(self.client_for(target))
    }
}

#[derive(Debug)]
pub struct AnalyticsClient {
    http_client: Client,
    config: AnalyticsClientConfig,
}

impl AnalyticsClient {
    pub fn host(&self) -> &str {
        &self.config.host
    }

    pub fn write_key(&self) -> &Secret<String> {
        &self.config.write_key
    }

    /// Associate `user_id` with a set of traits.
    #[tracing::instrument(
        name = "Sending analytics identify event",
        skip_all,
        fields(user_id = %user_id)
    )]
    pub async fn identify<T>(&self, user_id: &str, traits: &T) -> Result<(), AnalyticsError>
    where
        T: Serialize,
    {
        let message = Message {
            kind: "identify",
            user_id,
            event: None,
            traits: Some(traits),
            properties: None,
            message_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            context: MessageContext::default(),
        };

        self.send(message).await
    }

    #[tracing::instrument(
        name = "Sending analytics track event",
        skip_all,
        fields(user_id = %user_id, event = %event)
    )]
    pub async fn track<T>(
        &self,
        user_id: &str,
        event: &str,
        properties: &T,
    ) -> Result<(), AnalyticsError>
    where
        T: Serialize,
    {
        let message = Message {
            kind: "track",
            user_id,
            event: Some(event),
            traits: None,
            properties: Some(properties),
            message_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            context: MessageContext::default(),
        };

        self.send(message).await
    }

    async fn send<T>(&self, message: Message<'_, T>) -> Result<(), AnalyticsError>
    where
        T: Serialize,
    {
        let url = format!("{}/v1/{}", self.config.host, message.kind);

        self.http_client
            .post(&url)
            .basic_auth(self.config.write_key.expose_secret(), Some(""))
            .json(&message)
            .send()
            .await
            .map_err(|e| AnalyticsError::Delivery(message.kind, e))?
            .error_for_status()
            .map_err(|e| AnalyticsError::Delivery(message.kind, e))?;

        Ok(())
    }
}

#[derive(thiserror::Error)]
pub enum AnalyticsError {
    #[error(transparent)]
    UnrecognizedTarget(#[from] UnrecognizedTarget),
    #[error("Failed to deliver {0} event to the analytics service.")]
    Delivery(&'static str, #[source] reqwest::Error),
}

impl std::fmt::Debug for AnalyticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

// Field names follow the Segment HTTP tracking API.
// https://segment.com/docs/connections/sources/catalog/libraries/server/http-api/
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Message<'a, T> {
    #[serde(rename = "type")]
    kind: &'static str,
    user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    traits: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<&'a T>,
    message_id: Uuid,
    timestamp: DateTime<Utc>,
    context: MessageContext,
}

#[derive(Serialize, Debug)]
struct MessageContext {
    library: Library,
}

#[derive(Serialize, Debug)]
struct Library {
    name: &'static str,
    version: &'static str,
}

impl Default for MessageContext {
    fn default() -> Self {
        Self {
            library: Library {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}
