use crate::clients::analytics_client::AnalyticsClientResolver;
use crate::domain::EmailSubscriptionSignUpPayload;
use crate::handlers::{AlertDismissal, SignUpError, SignUpOutcome, sign_up_email_subscription};
use crate::local_settings::LocalSettings;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Actions the console dispatches to the backend, in the `{type, payload}`
/// shape the UI emits them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "payload")]
pub enum ConsoleAction {
    #[serde(rename = "EMAIL_SUBSCRIPTION_SIGN_UP")]
    EmailSubscriptionSignUp(EmailSubscriptionSignUpPayload),
}

pub struct ActionDispatcher {
    resolver: AnalyticsClientResolver,
    settings: Arc<dyn LocalSettings>,
    dismissal: AlertDismissal,
}

impl ActionDispatcher {
    pub fn new(
        resolver: AnalyticsClientResolver,
        settings: Arc<dyn LocalSettings>,
        dismissal: AlertDismissal,
    ) -> Self {
        Self {
            resolver,
            settings,
            dismissal,
        }
    }

    pub fn settings(&self) -> &dyn LocalSettings {
        self.settings.as_ref()
    }

    pub fn resolver(&self) -> &AnalyticsClientResolver {
        &self.resolver
    }

    /// Every action is handled on its own; concurrent dispatches of the same
    /// action are not coalesced.
    pub async fn dispatch(&self, action: ConsoleAction) -> Result<SignUpOutcome, SignUpError> {
        match action {
            ConsoleAction::EmailSubscriptionSignUp(payload) => {
                sign_up_email_subscription(
                    payload,
                    &self.resolver,
                    self.settings.as_ref(),
                    self.dismissal,
                )
                .await
            }
        }
    }
}
