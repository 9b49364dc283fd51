use crate::clients::analytics_client::{AnalyticsClientResolver, AnalyticsError};
use crate::domain::{AnalyticsTarget, EmailSubscriptionSignUpPayload, IdentifyTraits};
use crate::local_settings::{EMAIL_SUBSCRIPTION_ALERT, LocalSettings};
use crate::utils::error_chain_fmt;
use serde::{Deserialize, Serialize};

/// When to hide the subscription banner after a sign-up.
///
/// `Always` treats the identify call as fire-and-forget, `OnSuccess` keeps
/// prompting until the analytics service has accepted the event.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertDismissal {
    Always,
    OnSuccess,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub delivered: bool,
    pub alert_dismissed: bool,
}

#[derive(thiserror::Error)]
pub enum SignUpError {
    #[error("Failed to register the email subscription with the analytics service.")]
    Delivery(#[source] AnalyticsError),
}

impl std::fmt::Debug for SignUpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[tracing::instrument(
    name = "Signing up for email subscription",
    skip_all,
    fields(cluster_id = %payload.cluster_id, alert_dismissal = ?dismissal)
)]
pub async fn sign_up_email_subscription(
    payload: EmailSubscriptionSignUpPayload,
    resolver: &AnalyticsClientResolver,
    settings: &dyn LocalSettings,
    dismissal: AlertDismissal,
) -> Result<SignUpOutcome, SignUpError> {
    let client = resolver.client_for(AnalyticsTarget::EmailSignUp);
    let EmailSubscriptionSignUpPayload { cluster_id, email } = payload;
    let sent = client
        .identify(&cluster_id, &IdentifyTraits::opted_in(email))
        .await;

    match (sent, dismissal) {
        (Ok(()), _) => {
            settings.set(&EMAIL_SUBSCRIPTION_ALERT, true);
            Ok(SignUpOutcome {
                delivered: true,
                alert_dismissed: true,
            })
        }
        (Err(e), AlertDismissal::Always) => {
            tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "Analytics identify failed, dismissing the subscription alert anyway."
            );
            settings.set(&EMAIL_SUBSCRIPTION_ALERT, true);
            Ok(SignUpOutcome {
                delivered: false,
                alert_dismissed: true,
            })
        }
        (Err(e), AlertDismissal::OnSuccess) => Err(SignUpError::Delivery(e)),
    }
}
