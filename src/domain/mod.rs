mod analytics_target;
mod email_subscription_sign_up;

pub use analytics_target::{AnalyticsTarget, UnrecognizedTarget};
pub use email_subscription_sign_up::{EmailSubscriptionSignUpPayload, IdentifyTraits};
