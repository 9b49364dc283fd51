use std::fmt::Display;
use std::str::FromStr;

/// Which analytics client configuration to use.
///
/// Adding a variant means adding its write key to `AnalyticsSettings` and an
/// arm to `AnalyticsClientResolver::client_for`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsTarget {
    EmailSignUp,
}

impl AnalyticsTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsTarget::EmailSignUp => "email_sign_up",
        }
    }
}

impl Display for AnalyticsTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unrecognized Analytics Client target.")]
pub struct UnrecognizedTarget(pub String);

impl FromStr for AnalyticsTarget {
    type Err = UnrecognizedTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email_sign_up" => Ok(Self::EmailSignUp),
            other => Err(UnrecognizedTarget(other.to_string())),
        }
    }
}
