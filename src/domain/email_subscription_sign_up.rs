use serde::{Deserialize, Serialize};

/// Emitted by the console when a user signs up for release notes from the
/// subscription banner. The email is forwarded as typed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailSubscriptionSignUpPayload {
    pub cluster_id: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IdentifyTraits {
    pub email: String,
    pub release_notes_sign_up_from_admin_ui: String,
    pub product_updates: String,
}

impl IdentifyTraits {
    /// Both consent flags are sent as the string `"true"`, not a JSON bool.
    pub fn opted_in(email: String) -> Self {
        Self {
            email,
            release_notes_sign_up_from_admin_ui: String::from("true"),
            product_updates: String::from("true"),
        }
    }
}
