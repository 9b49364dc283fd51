use serde::Serialize;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// A named boolean cell of console UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalSetting {
    pub name: &'static str,
    pub default: bool,
}

/// Read by the alert banner; once true the subscription prompt is hidden.
pub const EMAIL_SUBSCRIPTION_ALERT: LocalSetting = LocalSetting {
    name: "email_subscription_alert",
    default: false,
};

pub const KNOWN_SETTINGS: &[LocalSetting] = &[EMAIL_SUBSCRIPTION_ALERT];

impl LocalSetting {
    pub fn find(name: &str) -> Option<LocalSetting> {
        KNOWN_SETTINGS.iter().find(|s| s.name == name).copied()
    }
}

pub trait LocalSettings: Send + Sync {
    fn get(&self, setting: &LocalSetting) -> bool;
    fn set(&self, setting: &LocalSetting, value: bool);
}

#[derive(Default)]
pub struct InMemoryLocalSettings {
    values: RwLock<HashMap<&'static str, bool>>,
}

impl LocalSettings for InMemoryLocalSettings {
    fn get(&self, setting: &LocalSetting) -> bool {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(setting.name)
            .copied()
            .unwrap_or(setting.default)
    }

    fn set(&self, setting: &LocalSetting, value: bool) {
        tracing::info!(setting = setting.name, value, "Updating local setting");
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(setting.name, value);
    }
}

#[derive(Serialize, Debug)]
pub struct LocalSettingValue {
    pub name: &'static str,
    pub value: bool,
}
