pub mod actions;
pub mod analytics;
pub mod health_check;
pub mod local_settings;
pub mod tooltips;
