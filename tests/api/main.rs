mod actions;
mod analytics;
mod local_settings;
