pub mod actions;
pub mod clients;
pub mod configuration;
pub mod domain;
pub mod handlers;
pub mod local_settings;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod tooltips;
pub mod utils;
