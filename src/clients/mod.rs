pub mod analytics_client;
