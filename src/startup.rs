use crate::actions::ActionDispatcher;
use crate::configuration::Settings;
use crate::local_settings::InMemoryLocalSettings;
use crate::routes::{actions, analytics, health_check, local_settings, tooltips};
use crate::utils::e400;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let dispatcher = ActionDispatcher::new(
            configuration.analytics.resolver(),
            Arc::new(InMemoryLocalSettings::default()),
            configuration.analytics.alert_dismissal,
        );
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let host_origin_url = format!("{}:{}", configuration.application.host, port);
        let server = run(
            listener,
            dispatcher,
            host_origin_url,
            configuration.hosts.client,
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(
    listener: TcpListener,
    dispatcher: ActionDispatcher,
    host_origin_url: String,
    client_url: String,
) -> Result<Server, anyhow::Error> {
    let dispatcher = Data::new(dispatcher);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(client_url.as_str())
            .allowed_origin(host_origin_url.as_str())
            .allowed_methods(vec!["GET", "POST", "OPTIONS", "HEAD"])
            .allowed_headers(&[
                actix_web::http::header::ACCEPT,
                actix_web::http::header::CONTENT_TYPE,
            ])
            .block_on_origin_mismatch(true)
            .max_age(3600);
        let json_config = web::JsonConfig::default().error_handler(|err, _| e400(err));
        let query_config = web::QueryConfig::default().error_handler(|err, _| e400(err));

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .service(health_check::health_check)
            .service(actions::post)
            .service(analytics::track)
            .service(local_settings::get)
            .service(tooltips::index)
            .service(tooltips::get)
            .app_data(json_config)
            .app_data(query_config)
            .app_data(dispatcher.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
