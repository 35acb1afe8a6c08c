mod assets;
mod config;
mod services;

use crate::config::Config;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use common::requests::PortalConfig;
use env_logger::Env;
use log::{error, info};
use std::thread;
use std::time::Duration;

/// Registers every route of the portal host.
fn configure_app(portal: PortalConfig) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(portal))
            .service(services::portal_config_route())
            .service(services::health_route())
            .default_service(web::route().to(assets::serve_embedded));
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, err));
        }
    };
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                error!("could not open browser: {}", err);
            }
        });
    }

    info!("Portal running at {} (API: {})", url, config.api_base_url);

    let portal = config.portal_config();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(configure_app(portal.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::test;

    fn portal() -> PortalConfig {
        PortalConfig {
            api_base_url: "https://api.example.ph/api".to_string(),
        }
    }

    #[actix_web::test]
    async fn serves_runtime_config() {
        let app = test::init_service(App::new().configure(configure_app(portal()))).await;
        let req = test::TestRequest::get().uri("/portal-config.json").to_request();
        let body: PortalConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, portal());
    }

    #[actix_web::test]
    async fn health_probe() {
        let app = test::init_service(App::new().configure(configure_app(portal()))).await;
        let req = test::TestRequest::get().uri("/healthz").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "ok");
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        let app = test::init_service(App::new().configure(configure_app(portal()))).await;
        for uri in ["/", "/datasets", "/datasets/42", "/dashboard"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success(), "{uri}");
            let content_type = resp.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
            assert!(content_type.starts_with("text/html"), "{uri}: {content_type}");
        }
    }
}
