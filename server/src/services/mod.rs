//! HTTP routes of the portal host.
//!
//! - `GET /portal-config.json`: runtime configuration for the frontend
//!   (`PortalConfig`), so the same bundle can point at any API deployment.
//! - `GET /healthz`: liveness probe.
//!
//! Everything else is answered by the embedded frontend (`assets`).

use actix_web::web::{get, resource, Data};
use actix_web::{HttpResponse, Resource, Responder};
use common::requests::PortalConfig;

async fn portal_config(config: Data<PortalConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}

async fn health() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}

pub fn portal_config_route() -> Resource {
    resource("/portal-config.json").route(get().to(portal_config))
}

pub fn health_route() -> Resource {
    resource("/healthz").route(get().to(health))
}
