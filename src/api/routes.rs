//! API route definitions
//!
//! This module defines all API routes and their configurations.

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::api::handlers;
use crate::api::models;

/// Configure lookup routes
pub fn config_lookup_routes(cfg: &mut web::ServiceConfig) {
    // A query string that does not deserialize is reported like any other bad address
    let query_cfg = web::QueryConfig::default().error_handler(|err, _req| {
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(models::ErrorResponse::new(models::INVALID_IP)),
        )
        .into()
    });

    cfg.service(
        web::resource("/ipinfo")
            .app_data(query_cfg)
            .route(web::get().to(handlers::get_ipinfo)),
    );
}

/// Configure statistics routes
pub fn config_stats_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/stats", web::get().to(handlers::get_stats))
        .route("/health", web::get().to(handlers::health))
        .route("/openapi.json", web::get().to(handlers::openapi_json));
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_ipinfo,
        handlers::get_stats,
        handlers::health,
    ),
    components(
        schemas(
            models::GeoResponse,
            models::ErrorResponse,
            models::IpInfoQuery,
            models::StatsResponse,
            models::HealthResponse,
        )
    ),
    tags(
        (name = "Lookup", description = "IP geolocation endpoints"),
        (name = "Statistics", description = "Statistics endpoints"),
    )
)]
pub struct ApiDoc;
