//! HTTP API
//!
//! Exposes the resolution service under `/api`.

mod handlers;
pub mod middleware;
pub mod models;
mod routes;

use actix_web::web;

/// Initialize API routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(routes::config_lookup_routes)
            .configure(routes::config_stats_routes),
    );
}

pub use middleware::{RequestId, RequestIdMiddleware};
/// Re-export ApiDoc for OpenAPI documentation
pub use routes::ApiDoc;
