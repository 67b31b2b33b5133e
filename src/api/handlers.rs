//! API request handlers
//!
//! This module contains the request handlers for all API endpoints.

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use tracing::{debug, error};

use crate::api::middleware::RequestId;
use crate::api::models::*;
use crate::api::routes::ApiDoc;
use crate::service::{resolve_address, GeoResolutionService};
use utoipa::OpenApi;

/// Resolve an address to country and ASN data
#[utoipa::path(
    get,
    path = "/api/ipinfo",
    params(IpInfoQuery),
    responses(
        (status = 200, description = "Address resolved", body = GeoResponse),
        (status = 400, description = "Invalid IP", body = ErrorResponse),
        (status = 500, description = "GeoIP lookup failed", body = ErrorResponse)
    ),
    tag = "Lookup"
)]
pub async fn get_ipinfo(
    req: HttpRequest,
    service: web::Data<GeoResolutionService>,
    query: web::Query<IpInfoQuery>,
    request_id: web::ReqData<RequestId>,
) -> impl Responder {
    // Decoded lossily so one non-ASCII entry only spoils itself, not the whole list
    let forwarded_for = req
        .headers()
        .get("X-Forwarded-For")
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
    let peer = req.peer_addr().map(|addr| addr.to_string());

    let address = match resolve_address(
        query.ip.as_deref(),
        forwarded_for.as_deref(),
        peer.as_deref(),
    ) {
        Ok(address) => address,
        Err(e) => {
            debug!("Rejected lookup: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse::new(INVALID_IP));
        }
    };

    // Dataset reads are blocking, keep them off the worker threads
    let service = service.into_inner();
    let RequestId(request_id) = request_id.into_inner();
    let result =
        tokio::task::spawn_blocking(move || service.resolve(&address, &request_id)).await;

    match result {
        Ok(Ok(identity)) => HttpResponse::Ok().json(GeoResponse::compose(identity)),
        Ok(Err(e)) => {
            error!("Failed to resolve {}: {}", address, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(LOOKUP_FAILED))
        }
        Err(e) => {
            error!("Lookup task for {} aborted: {}", address, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(LOOKUP_FAILED))
        }
    }
}

/// Get cache and lookup statistics
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Successfully retrieved statistics", body = StatsResponse)
    ),
    tag = "Statistics"
)]
pub async fn get_stats(service: web::Data<GeoResolutionService>) -> impl Responder {
    let cache = service.cache();
    let metrics = service.metrics();

    HttpResponse::Ok().json(StatsResponse {
        cache_entries: cache.len(),
        cache_capacity: cache.capacity(),
        lookups: metrics.get_lookups(),
        cache_hits: metrics.get_hits(),
        cache_misses: metrics.get_misses(),
        hit_rate: metrics.get_hit_rate(),
        place_failures: metrics.get_place_failures(),
        network_degraded: metrics.get_network_degraded(),
        uptime_secs: metrics.get_uptime_secs(),
    })
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Statistics"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
