//! API data models
//!
//! This module defines the data structures used in API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::ResolvedIdentity;

pub const INVALID_IP: &str = "Invalid IP";
pub const LOOKUP_FAILED: &str = "GeoIP lookup failed";

/// Geolocation and network-ownership facts for one address
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GeoResponse {
    /// Resolved address in canonical form
    pub ip: String,

    /// Continent code (e.g. "NA")
    pub continent_code: String,

    /// Country name in English
    pub country: String,

    /// Country name in Simplified Chinese
    pub country_zh: String,

    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,

    /// ISO code of the country the network is registered in
    pub registered_country_code: String,

    /// Autonomous system number, 0 when unknown
    pub asn: u32,

    /// Autonomous system organization, empty when unknown
    pub organization: String,

    /// Resolution time in epoch milliseconds
    pub timestamp: i64,

    /// Correlation id of the request
    pub request_id: String,
}

impl GeoResponse {
    pub fn compose(identity: ResolvedIdentity) -> Self {
        let (asn, organization) = identity
            .network
            .map(|n| (n.asn, n.organization))
            .unwrap_or_default();

        GeoResponse {
            ip: identity.address.to_string(),
            continent_code: identity.place.continent_code,
            country: identity.place.country_name,
            country_zh: identity.place.country_name_zh,
            country_code: identity.place.country_code,
            registered_country_code: identity.place.registered_country_code,
            asn,
            organization,
            timestamp: identity.timestamp,
            request_id: identity.request_id,
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Query parameters for IP lookups
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IpInfoQuery {
    /// Address to resolve; defaults to the caller's address
    #[serde(default)]
    pub ip: Option<String>,
}

/// Lookup statistics
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    /// Entries currently cached
    pub cache_entries: usize,

    /// Maximum cached entries
    pub cache_capacity: usize,

    /// Total resolutions attempted
    pub lookups: u64,

    pub cache_hits: u64,

    pub cache_misses: u64,

    /// Cache hit rate in percent
    pub hit_rate: f64,

    /// Resolutions failed by the place dataset
    pub place_failures: u64,

    /// Resolutions served without ASN data
    pub network_degraded: u64,

    /// Seconds since startup
    pub uptime_secs: f64,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
