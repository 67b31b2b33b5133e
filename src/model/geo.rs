use serde::{Deserialize, Serialize};

use super::Address;

/// Country and continent facts from the place dataset.
///
/// Fields the dataset leaves out are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub continent_code: String,
    pub country_name: String,
    pub country_name_zh: String,
    pub country_code: String,
    pub registered_country_code: String,
}

/// Autonomous system facts from the network-ownership dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRecord {
    pub asn: u32,
    pub organization: String,
}

/// One memoized resolution. Never mutated once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub place: PlaceRecord,
    pub network: Option<NetworkRecord>,
}

impl CacheEntry {
    pub fn new(place: PlaceRecord, network: Option<NetworkRecord>) -> Self {
        Self { place, network }
    }
}

/// Per-request resolution result handed to the response layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub address: Address,
    pub place: PlaceRecord,
    pub network: Option<NetworkRecord>,
    pub request_id: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}
