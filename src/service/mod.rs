mod address_resolver;
mod geo_source;
mod lookup_cache;
pub mod geo_service;

#[cfg(test)]
pub mod testing;

pub use address_resolver::{first_public_forwarded, resolve_address};
pub use geo_service::{GeoResolutionService, NetworkSource, PlaceSource};
pub use geo_source::{AsnSource, CountrySource, GeoSource};
pub use lookup_cache::LookupCache;
