mod address;
mod geo;

pub use address::Address;
pub use geo::{CacheEntry, NetworkRecord, PlaceRecord, ResolvedIdentity};
