//! Dataset adapters
//!
//! Each source wraps one MaxMind reader and turns its records into the
//! crate's own record types. Readers are opened once and shared read-only.

use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;

use maxminddb::{geoip2, Reader};
use tracing::info;

use crate::error::{GeoError, SourceError};
use crate::model::{NetworkRecord, PlaceRecord};

/// A keyed, read-only lookup into one geolocation dataset.
pub trait GeoSource: Send + Sync {
    type Record;

    fn lookup(&self, addr: IpAddr) -> Result<Self::Record, SourceError>;

    /// Source name for logs
    fn name(&self) -> &'static str;
}

fn open_reader(path: &Path) -> Result<Arc<Reader<Vec<u8>>>, GeoError> {
    let reader = Reader::open_readfile(path).map_err(|e| GeoError::Open {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    info!(
        "Opened {} (type={}, ip_version={}, build_epoch={}, nodes={})",
        path.display(),
        reader.metadata.database_type,
        reader.metadata.ip_version,
        reader.metadata.build_epoch,
        reader.metadata.node_count
    );

    Ok(Arc::new(reader))
}

/// Place data backed by a GeoLite2-Country (or City) database
#[derive(Clone)]
pub struct CountrySource {
    reader: Arc<Reader<Vec<u8>>>,
}

impl CountrySource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GeoError> {
        Ok(Self {
            reader: open_reader(path.as_ref())?,
        })
    }
}

impl GeoSource for CountrySource {
    type Record = PlaceRecord;

    fn lookup(&self, addr: IpAddr) -> Result<PlaceRecord, SourceError> {
        let record: geoip2::Country = self.reader.lookup(addr)?;
        Ok(place_from_country(&record))
    }

    fn name(&self) -> &'static str {
        "country"
    }
}

fn place_from_country(record: &geoip2::Country<'_>) -> PlaceRecord {
    let mut place = PlaceRecord::default();

    if let Some(code) = record.continent.as_ref().and_then(|c| c.code) {
        place.continent_code = code.to_string();
    }
    if let Some(country) = &record.country {
        place.country_code = country.iso_code.unwrap_or_default().to_string();
        if let Some(names) = &country.names {
            place.country_name = names.get("en").copied().unwrap_or_default().to_string();
            place.country_name_zh = names.get("zh-CN").copied().unwrap_or_default().to_string();
        }
    }
    if let Some(code) = record.registered_country.as_ref().and_then(|c| c.iso_code) {
        place.registered_country_code = code.to_string();
    }

    place
}

/// Network-ownership data backed by a GeoLite2-ASN database
#[derive(Clone)]
pub struct AsnSource {
    reader: Arc<Reader<Vec<u8>>>,
}

impl AsnSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GeoError> {
        Ok(Self {
            reader: open_reader(path.as_ref())?,
        })
    }
}

impl GeoSource for AsnSource {
    type Record = NetworkRecord;

    fn lookup(&self, addr: IpAddr) -> Result<NetworkRecord, SourceError> {
        let record: geoip2::Asn = self.reader.lookup(addr)?;
        Ok(NetworkRecord {
            asn: record.autonomous_system_number.unwrap_or_default(),
            organization: record
                .autonomous_system_organization
                .unwrap_or_default()
                .to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "asn"
    }
}
