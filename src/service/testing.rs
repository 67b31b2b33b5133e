//! In-memory sources with call counters, for tests.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::SourceError;
use crate::model::{NetworkRecord, PlaceRecord};
use crate::service::geo_source::GeoSource;

pub fn place(continent: &str, name: &str, name_zh: &str, code: &str) -> PlaceRecord {
    PlaceRecord {
        continent_code: continent.to_string(),
        country_name: name.to_string(),
        country_name_zh: name_zh.to_string(),
        country_code: code.to_string(),
        registered_country_code: code.to_string(),
    }
}

pub struct FakePlaces {
    records: HashMap<IpAddr, PlaceRecord>,
    failure: Option<SourceError>,
    calls: AtomicUsize,
}

impl FakePlaces {
    pub fn with_defaults() -> Self {
        let mut records = HashMap::new();
        records.insert("8.8.8.8".parse().unwrap(), place("NA", "United States", "美国", "US"));
        records.insert("1.1.1.1".parse().unwrap(), place("OC", "Australia", "澳大利亚", "AU"));
        records.insert("9.9.9.9".parse().unwrap(), place("NA", "United States", "美国", "US"));
        records.insert(
            "2001:4860:4860::8888".parse().unwrap(),
            place("NA", "United States", "美国", "US"),
        );
        records.insert("203.0.113.5".parse().unwrap(), place("EU", "Germany", "德国", "DE"));
        Self {
            records,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: SourceError) -> Self {
        Self {
            records: HashMap::new(),
            failure: Some(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GeoSource for FakePlaces {
    type Record = PlaceRecord;

    fn lookup(&self, addr: IpAddr) -> Result<PlaceRecord, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.records.get(&addr).cloned().ok_or(SourceError::NotFound)
    }

    fn name(&self) -> &'static str {
        "fake-country"
    }
}

pub struct FakeNetworks {
    records: HashMap<IpAddr, NetworkRecord>,
    failure: Option<SourceError>,
    calls: AtomicUsize,
}

impl FakeNetworks {
    pub fn with_defaults() -> Self {
        let mut records = HashMap::new();
        records.insert(
            "8.8.8.8".parse().unwrap(),
            NetworkRecord {
                asn: 15169,
                organization: "GOOGLE".to_string(),
            },
        );
        records.insert(
            "1.1.1.1".parse().unwrap(),
            NetworkRecord {
                asn: 13335,
                organization: "CLOUDFLARENET".to_string(),
            },
        );
        Self {
            records,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: SourceError) -> Self {
        Self {
            records: HashMap::new(),
            failure: Some(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GeoSource for FakeNetworks {
    type Record = NetworkRecord;

    fn lookup(&self, addr: IpAddr) -> Result<NetworkRecord, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.records.get(&addr).cloned().ok_or(SourceError::NotFound)
    }

    fn name(&self) -> &'static str {
        "fake-asn"
    }
}
