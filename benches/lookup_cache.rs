//! Cache, resolution and HTTP handler benchmarks

use std::net::IpAddr;
use std::num::NonZeroUsize;
use std::sync::Arc;

use actix_web::rt::System;
use actix_web::test::{self, TestRequest};
use actix_web::{web, App};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use futures::future::join_all;
use ipgeo::api::models::GeoResponse;
use ipgeo::api::{init_routes, RequestIdMiddleware};
use ipgeo::error::SourceError;
use ipgeo::model::{Address, CacheEntry, NetworkRecord, PlaceRecord, ResolvedIdentity};
use ipgeo::service::{resolve_address, GeoResolutionService, GeoSource, LookupCache};

/// Constant source, so the benchmarks measure the cache path only
struct StaticPlaces;

impl GeoSource for StaticPlaces {
    type Record = PlaceRecord;

    fn lookup(&self, _addr: IpAddr) -> Result<PlaceRecord, SourceError> {
        Ok(PlaceRecord {
            continent_code: "NA".to_string(),
            country_name: "United States".to_string(),
            country_name_zh: "美国".to_string(),
            country_code: "US".to_string(),
            registered_country_code: "US".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "static-country"
    }
}

struct StaticNetworks;

impl GeoSource for StaticNetworks {
    type Record = NetworkRecord;

    fn lookup(&self, _addr: IpAddr) -> Result<NetworkRecord, SourceError> {
        Ok(NetworkRecord {
            asn: 15169,
            organization: "GOOGLE".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "static-asn"
    }
}

fn addresses(count: usize) -> Vec<Address> {
    (0..count)
        .map(|i| format!("192.168.{}.{}", i / 256, i % 256).parse().unwrap())
        .collect()
}

fn bench_cache(c: &mut Criterion) {
    let cache = LookupCache::new(NonZeroUsize::new(10_000).unwrap());
    let keys = addresses(1000);
    for addr in &keys {
        cache.put(addr, CacheEntry::new(StaticPlaces.lookup(addr.ip()).unwrap(), None));
    }

    let mut i = 0usize;
    c.bench_function("cache/get_hit", |b| {
        b.iter(|| {
            i = (i + 1) % keys.len();
            cache.get(&keys[i])
        })
    });

    let miss: Address = "10.0.0.1".parse().unwrap();
    c.bench_function("cache/get_miss", |b| b.iter(|| cache.get(&miss)));

    let mut j = 0usize;
    c.bench_function("cache/put", |b| {
        b.iter(|| {
            j = (j + 1) % keys.len();
            cache.put(&keys[j], CacheEntry::new(PlaceRecord::default(), None))
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for distinct in [1usize, 100, 5000] {
        let service = static_service(1000);
        let keys = addresses(distinct);
        let mut i = 0usize;

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(distinct), &keys, |b, keys| {
            b.iter(|| {
                i = (i + 1) % keys.len();
                service.resolve(&keys[i], "bench")
            })
        });
    }

    group.finish();
}

fn bench_address_resolver(c: &mut Criterion) {
    let cases = [
        ("no_xff", None),
        ("single_ip", Some("8.8.8.8")),
        ("multiple_ips", Some("8.8.8.8, 1.1.1.1, 119.29.29.29")),
        ("with_private_ip", Some("192.168.1.1, 8.8.8.8, 1.1.1.1")),
    ];

    let mut group = c.benchmark_group("address_resolver");
    for (name, xff) in cases {
        group.bench_function(name, |b| {
            b.iter(|| resolve_address(None, xff, Some("203.0.113.1:12345")))
        });
    }
    group.finish();
}

fn static_service(capacity: usize) -> GeoResolutionService {
    GeoResolutionService::new(
        Arc::new(StaticPlaces),
        Arc::new(StaticNetworks),
        NonZeroUsize::new(capacity).unwrap(),
    )
}

fn bench_handler(c: &mut Criterion) {
    let system = System::new();
    let app = system.block_on(test::init_service(
        App::new()
            .app_data(web::Data::new(static_service(1000)))
            .wrap(RequestIdMiddleware)
            .configure(init_routes),
    ));

    let request = || {
        TestRequest::get()
            .uri("/api/ipinfo")
            .insert_header(("X-Forwarded-For", "192.168.1.1, 8.8.8.8"))
            .peer_addr("203.0.113.1:12345".parse().unwrap())
            .to_request()
    };

    let mut group = c.benchmark_group("handler");
    group.bench_function("ipinfo", |b| {
        b.iter(|| system.block_on(test::call_service(&app, request())))
    });

    const CONCURRENT: usize = 16;
    group.throughput(Throughput::Elements(CONCURRENT as u64));
    group.bench_function("ipinfo_concurrent", |b| {
        b.iter(|| {
            system.block_on(join_all(
                (0..CONCURRENT).map(|_| test::call_service(&app, request())),
            ))
        })
    });
    group.finish();
}

fn bench_json(c: &mut Criterion) {
    let address: Address = "8.8.8.8".parse().unwrap();
    let identity = ResolvedIdentity {
        address,
        place: StaticPlaces.lookup(address.ip()).unwrap(),
        network: StaticNetworks.lookup(address.ip()).ok(),
        request_id: "7f1d2c9e-5b7a-4f3e-9a51-0c2d8e6b4a10".to_string(),
        timestamp: 1_700_000_000_000,
    };
    let response = GeoResponse::compose(identity);

    c.bench_function("json/geo_response", |b| {
        b.iter(|| serde_json::to_vec(&response))
    });
}

criterion_group!(
    benches,
    bench_cache,
    bench_resolve,
    bench_address_resolver,
    bench_handler,
    bench_json
);
criterion_main!(benches);
