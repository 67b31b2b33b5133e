use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ipgeo::api::{self, RequestIdMiddleware};
use ipgeo::cli::Args;
use ipgeo::logging::init_logging;
use ipgeo::service::{AsnSource, CountrySource, GeoResolutionService};

#[actix_web::main]
async fn main() -> Result<()> {
    let config = Args::parse().merge_with_config()?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&config)?;

    info!("ipgeo {} starting", env!("CARGO_PKG_VERSION"));
    info!(
        "Config: country_mmdb={}, asn_mmdb={}, listen={}, cache={}, log={:?}",
        config.country_mmdb.display(),
        config.asn_mmdb.display(),
        config.listen,
        config.cache_capacity,
        config.log
    );

    let places = CountrySource::open(&config.country_mmdb)
        .context("Failed to open country database")?;
    let networks = AsnSource::open(&config.asn_mmdb)
        .context("Failed to open ASN database")?;

    let service = GeoResolutionService::new(
        Arc::new(places),
        Arc::new(networks),
        config.cache_capacity,
    );
    let data = web::Data::new(service.clone());

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(RequestIdMiddleware)
            .configure(api::init_routes)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    info!("Listening on {}", config.listen);
    server
        .bind(&config.listen)
        .with_context(|| format!("Failed to bind {}", config.listen))?
        .run()
        .await
        .context("HTTP server error")?;

    info!("Shutting down");
    service.metrics().print_summary();

    Ok(())
}
