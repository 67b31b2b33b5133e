use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, FileConfig};
use crate::error::Result;

#[derive(Parser, Debug, Default)]
#[command(name = "ipgeo")]
#[command(version)]
#[command(
    about = "Offline IP geolocation service backed by MaxMind GeoLite2 databases",
    long_about = None
)]
pub struct Args {
    /// Path to the GeoLite2-Country (or City) database [default: GeoLite2-Country.mmdb]
    #[arg(long, env = "GEOIP_COUNTRY_MMDB")]
    pub country_mmdb: Option<PathBuf>,

    /// Path to the GeoLite2-ASN database [default: GeoLite2-ASN.mmdb]
    #[arg(long, env = "GEOIP_ASN_MMDB")]
    pub asn_mmdb: Option<PathBuf>,

    /// Listen address, e.g. "0.0.0.0:8399" or ":8399" [default: 0.0.0.0:8399]
    #[arg(short = 'l', long, env = "GEOIP_LISTEN")]
    pub listen: Option<String>,

    /// Number of LRU cache entries [default: 10000]
    #[arg(short = 'c', long, env = "GEOIP_CACHE")]
    pub cache: Option<usize>,

    /// HTTP worker threads (defaults to the number of CPUs)
    #[arg(short = 'w', long, env = "GEOIP_WORKERS")]
    pub workers: Option<usize>,

    /// Log file path, empty to log to stdout only [default: geo.log]
    #[arg(long, env = "GEOIP_LOG")]
    pub log: Option<PathBuf>,

    /// Number of rotated log files to keep [default: 5]
    #[arg(long, env = "GEOIP_LOG_BACKUPS")]
    pub log_backups: Option<usize>,

    /// Verbose output
    #[arg(short = 'v', long, env = "GEOIP_VERBOSE")]
    pub verbose: bool,

    /// TOML config file; command line and environment take precedence
    #[arg(long, env = "GEOIP_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Layer these arguments over the optional config file and built-in defaults.
    pub fn merge_with_config(self) -> Result<Config> {
        let file = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Config::resolve(self, file)
    }
}
