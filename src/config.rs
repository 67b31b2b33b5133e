//! Startup configuration
//!
//! Values come from the command line / environment first, then an optional
//! TOML file, then the defaults below. The result is immutable for the
//! lifetime of the process.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Args;
use crate::error::{GeoError, Result};

pub const DEFAULT_COUNTRY_MMDB: &str = "GeoLite2-Country.mmdb";
pub const DEFAULT_ASN_MMDB: &str = "GeoLite2-ASN.mmdb";
pub const DEFAULT_LISTEN: &str = "0.0.0.0:8399";
pub const DEFAULT_CACHE_SIZE: usize = 10_000;
pub const DEFAULT_LOG: &str = "geo.log";
pub const DEFAULT_LOG_BACKUPS: usize = 5;

/// Contents of a TOML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub country_mmdb: Option<PathBuf>,
    pub asn_mmdb: Option<PathBuf>,
    pub listen: Option<String>,
    pub cache: Option<usize>,
    pub workers: Option<usize>,
    pub log: Option<PathBuf>,
    pub log_backups: Option<usize>,
    pub verbose: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GeoError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::parse(&content)
            .map_err(|e| GeoError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub country_mmdb: PathBuf,
    pub asn_mmdb: PathBuf,
    pub listen: String,
    pub cache_capacity: NonZeroUsize,
    pub workers: Option<usize>,
    /// `None` logs to stdout only
    pub log: Option<PathBuf>,
    pub log_backups: usize,
    pub verbose: bool,
}

impl Config {
    pub fn resolve(args: Args, file: FileConfig) -> Result<Self> {
        let cache = args.cache.or(file.cache).unwrap_or(DEFAULT_CACHE_SIZE);
        let cache_capacity = NonZeroUsize::new(cache)
            .ok_or_else(|| GeoError::Config("cache size must be at least 1".to_string()))?;

        let workers = args.workers.or(file.workers);
        if workers == Some(0) {
            return Err(GeoError::Config("workers must be at least 1".to_string()));
        }

        let log = args
            .log
            .or(file.log)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG));

        Ok(Config {
            country_mmdb: args
                .country_mmdb
                .or(file.country_mmdb)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_COUNTRY_MMDB)),
            asn_mmdb: args
                .asn_mmdb
                .or(file.asn_mmdb)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASN_MMDB)),
            listen: normalize_listen(
                &args
                    .listen
                    .or(file.listen)
                    .unwrap_or_else(|| DEFAULT_LISTEN.to_string()),
            ),
            cache_capacity,
            workers,
            log: (!log.as_os_str().is_empty()).then_some(log),
            log_backups: args
                .log_backups
                .or(file.log_backups)
                .unwrap_or(DEFAULT_LOG_BACKUPS),
            verbose: args.verbose || file.verbose.unwrap_or(false),
        })
    }
}

/// `":8399"` binds all interfaces
fn normalize_listen(listen: &str) -> String {
    match listen.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{}", port),
        None => listen.to_string(),
    }
}
