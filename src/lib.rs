//! ipgeo: resolves IP addresses to country and autonomous-system data from
//! offline MaxMind databases and serves the result over HTTP.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod service;
