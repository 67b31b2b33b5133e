//! Target address selection
//!
//! Picks the address a request wants resolved: an explicit `ip` parameter,
//! else the first plausible public entry of `X-Forwarded-For`, else the
//! transport peer. The forwarded-for scan favours client-claimed addresses
//! over relays and is not a trust boundary.

use std::net::{IpAddr, SocketAddr};

use crate::error::GeoError;
use crate::model::Address;

/// Resolve the lookup target from request data.
pub fn resolve_address(
    explicit: Option<&str>,
    forwarded_for: Option<&str>,
    peer: Option<&str>,
) -> Result<Address, GeoError> {
    // An empty `ip=` counts as absent
    if let Some(explicit) = explicit.filter(|s| !s.is_empty()) {
        return explicit.parse();
    }

    if let Some(addr) = forwarded_for.and_then(first_public_forwarded) {
        return Ok(addr);
    }

    let peer = peer.ok_or_else(|| GeoError::InvalidAddress(String::new()))?;
    strip_port(peer)
        .map(Address::from)
        .ok_or_else(|| GeoError::InvalidAddress(peer.to_string()))
}

/// First entry of a client-first forwarded-for chain that is neither private nor loopback
pub fn first_public_forwarded(header: &str) -> Option<Address> {
    header
        .split(',')
        .map(str::trim)
        .filter_map(|entry| entry.parse::<Address>().ok())
        .find(|addr| !addr.is_private_or_loopback())
}

/// `"203.0.113.5:54321"` -> `203.0.113.5`, `"[2001:db8::1]:443"` -> `2001:db8::1`.
/// A bare address without a port is accepted as-is.
fn strip_port(peer: &str) -> Option<IpAddr> {
    peer.parse::<SocketAddr>()
        .map(|sock| sock.ip())
        .or_else(|_| peer.parse::<IpAddr>())
        .ok()
}
