use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::GeoError;

/// A validated IP address in canonical form.
///
/// IPv4-mapped IPv6 addresses collapse to plain IPv4 so that both spellings
/// share one cache slot; IPv6 renders in RFC 5952 compressed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(IpAddr);

impl Address {
    pub fn new(ip: IpAddr) -> Self {
        Address(ip.to_canonical())
    }

    pub fn ip(&self) -> IpAddr {
        self.0
    }

    /// Cache key for this address
    pub fn key(&self) -> String {
        self.0.to_string()
    }

    /// True for RFC 1918 / unique-local ranges and loopback.
    pub fn is_private_or_loopback(&self) -> bool {
        match self.0 {
            IpAddr::V4(v4) => is_private_ipv4(&v4) || v4.is_loopback(),
            IpAddr::V6(v6) => is_unique_local_ipv6(&v6) || v6.is_loopback(),
        }
    }
}

fn is_private_ipv4(addr: &Ipv4Addr) -> bool {
    matches!(
        addr.octets(),
        [10, _, _, _] |                          // 10.0.0.0/8
        [172, 16..=31, _, _] |                   // 172.16.0.0/12
        [192, 168, _, _]                         // 192.168.0.0/16
    )
}

// fc00::/7
fn is_unique_local_ipv6(addr: &Ipv6Addr) -> bool {
    (addr.segments()[0] & 0xfe00) == 0xfc00
}

impl FromStr for Address {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<IpAddr>()
            .map(Address::new)
            .map_err(|_| GeoError::InvalidAddress(s.to_string()))
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Address::new(ip)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
