//! IP allow-list for the endpoints that modify content

use crate::error::{PurpleLineError, Result};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// An IPv4 network in CIDR notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CidrRange {
    network: Ipv4Addr,
    prefix: u8,
}

impl CidrRange {
    fn mask(&self) -> u32 {
        match self.prefix {
            0 => 0,
            n => u32::MAX << (32 - u32::from(n)),
        }
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let mask = self.mask();
        u32::from(addr) & mask == u32::from(self.network) & mask
    }
}

impl FromStr for CidrRange {
    type Err = PurpleLineError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PurpleLineError::Access(format!("Invalid network range: '{}'", s));

        let (addr, prefix) = s.trim().split_once('/').ok_or_else(invalid)?;
        let network: Ipv4Addr = addr.parse().map_err(|_| invalid())?;
        let prefix: u8 = prefix.parse().map_err(|_| invalid())?;
        if prefix > 32 {
            return Err(invalid());
        }

        Ok(CidrRange { network, prefix })
    }
}

impl fmt::Display for CidrRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

/// Loopback callers are always allowed. Everyone else must fall inside a listed range.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    ranges: Vec<CidrRange>,
}

impl AccessPolicy {
    pub fn new(ranges: Vec<CidrRange>) -> Self {
        AccessPolicy { ranges }
    }

    /// Parse the configured range list, failing on the first bad entry
    pub fn from_ranges(ranges: &[String]) -> Result<Self> {
        let ranges = ranges
            .iter()
            .map(|r| r.parse())
            .collect::<Result<Vec<CidrRange>>>()?;
        Ok(AccessPolicy::new(ranges))
    }

    pub fn is_authorized(&self, addr: IpAddr) -> bool {
        if addr.is_loopback() {
            return true;
        }

        let v4 = match addr {
            IpAddr::V4(v4) => v4,
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => v4,
                None => return false,
            },
        };

        v4.is_loopback() || self.ranges.iter().any(|range| range.contains(v4))
    }
}
