//! Gateway IP derivation and per-family defaults.
//!
//! When an operator quick-starts a network, the gateway field is pre-filled
//! with the first assignable host of the subnet CIDR. The derivation is a
//! suggestion only: any input it cannot make sense of yields `None`, and the
//! caller leaves the field for the operator to fill in.

use super::ipv4::{get_cidr_mask, MAX_LENGTH};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::net::Ipv4Addr;

/// IP address family selected for the subnet.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IpVersion {
    Ipv4,
    Ipv6,
}

impl IpVersion {
    /// The numeric version used by the subnet API (4 or 6).
    pub fn as_wire(&self) -> u8 {
        match self {
            IpVersion::Ipv4 => 4,
            IpVersion::Ipv6 => 6,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpVersion::Ipv4 => write!(f, "ipv4"),
            IpVersion::Ipv6 => write!(f, "ipv6"),
        }
    }
}

/// Default CIDR and DNS literals for one address family.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Preset {
    pub cidr: &'static str,
    pub dns: &'static str,
}

lazy_static! {
    static ref DEFAULT_CIDR: HashMap<IpVersion, &'static str> = HashMap::from([
        (IpVersion::Ipv4, "192.168.0.0/24"),
        (IpVersion::Ipv6, "1001:1001::/64"),
    ]);
    static ref DEFAULT_DNS: HashMap<IpVersion, &'static str> = HashMap::from([
        (IpVersion::Ipv4, "1.1.1.1"),
        (IpVersion::Ipv6, "1001:1001::2"),
    ]);
}

/// Look up the default CIDR and DNS literals for an address family.
pub fn default_preset(version: IpVersion) -> Preset {
    Preset {
        cidr: DEFAULT_CIDR[&version],
        dns: DEFAULT_DNS[&version],
    }
}

/// Derive the first assignable host address from a CIDR string.
///
/// IPv4 addresses get real prefix arithmetic: the address is packed into a
/// `u32`, host bits are masked off, and one is added to the network base, so
/// `192.168.0.5/24` and `192.168.0.0/24` both derive `192.168.0.1`.
/// Prefixes of `/31` and `/32` carry no assignable first host and yield
/// `None`.
///
/// IPv6 addresses get a textual shortcut instead of subnet arithmetic: the
/// first `::` becomes `::1`, or `:1` is appended to a fully written address.
/// The result is a form suggestion, not a computed subnet member.
///
/// Anything unparseable yields `None`. This function never fails.
pub fn first_ip_from_cidr(cidr: &str) -> Option<String> {
    let cidr = cidr.trim();
    if cidr.is_empty() {
        return None;
    }

    let (addr, prefix) = cidr.split_once('/')?;
    if addr.is_empty() || prefix.is_empty() {
        return None;
    }

    if addr.contains('.') {
        let prefix: u8 = prefix.parse().ok()?;
        if prefix > MAX_LENGTH - 2 {
            return None;
        }

        let parts: Vec<&str> = addr.split('.').collect();
        if parts.len() != 4 {
            return None;
        }
        let mut packed: u32 = 0;
        for part in parts {
            let octet: u8 = part.parse().ok()?;
            packed = (packed << 8) | u32::from(octet);
        }

        let mask = get_cidr_mask(prefix).ok()?;
        let first = (packed & mask) + 1;
        return Some(Ipv4Addr::from(first).to_string());
    }

    if addr.contains(':') {
        if addr.contains("::") {
            return Some(addr.replacen("::", "::1", 1));
        }
        return Some(format!("{addr}:1"));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_ip_v4() {
        assert_eq!(
            first_ip_from_cidr("192.168.0.0/24").as_deref(),
            Some("192.168.0.1")
        );
        assert_eq!(
            first_ip_from_cidr("10.0.0.0/8").as_deref(),
            Some("10.0.0.1")
        );
        assert_eq!(
            first_ip_from_cidr("172.16.255.255/12").as_deref(),
            Some("172.16.0.1")
        );
        assert_eq!(first_ip_from_cidr("0.0.0.0/0").as_deref(), Some("0.0.0.1"));
    }

    #[test]
    fn test_first_ip_v4_host_bits_ignored() {
        assert_eq!(
            first_ip_from_cidr("192.168.0.5/24"),
            first_ip_from_cidr("192.168.0.0/24")
        );
        assert_eq!(
            first_ip_from_cidr("10.20.30.77/16").as_deref(),
            Some("10.20.0.1")
        );
    }

    #[test]
    fn test_first_ip_v4_degenerate_prefixes() {
        // No assignable first host below a /31
        assert_eq!(first_ip_from_cidr("192.168.0.0/31"), None);
        assert_eq!(first_ip_from_cidr("192.168.0.0/32"), None);
        assert_eq!(first_ip_from_cidr("192.168.0.0/33"), None);
    }

    #[test]
    fn test_first_ip_malformed() {
        assert_eq!(first_ip_from_cidr(""), None);
        assert_eq!(first_ip_from_cidr("   "), None);
        assert_eq!(first_ip_from_cidr("not-a-cidr"), None);
        assert_eq!(first_ip_from_cidr("192.168.0.0"), None);
        assert_eq!(first_ip_from_cidr("192.168.0.0/"), None);
        assert_eq!(first_ip_from_cidr("/24"), None);
        assert_eq!(first_ip_from_cidr("192.168.0/24"), None);
        assert_eq!(first_ip_from_cidr("1.2.3.4.5/24"), None);
        assert_eq!(first_ip_from_cidr("192.168.0.300/24"), None);
        assert_eq!(first_ip_from_cidr("192.168.0.0/abc"), None);
    }

    #[test]
    fn test_first_ip_v6_zero_compressed() {
        assert_eq!(
            first_ip_from_cidr("2001:db8::/48").as_deref(),
            Some("2001:db8::1")
        );
        assert_eq!(first_ip_from_cidr("::/64").as_deref(), Some("::1"));
        assert_eq!(
            first_ip_from_cidr("1001:1001::/64").as_deref(),
            Some("1001:1001::1")
        );
    }

    #[test]
    fn test_first_ip_v6_fully_written() {
        // Without a `::` the suffix is appended as-is; the heuristic does
        // not re-check group counts.
        assert_eq!(
            first_ip_from_cidr("fc00:1:2:3:4:5:6:0/64").as_deref(),
            Some("fc00:1:2:3:4:5:6:0:1")
        );
    }

    #[test]
    fn test_default_preset_stable() {
        let v4 = default_preset(IpVersion::Ipv4);
        assert_eq!(v4.cidr, "192.168.0.0/24");
        assert_eq!(v4.dns, "1.1.1.1");

        let v6 = default_preset(IpVersion::Ipv6);
        assert_eq!(v6.cidr, "1001:1001::/64");
        assert_eq!(v6.dns, "1001:1001::2");

        assert_eq!(default_preset(IpVersion::Ipv4), v4);
        assert_eq!(default_preset(IpVersion::Ipv6), v6);
    }

    #[test]
    fn test_preset_gateway_round_trip() {
        // The shipped defaults must themselves derive a gateway
        assert_eq!(
            first_ip_from_cidr(default_preset(IpVersion::Ipv4).cidr).as_deref(),
            Some("192.168.0.1")
        );
        assert_eq!(
            first_ip_from_cidr(default_preset(IpVersion::Ipv6).cidr).as_deref(),
            Some("1001:1001::1")
        );
    }

    #[test]
    fn test_ip_version_wire() {
        assert_eq!(IpVersion::Ipv4.as_wire(), 4);
        assert_eq!(IpVersion::Ipv6.as_wire(), 6);
        assert_eq!(IpVersion::Ipv4.to_string(), "ipv4");
        assert_eq!(IpVersion::Ipv6.to_string(), "ipv6");
    }

    #[test]
    fn test_ip_version_serde() {
        let v: IpVersion = serde_json::from_str("\"ipv6\"").unwrap();
        assert_eq!(v, IpVersion::Ipv6);
        assert_eq!(serde_json::to_string(&IpVersion::Ipv4).unwrap(), "\"ipv4\"");
    }
}
