//! Request validation.
//!
//! Derivation is advisory and never fails; validation is the hard gate the
//! submitted values must pass before any create call runs.

use crate::models::{IpVersion, Ipv4};
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::net::{Ipv4Addr, Ipv6Addr};

lazy_static! {
    // Names end up inside CLI command strings, so whitespace and shell
    // metacharacters are rejected outright.
    static ref NAME_REGEX: Regex =
        Regex::new(r"^[A-Za-z][A-Za-z0-9._-]{0,63}$").expect("Invalid Regex");
}

/// Validate a resource name (network, subnet, router).
pub fn validate_name(kind: &str, name: &str) -> Result<(), Box<dyn Error>> {
    if name.is_empty() {
        return Err(format!("{kind} must not be empty").into());
    }
    if !NAME_REGEX.is_match(name) {
        return Err(format!(
            "Invalid {kind} '{name}': use letters, digits, '.', '_' or '-', starting with a letter"
        )
        .into());
    }
    Ok(())
}

/// Validate a CIDR for the selected address family.
pub fn validate_cidr(version: IpVersion, cidr: &str) -> Result<(), Box<dyn Error>> {
    match version {
        IpVersion::Ipv4 => {
            Ipv4::new(cidr).map_err(|e| format!("Invalid IPv4 CIDR '{cidr}': {e}"))?;
        }
        IpVersion::Ipv6 => {
            let (addr, prefix) = cidr
                .trim()
                .split_once('/')
                .ok_or_else(|| format!("Invalid IPv6 CIDR '{cidr}': missing prefix"))?;
            addr.parse::<Ipv6Addr>()
                .map_err(|_| format!("Invalid IPv6 CIDR '{cidr}': bad address"))?;
            let prefix: u8 = prefix
                .parse()
                .map_err(|_| format!("Invalid IPv6 CIDR '{cidr}': bad prefix"))?;
            if prefix > 128 {
                return Err(format!("Invalid IPv6 CIDR '{cidr}': prefix above 128").into());
            }
        }
    }
    Ok(())
}

/// Validate an operator-supplied gateway against the subnet CIDR.
///
/// IPv4 gateways must lie strictly inside the subnet (not the network base,
/// not the broadcast). IPv6 gateways get a shape check only.
pub fn validate_gateway(
    version: IpVersion,
    cidr: &str,
    gateway: &str,
) -> Result<(), Box<dyn Error>> {
    match version {
        IpVersion::Ipv4 => {
            let subnet = Ipv4::new(cidr).map_err(|e| format!("Invalid IPv4 CIDR '{cidr}': {e}"))?;
            let gateway: Ipv4Addr = gateway
                .parse()
                .map_err(|_| format!("Invalid gateway IP '{gateway}'"))?;
            if !subnet.contains(gateway) || gateway == subnet.lo() || gateway == subnet.hi() {
                return Err(format!(
                    "Gateway {gateway} is not an assignable address in {cidr}"
                )
                .into());
            }
        }
        IpVersion::Ipv6 => {
            gateway
                .parse::<Ipv6Addr>()
                .map_err(|_| format!("Invalid gateway IP '{gateway}': not a valid ipv6"))?;
        }
    }
    Ok(())
}
