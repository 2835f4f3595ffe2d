//! Quick-start request model.
//!
//! The request carries the same values the quick-start form would: names for
//! the network and subnet, the address family, the CIDR, and the optional
//! router section. Missing fields fall back to the defaults an untouched
//! form would submit.

use super::gateway::{default_preset, first_ip_from_cidr, IpVersion};
use serde::{Deserialize, Serialize};

/// Operator input for a network quick-start.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct QuickstartRequest {
    /// Name for the created network.
    pub network_name: String,
    /// Name for the created subnet.
    pub subnet_name: String,
    /// Address family for the subnet.
    pub ip_version: IpVersion,
    /// Subnet CIDR; empty means "use the family default".
    pub subnet_cidr: String,
    /// Gateway IP; `None` means "derive from the CIDR".
    pub gateway_ip: Option<String>,
    /// DNS entries, one per line.
    pub dns: Option<String>,
    /// Whether to create a router and attach it to the subnet.
    pub create_router: bool,
    /// Name for the created router.
    pub router_name: String,
    /// Whether the router gets an external gateway.
    pub open_external_network: bool,
    /// External network name or id for the router gateway.
    pub external_network: Option<String>,
}

impl Default for QuickstartRequest {
    fn default() -> Self {
        let preset = default_preset(IpVersion::Ipv4);
        QuickstartRequest {
            network_name: "default-network".to_string(),
            subnet_name: "default-subnet".to_string(),
            ip_version: IpVersion::Ipv4,
            subnet_cidr: preset.cidr.to_string(),
            gateway_ip: first_ip_from_cidr(preset.cidr),
            dns: Some(preset.dns.to_string()),
            create_router: false,
            router_name: "default-router".to_string(),
            open_external_network: false,
            external_network: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = QuickstartRequest::default();
        assert_eq!(request.network_name, "default-network");
        assert_eq!(request.subnet_cidr, "192.168.0.0/24");
        assert_eq!(request.gateway_ip.as_deref(), Some("192.168.0.1"));
        assert_eq!(request.dns.as_deref(), Some("1.1.1.1"));
        assert!(!request.create_router);
    }

    #[test]
    fn test_partial_request_fills_defaults() {
        let request: QuickstartRequest =
            serde_json::from_str(r#"{"network_name": "lab-net", "ip_version": "ipv6"}"#)
                .expect("Error parsing request");
        assert_eq!(request.network_name, "lab-net");
        assert_eq!(request.ip_version, IpVersion::Ipv6);
        // Untouched fields keep the form defaults
        assert_eq!(request.subnet_name, "default-subnet");
        assert_eq!(request.router_name, "default-router");
    }
}
