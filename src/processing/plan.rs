//! Plan preparation: defaulting, derivation, and payload shaping.

use super::validate::{validate_cidr, validate_gateway, validate_name};
use crate::models::{
    default_preset, first_ip_from_cidr, IpVersion, NetworkSpec, ProvisionPlan, QuickstartRequest,
    RouterSpec, SubnetSpec,
};
use itertools::Itertools;
use std::error::Error;
use std::net::Ipv6Addr;

/// Turn a request into an executable plan.
///
/// Empty CIDR and DNS fields fall back to the family preset, a missing
/// gateway is derived from the CIDR, and the resulting values are validated
/// before any payload is built. A gateway that cannot be derived stays
/// unset; the platform then assigns one.
pub fn prepare_plan(
    request: &QuickstartRequest,
    project_id: Option<String>,
) -> Result<ProvisionPlan, Box<dyn Error>> {
    let version = request.ip_version;
    let preset = default_preset(version);

    let cidr = match request.subnet_cidr.trim() {
        "" => preset.cidr.to_string(),
        value => value.to_string(),
    };

    validate_name("network name", &request.network_name)?;
    validate_name("subnet name", &request.subnet_name)?;
    validate_cidr(version, &cidr)?;

    let gateway_ip = match request.gateway_ip.as_deref().map(str::trim) {
        Some(gateway) if !gateway.is_empty() => {
            validate_gateway(version, &cidr, gateway)?;
            Some(gateway.to_string())
        }
        _ => derive_gateway(version, &cidr),
    };

    let dns_text = match request.dns.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => preset.dns.to_string(),
    };
    let dns_nameservers = dns_entries(&dns_text);

    let project_id = project_id.ok_or("Current project id is not available")?;

    let is_ipv6 = version == IpVersion::Ipv6;
    let slaac = || Some("slaac".to_string());

    let router = if request.create_router {
        validate_name("router name", &request.router_name)?;
        let external_network = if request.open_external_network {
            let name = request
                .external_network
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .ok_or("External gateway requested but no external network given")?;
            Some(name.to_string())
        } else {
            None
        };
        Some(RouterSpec {
            name: request.router_name.clone(),
            external_network,
        })
    } else {
        None
    };

    Ok(ProvisionPlan {
        network: NetworkSpec {
            name: request.network_name.clone(),
            project_id,
        },
        subnet: SubnetSpec {
            name: request.subnet_name.clone(),
            cidr,
            ip_version: version,
            enable_dhcp: true,
            gateway_ip,
            dns_nameservers,
            ipv6_address_mode: if is_ipv6 { slaac() } else { None },
            ipv6_ra_mode: if is_ipv6 { slaac() } else { None },
        },
        router,
    })
}

/// Derive a gateway suggestion, dropping IPv6 results the textual heuristic
/// mangled (nine-group addresses never make it into a payload).
fn derive_gateway(version: IpVersion, cidr: &str) -> Option<String> {
    let derived = first_ip_from_cidr(cidr)?;
    if version == IpVersion::Ipv6 && derived.parse::<Ipv6Addr>().is_err() {
        log::warn!("Derived gateway '{derived}' is not a valid ipv6 address, leaving it unset");
        return None;
    }
    Some(derived)
}

/// Split textarea-style DNS input into trimmed, de-duplicated entries.
fn dns_entries(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Option<String> {
        Some("b2f1a0d4e5c64f1b".to_string())
    }

    #[test]
    fn test_prepare_plan_defaults() {
        let request = QuickstartRequest::default();
        let plan = prepare_plan(&request, project()).expect("Error preparing plan");

        assert_eq!(plan.network.name, "default-network");
        assert_eq!(plan.subnet.cidr, "192.168.0.0/24");
        assert_eq!(plan.subnet.gateway_ip.as_deref(), Some("192.168.0.1"));
        assert_eq!(plan.subnet.dns_nameservers, vec!["1.1.1.1"]);
        assert!(plan.subnet.enable_dhcp);
        assert!(plan.subnet.ipv6_address_mode.is_none());
        assert!(plan.router.is_none());
    }

    #[test]
    fn test_prepare_plan_derives_gateway() {
        let request = QuickstartRequest {
            subnet_cidr: "10.20.30.0/24".to_string(),
            gateway_ip: None,
            ..Default::default()
        };
        let plan = prepare_plan(&request, project()).expect("Error preparing plan");
        assert_eq!(plan.subnet.gateway_ip.as_deref(), Some("10.20.30.1"));
    }

    #[test]
    fn test_prepare_plan_keeps_explicit_gateway() {
        let request = QuickstartRequest {
            subnet_cidr: "10.20.30.0/24".to_string(),
            gateway_ip: Some("10.20.30.254".to_string()),
            ..Default::default()
        };
        let plan = prepare_plan(&request, project()).expect("Error preparing plan");
        assert_eq!(plan.subnet.gateway_ip.as_deref(), Some("10.20.30.254"));
    }

    #[test]
    fn test_prepare_plan_rejects_gateway_outside_cidr() {
        let request = QuickstartRequest {
            subnet_cidr: "10.20.30.0/24".to_string(),
            gateway_ip: Some("10.99.0.1".to_string()),
            ..Default::default()
        };
        assert!(prepare_plan(&request, project()).is_err());
    }

    #[test]
    fn test_prepare_plan_empty_cidr_uses_preset() {
        let request = QuickstartRequest {
            subnet_cidr: "".to_string(),
            gateway_ip: None,
            ..Default::default()
        };
        let plan = prepare_plan(&request, project()).expect("Error preparing plan");
        assert_eq!(plan.subnet.cidr, "192.168.0.0/24");
        assert_eq!(plan.subnet.gateway_ip.as_deref(), Some("192.168.0.1"));
    }

    #[test]
    fn test_prepare_plan_ipv6_slaac() {
        let request = QuickstartRequest {
            ip_version: IpVersion::Ipv6,
            subnet_cidr: "2001:db8:0:42::/64".to_string(),
            gateway_ip: None,
            dns: None,
            ..Default::default()
        };
        let plan = prepare_plan(&request, project()).expect("Error preparing plan");
        assert_eq!(plan.subnet.gateway_ip.as_deref(), Some("2001:db8:0:42::1"));
        assert_eq!(plan.subnet.ipv6_address_mode.as_deref(), Some("slaac"));
        assert_eq!(plan.subnet.ipv6_ra_mode.as_deref(), Some("slaac"));
        assert_eq!(plan.subnet.dns_nameservers, vec!["1001:1001::2"]);
    }

    #[test]
    fn test_prepare_plan_ipv6_mangled_derivation_left_unset() {
        // Nine-group result from the append heuristic is dropped, not sent
        let request = QuickstartRequest {
            ip_version: IpVersion::Ipv6,
            subnet_cidr: "fc00:1:2:3:4:5:6:0/64".to_string(),
            gateway_ip: None,
            ..Default::default()
        };
        let plan = prepare_plan(&request, project()).expect("Error preparing plan");
        assert!(plan.subnet.gateway_ip.is_none());
    }

    #[test]
    fn test_prepare_plan_requires_project() {
        let request = QuickstartRequest::default();
        let err = prepare_plan(&request, None).expect_err("Missing project must fail");
        assert!(err.to_string().contains("project id"));
    }

    #[test]
    fn test_prepare_plan_router_section() {
        let request = QuickstartRequest {
            create_router: true,
            router_name: "dev-router".to_string(),
            open_external_network: true,
            external_network: Some("public".to_string()),
            ..Default::default()
        };
        let plan = prepare_plan(&request, project()).expect("Error preparing plan");
        let router = plan.router.expect("Router spec expected");
        assert_eq!(router.name, "dev-router");
        assert_eq!(router.external_network.as_deref(), Some("public"));
    }

    #[test]
    fn test_prepare_plan_router_requires_external_network() {
        let request = QuickstartRequest {
            create_router: true,
            open_external_network: true,
            external_network: None,
            ..Default::default()
        };
        assert!(prepare_plan(&request, project()).is_err());
    }

    #[test]
    fn test_dns_entries() {
        assert_eq!(
            dns_entries("1.1.1.1\n 8.8.8.8 \n\n8.8.8.8\n"),
            vec!["1.1.1.1", "8.8.8.8"]
        );
        assert_eq!(dns_entries("1.1.1.1"), vec!["1.1.1.1"]);
    }
}
