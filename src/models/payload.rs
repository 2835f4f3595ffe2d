//! Prepared creation payloads.
//!
//! A [`ProvisionPlan`] is what the quick-start flow actually executes:
//! request values after defaulting, derivation, and validation, shaped for
//! the three create calls.

use super::gateway::IpVersion;
use serde::{Deserialize, Serialize};

/// Network creation payload.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NetworkSpec {
    pub name: String,
    pub project_id: String,
}

/// Subnet creation payload, bound to the created network at execution time.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubnetSpec {
    pub name: String,
    pub cidr: String,
    pub ip_version: IpVersion,
    pub enable_dhcp: bool,
    /// Gateway to assign; `None` lets the platform pick.
    pub gateway_ip: Option<String>,
    pub dns_nameservers: Vec<String>,
    pub ipv6_address_mode: Option<String>,
    pub ipv6_ra_mode: Option<String>,
}

/// Router creation payload.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RouterSpec {
    pub name: String,
    /// External network name or id for the router gateway.
    pub external_network: Option<String>,
}

/// Everything the provisioning sequence needs, in execution order.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProvisionPlan {
    pub network: NetworkSpec,
    pub subnet: SubnetSpec,
    pub router: Option<RouterSpec>,
}
