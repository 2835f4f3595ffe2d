//! Created-resource models parsed from CLI JSON output.

use serde::{Deserialize, Serialize};

/// A network as returned by `network create`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Network {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    /// Whether this network can serve as a router's external gateway.
    #[serde(rename = "router:external", default)]
    pub external: Option<bool>,
    #[serde(default)]
    pub admin_state_up: Option<bool>,
}

/// A subnet as returned by `subnet create`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Subnet {
    pub id: String,
    pub name: String,
    pub cidr: String,
    pub network_id: String,
    #[serde(default)]
    pub ip_version: Option<u8>,
    #[serde(default)]
    pub gateway_ip: Option<String>,
    #[serde(default)]
    pub dns_nameservers: Vec<String>,
    #[serde(default)]
    pub enable_dhcp: Option<bool>,
}

/// External gateway binding on a router.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExternalGatewayInfo {
    pub network_id: String,
}

/// A router as returned by `router create`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Router {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub external_gateway_info: Option<ExternalGatewayInfo>,
}

/// One row of `network list` output (capitalized keys, unlike `create`).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NetworkRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Subnets", default)]
    pub subnets: Vec<String>,
}
