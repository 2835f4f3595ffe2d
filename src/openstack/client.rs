//! Command builders and create/list calls against the OpenStack CLI.
//!
//! Each resource gets a pure `*_cmd` builder (also used for dry runs) and a
//! wrapper that executes it and parses the JSON response.

use super::cli;
use crate::config;
use crate::models::{Network, NetworkRow, NetworkSpec, Router, RouterSpec, Subnet, SubnetSpec};
use serde::de::DeserializeOwned;
use std::error::Error;

/// Build the `network create` invocation.
pub fn network_create_cmd(spec: &NetworkSpec) -> String {
    format!(
        "openstack network create -f json --project {project} {name}",
        project = spec.project_id,
        name = spec.name
    )
}

/// Build the `subnet create` invocation for a subnet on `network_id`.
pub fn subnet_create_cmd(spec: &SubnetSpec, network_id: &str) -> String {
    let mut cmd = format!(
        "openstack subnet create -f json --network {network_id} --subnet-range {cidr} --ip-version {version} {dhcp}",
        cidr = spec.cidr,
        version = spec.ip_version.as_wire(),
        dhcp = if spec.enable_dhcp { "--dhcp" } else { "--no-dhcp" },
    );
    if let Some(gateway) = &spec.gateway_ip {
        cmd.push_str(&format!(" --gateway {gateway}"));
    }
    for dns in &spec.dns_nameservers {
        cmd.push_str(&format!(" --dns-nameserver {dns}"));
    }
    if let Some(mode) = &spec.ipv6_address_mode {
        cmd.push_str(&format!(" --ipv6-address-mode {mode}"));
    }
    if let Some(mode) = &spec.ipv6_ra_mode {
        cmd.push_str(&format!(" --ipv6-ra-mode {mode}"));
    }
    cmd.push_str(&format!(" {}", spec.name));
    cmd
}

/// Build the `router create` invocation.
pub fn router_create_cmd(spec: &RouterSpec, external_network_id: Option<&str>) -> String {
    let mut cmd = "openstack router create -f json".to_string();
    if let Some(network_id) = external_network_id {
        cmd.push_str(&format!(" --external-gateway {network_id}"));
    }
    cmd.push_str(&format!(" {}", spec.name));
    cmd
}

/// Build the router-interface attach invocation. Produces no JSON output.
pub fn router_add_subnet_cmd(router_id: &str, subnet_id: &str) -> String {
    format!("openstack router add subnet {router_id} {subnet_id}")
}

/// Build the external-network listing invocation.
pub fn network_list_external_cmd() -> String {
    "openstack network list --external -f json".to_string()
}

/// Create a network and return the parsed resource.
pub fn create_network(spec: &NetworkSpec) -> Result<Network, Box<dyn Error>> {
    let output = cli::run(&network_create_cmd(spec))?;
    pause();
    parse_response("network create", &output)
}

/// Create a subnet on an existing network and return the parsed resource.
pub fn create_subnet(spec: &SubnetSpec, network_id: &str) -> Result<Subnet, Box<dyn Error>> {
    let output = cli::run(&subnet_create_cmd(spec, network_id))?;
    pause();
    parse_response("subnet create", &output)
}

/// Create a router, optionally bound to an external gateway network.
pub fn create_router(
    spec: &RouterSpec,
    external_network_id: Option<&str>,
) -> Result<Router, Box<dyn Error>> {
    let output = cli::run(&router_create_cmd(spec, external_network_id))?;
    pause();
    parse_response("router create", &output)
}

/// Attach a router to a subnet.
pub fn add_router_subnet(router_id: &str, subnet_id: &str) -> Result<(), Box<dyn Error>> {
    cli::run(&router_add_subnet_cmd(router_id, subnet_id))?;
    pause();
    Ok(())
}

/// List networks flagged as external gateways.
pub fn list_external_networks() -> Result<Vec<NetworkRow>, Box<dyn Error>> {
    let output = cli::run(&network_list_external_cmd())?;
    let rows: Vec<NetworkRow> = parse_response("network list", &output)?;
    log::info!("Got {} external network(s) from network list", rows.len());
    Ok(rows)
}

/// Parse one CLI JSON response, reporting the JSON path on mismatch.
pub fn parse_response<T: DeserializeOwned>(what: &str, output: &str) -> Result<T, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(output);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", output);
        format!(
            "Error parsing {what} response: path={path} error={e}",
            path = e.path()
        )
        .into()
    })
}

// Rate limiting pause between consecutive CLI calls
fn pause() {
    std::thread::sleep(std::time::Duration::from_millis(config::SLEEP_MSEC));
}
