//! The creation sequence: network, subnet, then the optional router.

use crate::models::{Network, NetworkRow, ProvisionPlan, Router, RouterSpec, Subnet};
use crate::openstack::{
    add_router_subnet, create_network, create_router, create_subnet, network_create_cmd,
    read_external_networks_cache, router_add_subnet_cmd, router_create_cmd, subnet_create_cmd,
};
use std::error::Error;

/// Everything the run created, plus the router failure if there was one.
#[derive(Debug)]
pub struct ProvisionOutcome {
    pub network: Network,
    pub subnet: Subnet,
    pub router: Option<Router>,
    /// Set when the router stage failed after network and subnet succeeded.
    pub router_error: Option<String>,
}

/// Execute a plan: network, subnet on it, then router and interface attach
/// when requested.
///
/// A failure creating the network or subnet aborts the run. A failure in
/// the router stage is captured in the outcome instead; the network and
/// subnet stand either way.
pub fn provision(plan: &ProvisionPlan) -> Result<ProvisionOutcome, Box<dyn Error>> {
    log::info!("Creating network '{}'", plan.network.name);
    let network = create_network(&plan.network)?;

    log::info!(
        "Creating subnet '{name}' ({cidr}) on network {id}",
        name = plan.subnet.name,
        cidr = plan.subnet.cidr,
        id = network.id
    );
    let subnet = create_subnet(&plan.subnet, &network.id)?;

    let (router, router_error) = match &plan.router {
        None => (None, None),
        Some(spec) => match attach_router(spec, &subnet) {
            Ok(router) => (Some(router), None),
            Err(e) => {
                log::error!("Router creation failed for '{}': {e}", spec.name);
                (None, Some(e.to_string()))
            }
        },
    };

    Ok(ProvisionOutcome {
        network,
        subnet,
        router,
        router_error,
    })
}

/// Create the router (resolving its external gateway if one is named) and
/// attach it to the subnet.
fn attach_router(spec: &RouterSpec, subnet: &Subnet) -> Result<Router, Box<dyn Error>> {
    let external_id = match &spec.external_network {
        Some(wanted) => {
            let rows = read_external_networks_cache(None)?;
            let row = find_external_network(&rows, wanted)
                .ok_or_else(|| format!("External network not found: {wanted}"))?;
            log::info!(
                "External gateway '{name}' resolved to {id}",
                name = row.name,
                id = row.id
            );
            Some(row.id.clone())
        }
        None => None,
    };

    log::info!("Creating router '{}'", spec.name);
    let router = create_router(spec, external_id.as_deref())?;

    log::info!(
        "Attaching router {router} to subnet {subnet}",
        router = router.id,
        subnet = subnet.id
    );
    add_router_subnet(&router.id, &subnet.id)?;

    Ok(router)
}

/// Match an external network by name or id.
pub fn find_external_network<'a>(rows: &'a [NetworkRow], wanted: &str) -> Option<&'a NetworkRow> {
    rows.iter().find(|row| row.name == wanted || row.id == wanted)
}

/// The CLI invocations a plan would execute, for dry runs. Ids only known
/// at execution time appear as placeholders.
pub fn planned_commands(plan: &ProvisionPlan) -> Vec<String> {
    let mut commands = vec![
        network_create_cmd(&plan.network),
        subnet_create_cmd(&plan.subnet, "<network-id>"),
    ];
    if let Some(router) = &plan.router {
        let external = router.external_network.as_deref().map(|_| "<external-network-id>");
        commands.push(router_create_cmd(router, external));
        commands.push(router_add_subnet_cmd("<router-id>", "<subnet-id>"));
    }
    commands
}
