//! Outcome and dry-run printing.

use super::terminal::format_field;
use crate::models::{num_usable_hosts, Ipv4, ProvisionPlan};
use crate::processing::{planned_commands, ProvisionOutcome};
use colored::Colorize;
use std::error::Error;

/// Print the created resources as CSV to stdout.
pub async fn print_outcome(outcome: &ProvisionOutcome) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_outcome()");

    // Print CSV header
    println!(r#" "resource",                "name",                                    "id",             "detail""#);

    print_row(
        "network",
        &outcome.network.name,
        &outcome.network.id,
        outcome.network.status.as_deref().unwrap_or("-"),
    );

    let capacity = subnet_capacity(&outcome.subnet.cidr);
    print_row(
        "subnet",
        &outcome.subnet.name,
        &outcome.subnet.id,
        &format!(
            "{cidr} gw={gateway} {capacity}",
            cidr = outcome.subnet.cidr,
            gateway = outcome.subnet.gateway_ip.as_deref().unwrap_or("auto"),
        ),
    );

    if let Some(router) = &outcome.router {
        let detail = match &router.external_gateway_info {
            Some(gateway) => format!("external={}", gateway.network_id),
            None => "no external gateway".to_string(),
        };
        print_row("router", &router.name, &router.id, &detail);
    }

    if let Some(err) = &outcome.router_error {
        println!(
            "#{}# Router stage failed, network and subnet were still created: {err}",
            "NOTE".on_red()
        );
    }

    Ok(())
}

/// Print the CLI invocations a plan would run, without running them.
pub fn print_planned_commands(plan: &ProvisionPlan) {
    log::info!("#Start print_planned_commands()");
    for cmd in planned_commands(plan) {
        println!("{cmd}");
    }
}

fn print_row(resource: &str, name: &str, id: &str, detail: &str) {
    println!(
        "{resource},{name},{id},{detail}",
        resource = format_field(resource, 11),
        name = format_field(name, 22),
        id = format_field(id, 38),
        detail = format_field(detail, 20),
    );
}

/// Host capacity for IPv4 subnets; IPv6 capacity is not worth printing.
fn subnet_capacity(cidr: &str) -> String {
    match Ipv4::new(cidr) {
        Ok(subnet) => match num_usable_hosts(subnet.mask) {
            Ok(hosts) => format!("{hosts}_hosts"),
            Err(_) => "0_hosts".to_string(),
        },
        Err(_) => String::new(),
    }
}
