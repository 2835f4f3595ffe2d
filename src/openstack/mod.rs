//! OpenStack CLI interaction.
//!
//! This module handles all cloud-side operations:
//! - [`cli`] - Command execution for the `openstack` CLI
//! - [`client`] - Command builders and create/list calls
//! - [`cache`] - Caching of the external-network listing

mod cache;
mod cli;
mod client;

// Re-export public types and functions
pub use cache::read_external_networks_cache;
pub use cli::run;
pub use client::{
    add_router_subnet, create_network, create_router, create_subnet, list_external_networks,
    network_create_cmd, network_list_external_cmd, parse_response, router_add_subnet_cmd,
    router_create_cmd, subnet_create_cmd,
};
