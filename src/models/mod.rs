//! Domain models for the network quick-start.
//!
//! This module contains the core data structures used throughout the tool:
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`IpVersion`], [`first_ip_from_cidr`], [`default_preset`] - gateway
//!   derivation and per-family defaults
//! - [`QuickstartRequest`] - operator input
//! - [`ProvisionPlan`] and friends - prepared creation payloads
//! - [`Network`], [`Subnet`], [`Router`] - created resources

mod gateway;
mod ipv4;
mod payload;
mod request;
mod resource;

// Re-export public types
pub use gateway::{default_preset, first_ip_from_cidr, IpVersion, Preset};
pub use ipv4::{broadcast_addr, get_cidr_mask, network_base, num_usable_hosts, Ipv4, MAX_LENGTH};
pub use payload::{NetworkSpec, ProvisionPlan, RouterSpec, SubnetSpec};
pub use request::QuickstartRequest;
pub use resource::{ExternalGatewayInfo, Network, NetworkRow, Router, Subnet};
