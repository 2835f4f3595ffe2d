//! Quick-start business logic.
//!
//! This module contains the logic between the request and the CLI:
//! - [`validate`] - hard checks on submitted values
//! - [`plan`] - defaulting, gateway derivation, payload shaping
//! - [`provision`] - the create sequence and its outcome

mod plan;
mod provision;
mod validate;

// Re-export public functions
pub use plan::prepare_plan;
pub use provision::{find_external_network, planned_commands, provision, ProvisionOutcome};
pub use validate::{validate_cidr, validate_gateway, validate_name};
