//! Output formatting for quick-start results.
//!
//! - [`summary`] - created-resource and dry-run printing
//! - [`terminal`] - field formatting helpers

mod summary;
mod terminal;

pub use summary::{print_outcome, print_planned_commands};
pub use terminal::format_field;
