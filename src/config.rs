//! Runtime configuration.
//!
//! Settings come from the environment (loaded via dotenv in `main`); the
//! rest are compile-time constants.

use std::env;

/// Pause between consecutive CLI calls, in milliseconds.
pub const SLEEP_MSEC: u64 = 200;

/// File name prefix for the dated external-network cache.
pub const EXTERNAL_NETWORKS_CACHE_PREFIX: &str = "external_networks";

/// Project id the created resources belong to, from `OS_PROJECT_ID`.
pub fn project_id() -> Option<String> {
    env::var("OS_PROJECT_ID").ok().filter(|id| !id.is_empty())
}

/// Timezone used to date cache file names, from `QUICKSTART_CACHE_TZ`.
/// Unset or unparseable values fall back to UTC.
pub fn cache_timezone() -> chrono_tz::Tz {
    env::var("QUICKSTART_CACHE_TZ")
        .ok()
        .and_then(|tz| tz.parse().ok())
        .unwrap_or(chrono_tz::UTC)
}
