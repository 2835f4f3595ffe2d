//! Cache management for the external-network listing.
//!
//! The router step only needs the list of gateway-capable networks, which
//! changes rarely; caching it avoids a CLI round trip per run.

use super::client::list_external_networks;
use crate::config;
use crate::models::NetworkRow;
use std::error::Error;
use std::path::Path;

/// Read the external-network list from a cache file, or fetch it through
/// the CLI if the cache doesn't exist.
///
/// # Arguments
/// * `cache_file` - Optional path to a specific cache file. If None, uses
///   default dated naming.
///
/// # Returns
/// * `Ok(Vec<NetworkRow>)` - The listing from cache or the CLI
/// * `Err` - If a cache file is specified but doesn't exist, or the CLI
///   call fails
pub fn read_external_networks_cache(
    cache_file: Option<&str>,
) -> Result<Vec<NetworkRow>, Box<dyn Error>> {
    let now = chrono::Utc::now().with_timezone(&config::cache_timezone());

    let cache_file = match cache_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Cache file does not exist: {file}").into());
            }
            log::info!("Using provided cache file: {file}");
            file.to_string()
        }
        None => format!(
            "{prefix}_{date}.json",
            prefix = config::EXTERNAL_NETWORKS_CACHE_PREFIX,
            date = now.format("%Y-%m-%d")
        ),
    };

    let rows = match std::fs::read_to_string(&cache_file) {
        Ok(json) => {
            log::info!("Reading from cache file: {cache_file}");
            serde_json::from_str(&json).map_err(|e| format!("Error parsing cache JSON: {e}"))?
        }
        Err(_) => {
            log::warn!("Cache file not found: {cache_file}");
            let rows = list_external_networks()?;

            let json =
                serde_json::to_string(&rows).map_err(|e| format!("Error serializing JSON: {e}"))?;
            log::warn!("Writing data to cache file: {cache_file}");
            std::fs::write(&cache_file, json)
                .map_err(|e| format!("Error writing cache file {cache_file}: {e}"))?;
            rows
        }
    };

    Ok(rows)
}
