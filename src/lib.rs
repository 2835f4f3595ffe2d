// cargo watch -x 'fmt' -x 'run'  // 'run -- request.json --dry-run'

pub mod config;
pub mod models;
pub mod openstack;
pub mod output;
pub mod processing;

use models::QuickstartRequest;
use std::error::Error;

pub use processing::{prepare_plan, provision};

/// Load a quick-start request from a JSON file, or the form defaults when
/// no file is given.
pub fn load_request(path: Option<&str>) -> Result<QuickstartRequest, Box<dyn Error>> {
    let file = match path {
        Some(file) => file,
        None => {
            log::info!("No request file given, using form defaults");
            return Ok(QuickstartRequest::default());
        }
    };

    let json = std::fs::read_to_string(file)
        .map_err(|e| format!("Error reading request file {file}: {e}"))?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let request: QuickstartRequest = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing request {file}: path={} error={e}", e.path()))?;

    Ok(request)
}
