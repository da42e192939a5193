//! Meeting request files

use std::fs;
use std::path::Path;

use log::debug;
use visio_domain::service::MeetingRequest;
use visio_types::Result;

/// Read a meeting request from a JSON file
pub fn load_request_from_json(path: &Path) -> Result<MeetingRequest> {
    let content = fs::read_to_string(path)?;
    let request = parse_request(&content)?;
    debug!("Loaded request from {}", path.display());
    Ok(request)
}

pub fn parse_request(json: &str) -> Result<MeetingRequest> {
    Ok(serde_json::from_str(json)?)
}
