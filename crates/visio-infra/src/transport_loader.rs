//! Transportation mean loader from TOML

use std::collections::BTreeMap;

use log::debug;
use serde::Deserialize;
use visio_domain::model::TransportationMean;
use visio_types::{DamageVector, Error, Result};

/// Container for parsing transport.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TransportConfig {
    #[serde(default)]
    transport: Vec<RawTransport>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTransport {
    name: String,
    #[serde(default)]
    french: Option<String>,
    embodied: DamageVector,
}

/// Parse and validate transport.toml content
pub fn parse_transport(toml_content: &str) -> Result<BTreeMap<String, TransportationMean>> {
    let config: TransportConfig = toml::from_str(toml_content)
        .map_err(|e| Error::Database(format!("Failed to parse transport TOML: {}", e)))?;

    let mut means = BTreeMap::new();
    for raw in config.transport {
        if means.contains_key(&raw.name) {
            return Err(Error::Database(format!("Duplicate transportation mean: {}", raw.name)));
        }
        means.insert(
            raw.name.clone(),
            TransportationMean {
                name: raw.name,
                french: raw.french,
                embodied: raw.embodied,
            },
        );
    }

    debug!("Loaded {} transportation means", means.len());
    Ok(means)
}
