//! Software reference data loader from TOML

use std::collections::BTreeMap;

use log::debug;
use serde::Deserialize;
use visio_domain::model::{BandwidthRange, Software};
use visio_types::{DamageRange, Error, Result};

use crate::raw_damage::RawDamage;

/// Marker some records use instead of a bandwidth table
const UNKNOWN_SPEED: &str = "unknown";

/// Container for parsing software.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SoftwareConfig {
    network: RawDamage,
    #[serde(default)]
    software: Vec<RawSoftware>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSoftware {
    name: String,
    #[serde(default)]
    french: Option<String>,
    #[serde(default)]
    file_size: Option<f64>,
    #[serde(default)]
    download_speed: Option<RawDownloadSpeed>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDownloadSpeed {
    Scalar(f64),
    Marker(String),
    Table(BTreeMap<String, RawBandwidth>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBandwidth {
    Range { lower: f64, upper: f64 },
    Quality { minimum: f64, ideal: f64 },
}

impl From<RawBandwidth> for BandwidthRange {
    fn from(raw: RawBandwidth) -> Self {
        match raw {
            RawBandwidth::Range { lower, upper } => BandwidthRange::new(lower, upper),
            RawBandwidth::Quality { minimum, ideal } => BandwidthRange::new(minimum, ideal),
        }
    }
}

/// Parsed content of software.toml
#[derive(Debug, Clone)]
pub struct SoftwareCatalog {
    pub network: DamageRange,
    pub software: BTreeMap<String, Software>,
}

/// Parse and validate software.toml content
pub fn parse_software(toml_content: &str) -> Result<SoftwareCatalog> {
    let config: SoftwareConfig = toml::from_str(toml_content)
        .map_err(|e| Error::Database(format!("Failed to parse software TOML: {}", e)))?;

    let mut software = BTreeMap::new();
    for raw in config.software {
        if software.contains_key(&raw.name) {
            return Err(Error::Database(format!("Duplicate software: {}", raw.name)));
        }
        let download_speed = normalize_download_speed(&raw.name, raw.download_speed)?;
        software.insert(
            raw.name.clone(),
            Software {
                name: raw.name,
                french: raw.french,
                file_size: raw.file_size,
                download_speed,
            },
        );
    }

    debug!("Loaded {} software records", software.len());
    Ok(SoftwareCatalog {
        network: config.network.into(),
        software,
    })
}

fn normalize_download_speed(name: &str, raw: Option<RawDownloadSpeed>) -> Result<BTreeMap<u32, BandwidthRange>> {
    let mut table = BTreeMap::new();
    match raw {
        None => {}
        Some(RawDownloadSpeed::Marker(marker)) if marker == UNKNOWN_SPEED => {}
        Some(RawDownloadSpeed::Marker(marker)) => {
            return Err(Error::Database(format!(
                "Software {} has an invalid download_speed {:?}",
                name, marker
            )));
        }
        Some(RawDownloadSpeed::Scalar(kbps)) => {
            table.insert(1, checked_range(name, 1, BandwidthRange::fixed(kbps))?);
        }
        Some(RawDownloadSpeed::Table(entries)) => {
            for (key, entry) in entries {
                let threshold = match key.parse::<u32>() {
                    Ok(value) if value > 0 => value,
                    _ => {
                        return Err(Error::Database(format!(
                            "Software {} has an invalid participant threshold {:?}",
                            name, key
                        )));
                    }
                };
                table.insert(threshold, checked_range(name, threshold, entry.into())?);
            }
        }
    }
    Ok(table)
}

fn checked_range(name: &str, threshold: u32, range: BandwidthRange) -> Result<BandwidthRange> {
    let valid = range.lower.is_finite() && range.upper.is_finite() && range.lower >= 0.0;
    if !valid || range.lower > range.upper {
        return Err(Error::Database(format!(
            "Software {} has an invalid bandwidth for {} participants: lower {} upper {}",
            name, threshold, range.lower, range.upper
        )));
    }
    Ok(range)
}
