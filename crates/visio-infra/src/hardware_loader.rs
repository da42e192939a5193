//! Hardware reference data loader from TOML
//!
//! Records name their lifetime and duty-cycle classes; both are resolved
//! against the class tables at load so the domain only sees plain numbers.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use serde::Deserialize;
use visio_domain::constants::HOURS_IN_DAY;
use visio_domain::model::{HardwareRecord, LeafProfile, RecordBody};
use visio_types::{Error, Result};

use crate::raw_damage::RawDamage;

/// Container for parsing hardware.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HardwareConfig {
    #[serde(default)]
    lifetime: HashMap<String, f64>,
    #[serde(default)]
    operating_time_per_day: HashMap<String, f64>,
    #[serde(default)]
    known_operating_time: HashMap<String, f64>,
    #[serde(default)]
    known_standby_time: HashMap<String, f64>,
    #[serde(default)]
    hardware: Vec<RawHardware>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHardware {
    name: String,
    #[serde(default)]
    french: Option<String>,
    #[serde(default)]
    lifetime: Option<String>,
    #[serde(default)]
    operating_time_per_day: Option<String>,
    #[serde(default)]
    is_size_dependent: bool,
    #[serde(default)]
    default_size: Option<f64>,
    #[serde(default)]
    size_unit: Option<String>,
    #[serde(default)]
    embodied: Option<RawDamage>,
    #[serde(default)]
    operating: Option<RawDamage>,
    #[serde(default)]
    standby: Option<RawDamage>,
    #[serde(default)]
    components: Option<Vec<String>>,
}

impl RawHardware {
    fn has_leaf_data(&self) -> bool {
        self.lifetime.is_some()
            || self.operating_time_per_day.is_some()
            || self.embodied.is_some()
            || self.operating.is_some()
            || self.standby.is_some()
            || self.is_size_dependent
            || self.default_size.is_some()
    }
}

/// Parse and validate hardware.toml content
pub fn parse_hardware(toml_content: &str) -> Result<BTreeMap<String, HardwareRecord>> {
    let mut config: HardwareConfig = toml::from_str(toml_content)
        .map_err(|e| Error::Database(format!("Failed to parse hardware TOML: {}", e)))?;

    for (class, years) in &config.lifetime {
        if !years.is_finite() || *years <= 0.0 {
            return Err(Error::Database(format!(
                "Lifetime class {} must be positive, got {}",
                class, years
            )));
        }
    }
    for (class, hours) in &config.operating_time_per_day {
        if !hours.is_finite() || *hours <= 0.0 || *hours >= HOURS_IN_DAY {
            return Err(Error::Database(format!(
                "Operating time per day of class {} must be within (0, {}), got {}",
                class, HOURS_IN_DAY, hours
            )));
        }
    }
    for (name, hours) in config.known_operating_time.iter().chain(&config.known_standby_time) {
        if !hours.is_finite() || *hours <= 0.0 {
            return Err(Error::Database(format!(
                "Known time of {} must be positive, got {}",
                name, hours
            )));
        }
    }

    let mut records = BTreeMap::new();
    for raw in std::mem::take(&mut config.hardware) {
        if records.contains_key(&raw.name) {
            return Err(Error::Database(format!("Duplicate hardware: {}", raw.name)));
        }
        let record = build_record(raw, &config)?;
        records.insert(record.name.clone(), record);
    }

    for name in config
        .known_operating_time
        .keys()
        .chain(config.known_standby_time.keys())
    {
        match records.get(name) {
            Some(record) if !record.is_composite() => {}
            _ => {
                return Err(Error::Database(format!(
                    "Known time given for {} which is not a leaf hardware",
                    name
                )))
            }
        }
    }

    for record in records.values() {
        for child in record.components() {
            if !records.contains_key(child) {
                return Err(Error::Database(format!(
                    "Hardware {} has unknown component {}",
                    record.name, child
                )));
            }
        }
    }
    check_cycles(&records)?;

    debug!("Loaded {} hardware records", records.len());
    Ok(records)
}

fn build_record(raw: RawHardware, config: &HardwareConfig) -> Result<HardwareRecord> {
    if let Some(children) = &raw.components {
        if children.is_empty() {
            return Err(Error::Database(format!("Composite {} has no components", raw.name)));
        }
        if raw.has_leaf_data() {
            return Err(Error::Database(format!(
                "Composite {} must not carry damage, lifetime or size data",
                raw.name
            )));
        }
    }

    if let Some(size) = raw.default_size {
        if !size.is_finite() || size <= 0.0 {
            return Err(Error::Database(format!(
                "Default size of {} must be positive, got {}",
                raw.name, size
            )));
        }
    }

    let body = match raw.components {
        Some(children) => RecordBody::Composite(children),
        None => {
            let lifetime = resolve_class(&raw.name, "lifetime", raw.lifetime.as_deref(), &config.lifetime)?;
            let operating_time_per_day = resolve_class(
                &raw.name,
                "operating_time_per_day",
                raw.operating_time_per_day.as_deref(),
                &config.operating_time_per_day,
            )?;
            RecordBody::Leaf(LeafProfile {
                embodied: raw.embodied.map(Into::into),
                operating: raw.operating.map(Into::into),
                standby: raw.standby.map(Into::into),
                lifetime,
                operating_time_per_day,
                known_operating_time: config.known_operating_time.get(&raw.name).copied(),
                known_standby_time: config.known_standby_time.get(&raw.name).copied(),
            })
        }
    };

    Ok(HardwareRecord {
        name: raw.name,
        french: raw.french,
        is_size_dependent: raw.is_size_dependent,
        default_size: raw.default_size,
        size_unit: raw.size_unit,
        body,
    })
}

fn resolve_class(name: &str, key: &str, class: Option<&str>, table: &HashMap<String, f64>) -> Result<f64> {
    let class = class.ok_or_else(|| Error::Database(format!("Hardware {} is missing {}", name, key)))?;
    table.get(class).copied().ok_or_else(|| {
        Error::Database(format!(
            "Hardware {} refers to unknown {} class {}",
            name, key, class
        ))
    })
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Visiting,
    Done,
}

fn check_cycles(records: &BTreeMap<String, HardwareRecord>) -> Result<()> {
    let mut marks: HashMap<&str, Mark> = HashMap::new();
    for name in records.keys() {
        let mut path = Vec::new();
        visit(name, records, &mut marks, &mut path)?;
    }
    Ok(())
}

fn visit<'a>(
    name: &'a str,
    records: &'a BTreeMap<String, HardwareRecord>,
    marks: &mut HashMap<&'a str, Mark>,
    path: &mut Vec<&'a str>,
) -> Result<()> {
    match marks.get(name) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::Visiting) => {
            path.push(name);
            return Err(Error::Database(format!(
                "Composite cycle: {}",
                path.join(" -> ")
            )));
        }
        None => {}
    }

    marks.insert(name, Mark::Visiting);
    path.push(name);
    if let Some(record) = records.get(name) {
        for child in record.components() {
            visit(child, records, marks, path)?;
        }
    }
    path.pop();
    marks.insert(name, Mark::Done);
    Ok(())
}
