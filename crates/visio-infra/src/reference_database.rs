//! In-memory reference database assembled from the three TOML files

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;
use visio_domain::model::{HardwareRecord, Software, TransportationMean};
use visio_domain::repository::ReferenceRepository;
use visio_types::{DamageRange, Error, Result};

use crate::hardware_loader::parse_hardware;
use crate::software_loader::parse_software;
use crate::transport_loader::parse_transport;

pub const HARDWARE_FILE: &str = "hardware.toml";
pub const SOFTWARE_FILE: &str = "software.toml";
pub const TRANSPORT_FILE: &str = "transport.toml";

/// Validated hardware, software and transport reference data
#[derive(Debug, Clone)]
pub struct ReferenceDatabase {
    hardware: BTreeMap<String, HardwareRecord>,
    software: BTreeMap<String, Software>,
    transport: BTreeMap<String, TransportationMean>,
    network: DamageRange,
}

impl ReferenceDatabase {
    /// Load the database from the contents of the three TOML files
    pub fn load_from_str(hardware: &str, software: &str, transport: &str) -> Result<Self> {
        let hardware = parse_hardware(hardware)?;
        let catalog = parse_software(software)?;
        let transport = parse_transport(transport)?;
        Ok(Self {
            hardware,
            software: catalog.software,
            transport,
            network: catalog.network,
        })
    }

    /// Load the database from a directory holding all three TOML files
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let hardware = read_file(&dir.join(HARDWARE_FILE))?;
        let software = read_file(&dir.join(SOFTWARE_FILE))?;
        let transport = read_file(&dir.join(TRANSPORT_FILE))?;
        let database = Self::load_from_str(&hardware, &software, &transport)?;
        info!(
            "Loaded reference database from {} ({} hardware, {} software, {} transport)",
            dir.display(),
            database.hardware.len(),
            database.software.len(),
            database.transport.len()
        );
        Ok(database)
    }

    pub fn hardware_count(&self) -> usize {
        self.hardware.len()
    }

    pub fn software_count(&self) -> usize {
        self.software.len()
    }

    pub fn transport_count(&self) -> usize {
        self.transport.len()
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::Database(format!("Failed to read {}: {}", path.display(), e)))
}

impl ReferenceRepository for ReferenceDatabase {
    fn find_hardware(&self, name: &str) -> Option<&HardwareRecord> {
        self.hardware.get(name)
    }

    fn find_software(&self, name: &str) -> Option<&Software> {
        self.software.get(name)
    }

    fn find_transportation_mean(&self, name: &str) -> Option<&TransportationMean> {
        self.transport.get(name)
    }

    fn network_intensity(&self) -> &DamageRange {
        &self.network
    }

    fn all_hardware(&self) -> Vec<&HardwareRecord> {
        self.hardware.values().collect()
    }

    fn all_software(&self) -> Vec<&Software> {
        self.software.values().collect()
    }

    fn all_transportation_means(&self) -> Vec<&TransportationMean> {
        self.transport.values().collect()
    }
}
