//! File-based implementation of ReferenceRepository

use std::path::{Path, PathBuf};

use visio_domain::model::{HardwareRecord, Software, TransportationMean};
use visio_domain::repository::ReferenceRepository;
use visio_types::{DamageRange, Result};

use crate::reference_database::ReferenceDatabase;

/// Reference repository backed by a directory of TOML files
pub struct FileReferenceRepository {
    dir: PathBuf,
    database: ReferenceDatabase,
}

impl FileReferenceRepository {
    /// Load hardware.toml, software.toml and transport.toml from `dir`
    pub fn new(dir: PathBuf) -> Result<Self> {
        let database = ReferenceDatabase::load_from_dir(&dir)?;
        Ok(Self { dir, database })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReferenceRepository for FileReferenceRepository {
    fn find_hardware(&self, name: &str) -> Option<&HardwareRecord> {
        self.database.find_hardware(name)
    }

    fn find_software(&self, name: &str) -> Option<&Software> {
        self.database.find_software(name)
    }

    fn find_transportation_mean(&self, name: &str) -> Option<&TransportationMean> {
        self.database.find_transportation_mean(name)
    }

    fn network_intensity(&self) -> &DamageRange {
        self.database.network_intensity()
    }

    fn all_hardware(&self) -> Vec<&HardwareRecord> {
        self.database.all_hardware()
    }

    fn all_software(&self) -> Vec<&Software> {
        self.database.all_software()
    }

    fn all_transportation_means(&self) -> Vec<&TransportationMean> {
        self.database.all_transportation_means()
    }
}
