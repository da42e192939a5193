//! Repository trait definitions for the reference databases

use visio_types::DamageRange;

use crate::model::{HardwareRecord, Software, TransportationMean};

/// Read-only access to the hardware, software, and transport reference data
///
/// Implementations are loaded once and shared between requests, so every
/// method takes `&self`.
pub trait ReferenceRepository {
    /// Find a hardware record by name
    fn find_hardware(&self, name: &str) -> Option<&HardwareRecord>;

    /// Find a software by name
    fn find_software(&self, name: &str) -> Option<&Software>;

    /// Find a transportation mean by name
    fn find_transportation_mean(&self, name: &str) -> Option<&TransportationMean>;

    /// Damage caused by transferring one gigabyte over the network
    fn network_intensity(&self) -> &DamageRange;

    /// All hardware records, sorted by name
    fn all_hardware(&self) -> Vec<&HardwareRecord>;

    /// All software, sorted by name
    fn all_software(&self) -> Vec<&Software>;

    /// All transportation means, sorted by name
    fn all_transportation_means(&self) -> Vec<&TransportationMean>;
}
