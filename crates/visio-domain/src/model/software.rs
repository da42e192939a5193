//! Software damage model

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};
use visio_types::{Bound, DamageRange, DamageVector, Error, ReferenceKind, Result};

use crate::constants::{BITS_PER_BYTE, BITS_PER_KILOBIT, BYTES_PER_GIGABYTE, SECONDS_IN_MINUTE};
use crate::repository::ReferenceRepository;

/// Software entry of a meeting payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareSpec {
    pub name: String,
}

impl SoftwareSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Download bandwidth in kbit/s
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BandwidthRange {
    pub lower: f64,
    pub upper: f64,
}

impl BandwidthRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn fixed(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn select(&self, bound: Bound) -> f64 {
        match bound {
            Bound::Lower => self.lower,
            Bound::Upper => self.upper,
        }
    }
}

/// Resolved options for software damage computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareDamageOptions {
    pub instances_number: u32,
    pub bandwidth_bound: Bound,
    pub network_bound: Bound,
    /// Minutes
    pub meeting_duration: f64,
}

/// A videoconference application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Software {
    pub name: String,
    pub french: Option<String>,
    /// Installer size in MB
    pub file_size: Option<f64>,
    /// Participant threshold -> bandwidth
    pub download_speed: BTreeMap<u32, BandwidthRange>,
}

impl Software {
    pub fn from_spec<R>(spec: &SoftwareSpec, repo: &R) -> Result<Self>
    where
        R: ReferenceRepository + ?Sized,
    {
        repo.find_software(&spec.name)
            .cloned()
            .ok_or_else(|| Error::not_found(ReferenceKind::Software, &spec.name))
    }

    pub fn display_name(&self) -> &str {
        self.french.as_deref().unwrap_or(&self.name)
    }

    /// Bandwidth for a meeting with `instances` participants
    ///
    /// Picks the largest threshold not above `instances`. Below the smallest
    /// threshold the smallest one is used.
    pub fn bandwidth_for(&self, instances: u32) -> Option<BandwidthRange> {
        self.download_speed
            .range(..=instances)
            .next_back()
            .or_else(|| self.download_speed.iter().next())
            .map(|(_, range)| *range)
    }

    pub fn compute_damage(&self, options: &SoftwareDamageOptions, network: &DamageRange) -> DamageVector {
        let Some(bandwidth) = self.bandwidth_for(options.instances_number) else {
            warn!("Software {} has no bandwidth data, counting zero damage", self.name);
            return DamageVector::ZERO;
        };

        let kbps = bandwidth.select(options.bandwidth_bound);
        let gigabytes_per_minute = kbps * BITS_PER_KILOBIT * SECONDS_IN_MINUTE / BITS_PER_BYTE / BYTES_PER_GIGABYTE;
        let per_gigabyte = network.select(options.network_bound);

        per_gigabyte.transform(|_, value| value * gigabytes_per_minute * options.meeting_duration)
    }
}
