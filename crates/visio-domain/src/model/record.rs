//! Normalized reference records for hardware

use serde::{Deserialize, Serialize};
use visio_types::{DamageField, DamageKind, DamageRange};

use crate::constants::{HOURS_IN_DAY, WORKING_DAYS_PER_YEAR};

/// Raw data of a hardware that has no sub-components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafProfile {
    /// Life-cycle damage of one unit
    pub embodied: Option<DamageRange>,
    /// Damage per hour while active
    pub operating: Option<DamageRange>,
    /// Damage per hour while idle
    pub standby: Option<DamageRange>,
    /// Lifetime in years
    pub lifetime: f64,
    /// Active hours per working day
    pub operating_time_per_day: f64,
    /// Authoritative total active hours, overrides the derived value
    pub known_operating_time: Option<f64>,
    /// Authoritative total idle hours, overrides the derived value
    pub known_standby_time: Option<f64>,
}

impl LeafProfile {
    pub fn damage_field(&self, field: DamageField) -> Option<&DamageRange> {
        match field {
            DamageField::Embodied => self.embodied.as_ref(),
            DamageField::Operating => self.operating.as_ref(),
            DamageField::Standby => self.standby.as_ref(),
        }
    }

    /// Total usage hours over the lifetime for the state `kind` belongs to
    pub fn compute_time(&self, kind: DamageKind) -> f64 {
        let days = self.lifetime * WORKING_DAYS_PER_YEAR;
        if kind.is_standby() {
            self.known_standby_time
                .unwrap_or_else(|| days * (HOURS_IN_DAY - self.operating_time_per_day))
        } else {
            self.known_operating_time
                .unwrap_or_else(|| days * self.operating_time_per_day)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordBody {
    Leaf(LeafProfile),
    /// Ordered child record names
    Composite(Vec<String>),
}

/// One entry of the hardware reference database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareRecord {
    pub name: String,
    /// French display name
    pub french: Option<String>,
    pub is_size_dependent: bool,
    /// Size used when the payload gives none
    pub default_size: Option<f64>,
    /// Unit `size` is expressed in (e.g. "m", "inch")
    pub size_unit: Option<String>,
    pub body: RecordBody,
}

impl HardwareRecord {
    pub fn is_composite(&self) -> bool {
        matches!(self.body, RecordBody::Composite(_))
    }

    pub fn components(&self) -> &[String] {
        match &self.body {
            RecordBody::Composite(children) => children,
            RecordBody::Leaf(_) => &[],
        }
    }

    pub fn leaf(&self) -> Option<&LeafProfile> {
        match &self.body {
            RecordBody::Leaf(profile) => Some(profile),
            RecordBody::Composite(_) => None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.french.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(lifetime: f64, operating_time_per_day: f64) -> LeafProfile {
        LeafProfile {
            embodied: None,
            operating: None,
            standby: None,
            lifetime,
            operating_time_per_day,
            known_operating_time: None,
            known_standby_time: None,
        }
    }

    #[test]
    fn test_desktop_times() {
        let desktop = profile(5.0, 7.0);
        assert!((desktop.compute_time(DamageKind::EmbodiedVisio) - 8050.0).abs() < 1e-9);
        assert!((desktop.compute_time(DamageKind::OperatingVisio) - 8050.0).abs() < 1e-9);
        assert!((desktop.compute_time(DamageKind::EmbodiedStandby) - 19550.0).abs() < 1e-9);
        assert!((desktop.compute_time(DamageKind::OperatingStandby) - 19550.0).abs() < 1e-9);
    }

    #[test]
    fn test_desktop_lifetime_with_kit_duty_cycle() {
        let kit = profile(5.0, 0.6);
        assert!((kit.compute_time(DamageKind::OperatingVisio) - 690.0).abs() < 1e-9);
        assert!((kit.compute_time(DamageKind::OperatingStandby) - 26910.0).abs() < 1e-9);
    }

    #[test]
    fn test_cable_lifetime_with_desktop_duty_cycle() {
        let cable = profile(20.0, 7.0);
        assert!((cable.compute_time(DamageKind::EmbodiedVisio) - 32200.0).abs() < 1e-9);
        assert!((cable.compute_time(DamageKind::EmbodiedStandby) - 78200.0).abs() < 1e-9);
    }

    #[test]
    fn test_known_times_override() {
        let mut laptop = profile(4.0, 7.0);
        laptop.known_operating_time = Some(5000.0);
        assert_eq!(laptop.compute_time(DamageKind::EmbodiedVisio), 5000.0);
        // Standby falls back to the derived value: 4 x 230 x 17
        assert!((laptop.compute_time(DamageKind::OperatingStandby) - 15640.0).abs() < 1e-9);

        laptop.known_standby_time = Some(12000.0);
        assert_eq!(laptop.compute_time(DamageKind::EmbodiedStandby), 12000.0);
    }
}
