//! Enumerations shared by every layer

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which end of an uncertainty range to use
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Bound {
    Lower,
    #[default]
    Upper,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Lower => write!(f, "LOWER"),
            Bound::Upper => write!(f, "UPPER"),
        }
    }
}

/// Raw damage field a hardware record carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageField {
    Embodied,
    Operating,
    Standby,
}

impl DamageField {
    pub fn key(&self) -> &'static str {
        match self {
            DamageField::Embodied => "embodied",
            DamageField::Operating => "operating",
            DamageField::Standby => "standby",
        }
    }
}

/// The four hardware damage kinds summed into a hardware's damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DamageKind {
    EmbodiedVisio,
    EmbodiedStandby,
    OperatingVisio,
    OperatingStandby,
}

impl DamageKind {
    pub const ALL: [DamageKind; 4] = [
        DamageKind::EmbodiedVisio,
        DamageKind::EmbodiedStandby,
        DamageKind::OperatingVisio,
        DamageKind::OperatingStandby,
    ];

    /// Record field holding the raw value for this kind
    pub fn field(&self) -> DamageField {
        match self {
            DamageKind::EmbodiedVisio | DamageKind::EmbodiedStandby => DamageField::Embodied,
            DamageKind::OperatingVisio => DamageField::Operating,
            DamageKind::OperatingStandby => DamageField::Standby,
        }
    }

    pub fn is_embodied(&self) -> bool {
        self.field() == DamageField::Embodied
    }

    pub fn is_standby(&self) -> bool {
        matches!(self, DamageKind::EmbodiedStandby | DamageKind::OperatingStandby)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DamageKind::EmbodiedVisio => "EMBODIED_VISIO",
            DamageKind::EmbodiedStandby => "EMBODIED_STANDBY",
            DamageKind::OperatingVisio => "OPERATING_VISIO",
            DamageKind::OperatingStandby => "OPERATING_STANDBY",
        }
    }
}

/// Meeting damage category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Hardware,
    Software,
    Journey,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Hardware, Category::Software, Category::Journey];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Hardware => "HARDWARE",
            Category::Software => "SOFTWARE",
            Category::Journey => "JOURNEY",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
