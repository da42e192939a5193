//! Error types for visio-damage

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Kind of reference record a payload can name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Hardware,
    Software,
    TransportationMean,
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceKind::Hardware => write!(f, "Hardware"),
            ReferenceKind::Software => write!(f, "Software"),
            ReferenceKind::TransportationMean => write!(f, "Transportation mean"),
        }
    }
}

/// Malformed or out-of-range payload values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("meeting duration must be positive, got {0}")]
    NonPositiveDuration(f64),

    #[error("number of participants must be between {min} and {max}, got {value}")]
    ParticipantsOutOfRange { value: u32, min: u32, max: u32 },

    #[error("software instances number must be at least 1")]
    NoInstances,

    #[error("hardware {0} is size-dependent and needs a size")]
    MissingSize(String),

    #[error("hardware {name} has a non-positive size ({size})")]
    NonPositiveSize { name: String, size: f64 },

    #[error("shareForVisio of {name} must be between 0 and 1, got {share}")]
    ShareOutOfRange { name: String, share: f64 },

    #[error("journey of {0} has no distance")]
    MissingDistance(String),

    #[error("journey of {passenger} has a non-positive distance ({distance})")]
    NonPositiveDistance { passenger: String, distance: f64 },

    #[error("journey of {0} has no numberOfPeople")]
    MissingNumberOfPeople(String),

    #[error("journey of {0} must carry at least one person")]
    NoPeople(String),

    #[error("journey of {passenger} needs a whole numberOfPeople, got {value}")]
    FractionalPeople { passenger: String, value: f64 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Reference database error: {0}")]
    Database(String),

    #[error("{kind} not found: {name}")]
    NotFound { kind: ReferenceKind, name: String },

    #[error("Invalid payload: {0}")]
    Validation(#[from] ValidationError),

    #[error("Export error: {0}")]
    Export(String),
}

impl Error {
    pub fn not_found(kind: ReferenceKind, name: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            name: name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
