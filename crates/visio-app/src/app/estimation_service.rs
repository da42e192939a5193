//! Estimation Service - Core Use Case for Meeting Damage
//!
//! This service orchestrates the estimation workflow:
//! 1. Apply command-line overrides to the request context
//! 2. Merge options (overrides, request options, config defaults)
//! 3. Resolve and validate the damage payload
//! 4. Compute the meeting damage against the reference data
//! 5. Return the scenario with its report

use log::info;
use thiserror::Error;
use visio_domain::repository::ReferenceRepository;
use visio_domain::service::{
    DamageOptions, DamagePayload, HardwareOptions, MeetingReport, MeetingRequest, MeetingScenario,
    SoftwareOptions,
};
use visio_types::{Bound, Error};

use crate::config::Config;

/// Errors specific to the estimation service
#[derive(Debug, Error)]
pub enum EstimationServiceError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unknown reference: {0}")]
    UnknownReference(String),

    #[error("Reference database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<Error> for EstimationServiceError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(e) => EstimationServiceError::InvalidRequest(e.to_string()),
            Error::Json(e) => EstimationServiceError::InvalidRequest(e.to_string()),
            Error::Io(e) => EstimationServiceError::InvalidRequest(e.to_string()),
            Error::NotFound { .. } => EstimationServiceError::UnknownReference(err.to_string()),
            Error::Database(msg) => EstimationServiceError::Database(msg),
            Error::Config(e) => EstimationServiceError::Config(e.to_string()),
            Error::Export(msg) => EstimationServiceError::InvalidRequest(msg),
        }
    }
}

/// Command-line overrides, highest in precedence
#[derive(Debug, Clone, Default)]
pub struct EstimationOptions {
    /// Meeting duration in minutes, replaces the request duration everywhere
    pub meeting_duration: Option<f64>,

    /// Number of software instances
    pub instances_number: Option<u32>,

    pub hardware_bound: Option<Bound>,
    pub bandwidth_bound: Option<Bound>,
    pub network_bound: Option<Bound>,
}

impl EstimationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_meeting_duration(mut self, minutes: f64) -> Self {
        self.meeting_duration = Some(minutes);
        self
    }

    pub fn with_instances_number(mut self, instances: u32) -> Self {
        self.instances_number = Some(instances);
        self
    }

    pub fn with_hardware_bound(mut self, bound: Bound) -> Self {
        self.hardware_bound = Some(bound);
        self
    }

    pub fn with_bandwidth_bound(mut self, bound: Bound) -> Self {
        self.bandwidth_bound = Some(bound);
        self
    }

    pub fn with_network_bound(mut self, bound: Bound) -> Self {
        self.network_bound = Some(bound);
        self
    }

    fn damage_options(&self) -> DamageOptions {
        DamageOptions {
            hardware: HardwareOptions {
                meeting_duration: self.meeting_duration,
                bound: self.hardware_bound,
            },
            software: SoftwareOptions {
                instances_number: self.instances_number,
                bandwidth_bound: self.bandwidth_bound,
                network_bound: self.network_bound,
                meeting_duration: self.meeting_duration,
            },
        }
    }
}

/// A computed estimation
#[derive(Debug, Clone)]
pub struct Estimation {
    pub scenario: MeetingScenario,
    pub payload: DamagePayload,
    pub report: MeetingReport,
}

/// Estimate the damage of a meeting request
pub fn estimate_meeting<R>(
    request: &MeetingRequest,
    options: &EstimationOptions,
    config: &Config,
    repo: &R,
) -> Result<Estimation, EstimationServiceError>
where
    R: ReferenceRepository + ?Sized,
{
    let mut scenario = MeetingScenario::new(
        request.user.clone(),
        options.meeting_duration.unwrap_or(request.meeting_duration),
        request.number_of_participants,
        request.payload.clone(),
    )?;

    let merged = options
        .damage_options()
        .or(request.options)
        .or(config.damage_defaults());
    let payload = scenario.resolve_payload(&merged)?;

    info!(
        "Estimating meeting of {} ({} min, {} participants)",
        scenario.user(),
        scenario.meeting_duration(),
        scenario.number_of_participants()
    );
    scenario.compute_damage(&payload, repo)?;

    let report = MeetingReport::from_scenario(&scenario)
        .ok_or_else(|| EstimationServiceError::InvalidRequest("damage was not computed".to_string()))?;

    Ok(Estimation {
        scenario,
        payload,
        report,
    })
}
