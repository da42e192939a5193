//! Application use cases

pub mod estimation_service;

pub use estimation_service::{estimate_meeting, Estimation, EstimationOptions, EstimationServiceError};
