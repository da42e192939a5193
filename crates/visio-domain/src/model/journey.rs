//! Journey damage model

use serde::{Deserialize, Serialize};
use visio_types::{DamageVector, Error, ReferenceKind, Result, ValidationError};

use crate::repository::ReferenceRepository;

/// A transportation mean with its damage per kilometre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportationMean {
    pub name: String,
    pub french: Option<String>,
    pub embodied: DamageVector,
}

impl TransportationMean {
    pub fn display_name(&self) -> &str {
        self.french.as_deref().unwrap_or(&self.name)
    }
}

/// Journey entry of a meeting payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneySpec {
    pub passenger: String,
    pub mean: String,
    /// Kilometres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Checked for a whole positive count in `Journey::from_spec`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_people: Option<f64>,
}

impl JourneySpec {
    pub fn new(passenger: impl Into<String>, mean: impl Into<String>, distance: f64, number_of_people: u32) -> Self {
        Self {
            passenger: passenger.into(),
            mean: mean.into(),
            distance: Some(distance),
            number_of_people: Some(f64::from(number_of_people)),
        }
    }
}

/// A validated trip of one passenger to the meeting
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    passenger: String,
    mean: TransportationMean,
    distance: f64,
    number_of_people: u32,
}

impl Journey {
    pub fn from_spec<R>(spec: &JourneySpec, repo: &R) -> Result<Self>
    where
        R: ReferenceRepository + ?Sized,
    {
        let mean = repo
            .find_transportation_mean(&spec.mean)
            .cloned()
            .ok_or_else(|| Error::not_found(ReferenceKind::TransportationMean, &spec.mean))?;

        let distance = match spec.distance {
            None => return Err(ValidationError::MissingDistance(spec.passenger.clone()).into()),
            Some(d) if d.is_finite() && d > 0.0 => d,
            Some(d) => {
                return Err(ValidationError::NonPositiveDistance {
                    passenger: spec.passenger.clone(),
                    distance: d,
                }
                .into())
            }
        };

        let number_of_people = match spec.number_of_people {
            None => return Err(ValidationError::MissingNumberOfPeople(spec.passenger.clone()).into()),
            Some(n) if !(n >= 1.0) => return Err(ValidationError::NoPeople(spec.passenger.clone()).into()),
            Some(n) if n.fract() != 0.0 || n > f64::from(u32::MAX) => {
                return Err(ValidationError::FractionalPeople {
                    passenger: spec.passenger.clone(),
                    value: n,
                }
                .into())
            }
            Some(n) => n as u32,
        };

        Ok(Self {
            passenger: spec.passenger.clone(),
            mean,
            distance,
            number_of_people,
        })
    }

    pub fn passenger(&self) -> &str {
        &self.passenger
    }

    pub fn mean(&self) -> &TransportationMean {
        &self.mean
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn number_of_people(&self) -> u32 {
        self.number_of_people
    }

    /// Damage of the trip shared by everyone in the vehicle
    pub fn damage(&self) -> DamageVector {
        let people = f64::from(self.number_of_people);
        self.mean
            .embodied
            .transform(|_, value| value * self.distance / people)
    }
}
