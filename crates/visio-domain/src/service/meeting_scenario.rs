//! Meeting scenario: context of a meeting and its computed damage

use serde::{Deserialize, Serialize};
use visio_types::{Result, ValidationError};

use crate::constants::{MAX_PARTICIPANTS, MIN_PARTICIPANTS};
use crate::model::SoftwareDamageOptions;
use crate::repository::ReferenceRepository;
use crate::service::meeting_damage::{
    DamageOptions, DamagePayload, HardwareDamageOptions, MeetingDamage, MeetingPayload,
};

/// A complete estimation request as read from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRequest {
    #[serde(default)]
    pub user: String,
    /// Minutes
    pub meeting_duration: f64,
    pub number_of_participants: u32,
    #[serde(default)]
    pub payload: MeetingPayload,
    #[serde(default)]
    pub options: DamageOptions,
}

impl MeetingRequest {
    pub fn scenario(&self) -> Result<MeetingScenario> {
        MeetingScenario::new(
            self.user.clone(),
            self.meeting_duration,
            self.number_of_participants,
            self.payload.clone(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct MeetingScenario {
    user: String,
    meeting_duration: f64,
    number_of_participants: u32,
    payload: MeetingPayload,
    damage: Option<MeetingDamage>,
}

impl MeetingScenario {
    pub fn new(
        user: impl Into<String>,
        meeting_duration: f64,
        number_of_participants: u32,
        payload: MeetingPayload,
    ) -> Result<Self> {
        validate_duration(meeting_duration)?;
        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&number_of_participants) {
            return Err(ValidationError::ParticipantsOutOfRange {
                value: number_of_participants,
                min: MIN_PARTICIPANTS,
                max: MAX_PARTICIPANTS,
            }
            .into());
        }

        Ok(Self {
            user: user.into(),
            meeting_duration,
            number_of_participants,
            payload,
            damage: None,
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn meeting_duration(&self) -> f64 {
        self.meeting_duration
    }

    pub fn number_of_participants(&self) -> u32 {
        self.number_of_participants
    }

    pub fn payload(&self) -> &MeetingPayload {
        &self.payload
    }

    /// Damage from the last `compute_damage` call
    pub fn damage(&self) -> Option<&MeetingDamage> {
        self.damage.as_ref()
    }

    /// Fill unset options from the scenario context
    ///
    /// Durations fall back to the meeting duration, the instances number to
    /// the participant count and every bound to `UPPER`.
    pub fn resolve_payload(&self, options: &DamageOptions) -> Result<DamagePayload> {
        let payload = DamagePayload {
            hardware: HardwareDamageOptions {
                meeting_duration: options.hardware.meeting_duration.unwrap_or(self.meeting_duration),
                bound: options.hardware.bound.unwrap_or_default(),
            },
            software: SoftwareDamageOptions {
                instances_number: options
                    .software
                    .instances_number
                    .unwrap_or(self.number_of_participants),
                bandwidth_bound: options.software.bandwidth_bound.unwrap_or_default(),
                network_bound: options.software.network_bound.unwrap_or_default(),
                meeting_duration: options.software.meeting_duration.unwrap_or(self.meeting_duration),
            },
        };
        payload.validate()?;
        Ok(payload)
    }

    pub fn compute_damage<R>(&mut self, options: &DamagePayload, repo: &R) -> Result<&MeetingDamage>
    where
        R: ReferenceRepository + ?Sized,
    {
        let damage = MeetingDamage::compute(&self.payload, options, repo)?;
        let stored: &MeetingDamage = self.damage.insert(damage);
        Ok(stored)
    }
}

fn validate_duration(duration: f64) -> Result<()> {
    if duration.is_finite() && duration > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveDuration(duration).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::repository;
    use crate::model::{HardwareSpec, SoftwareSpec};
    use crate::service::meeting_damage::{HardwareOptions, SoftwareOptions};
    use visio_types::{Bound, Error};

    fn scenario() -> MeetingScenario {
        let payload = MeetingPayload {
            hardware: vec![HardwareSpec::new("DESKTOP")],
            software: vec![SoftwareSpec::new("SKYPE")],
            journeys: Vec::new(),
        };
        MeetingScenario::new("alice", 120.0, 4, payload).unwrap()
    }

    #[test]
    fn test_invalid_context_is_rejected() {
        let err = MeetingScenario::new("bob", 0.0, 4, MeetingPayload::default()).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::NonPositiveDuration(_))));

        let err = MeetingScenario::new("bob", f64::INFINITY, 4, MeetingPayload::default()).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::NonPositiveDuration(_))));

        for participants in [0, 1, 31] {
            let err = MeetingScenario::new("bob", 60.0, participants, MeetingPayload::default()).unwrap_err();
            assert!(matches!(err, Error::Validation(ValidationError::ParticipantsOutOfRange { .. })));
        }
        assert!(MeetingScenario::new("bob", 60.0, 2, MeetingPayload::default()).is_ok());
        assert!(MeetingScenario::new("bob", 60.0, 30, MeetingPayload::default()).is_ok());
    }

    #[test]
    fn test_resolve_payload_defaults_from_context() {
        let resolved = scenario().resolve_payload(&DamageOptions::default()).unwrap();
        assert_eq!(resolved.hardware.meeting_duration, 120.0);
        assert_eq!(resolved.hardware.bound, Bound::Upper);
        assert_eq!(resolved.software.instances_number, 4);
        assert_eq!(resolved.software.meeting_duration, 120.0);
        assert_eq!(resolved.software.bandwidth_bound, Bound::Upper);
        assert_eq!(resolved.software.network_bound, Bound::Upper);
    }

    #[test]
    fn test_resolve_payload_keeps_given_values() {
        let options = DamageOptions {
            hardware: HardwareOptions {
                meeting_duration: Some(60.0),
                bound: Some(Bound::Lower),
            },
            software: SoftwareOptions {
                instances_number: Some(7),
                bandwidth_bound: Some(Bound::Lower),
                network_bound: None,
                meeting_duration: None,
            },
        };
        let resolved = scenario().resolve_payload(&options).unwrap();
        assert_eq!(resolved.hardware.meeting_duration, 60.0);
        assert_eq!(resolved.hardware.bound, Bound::Lower);
        assert_eq!(resolved.software.instances_number, 7);
        assert_eq!(resolved.software.bandwidth_bound, Bound::Lower);
        assert_eq!(resolved.software.network_bound, Bound::Upper);
        assert_eq!(resolved.software.meeting_duration, 120.0);
    }

    #[test]
    fn test_resolve_payload_validates_overrides() {
        let mut options = DamageOptions::default();
        options.software.instances_number = Some(0);
        assert!(matches!(
            scenario().resolve_payload(&options),
            Err(Error::Validation(ValidationError::NoInstances))
        ));

        let mut options = DamageOptions::default();
        options.hardware.meeting_duration = Some(-5.0);
        assert!(matches!(
            scenario().resolve_payload(&options),
            Err(Error::Validation(ValidationError::NonPositiveDuration(_)))
        ));
    }

    #[test]
    fn test_compute_damage_stores_result() {
        let repo = repository();
        let mut scenario = scenario();
        assert!(scenario.damage().is_none());
        let options = scenario.resolve_payload(&DamageOptions::default()).unwrap();
        let total = scenario.compute_damage(&options, &repo).unwrap().total_damage();
        assert_eq!(scenario.damage().map(|d| d.total_damage()), Some(total));
        assert!(!total.is_zero());
    }

    #[test]
    fn test_request_deserializes() {
        let request: MeetingRequest = serde_json::from_str(
            r#"{
                "user": "alice",
                "meetingDuration": 120,
                "numberOfParticipants": 4,
                "payload": {"hardware": [{"name": "DESKTOP"}], "software": [{"name": "SKYPE"}]},
                "options": {"software": {"instancesNumber": 5}}
            }"#,
        )
        .unwrap();
        assert_eq!(request.options.software.instances_number, Some(5));
        let scenario = request.scenario().unwrap();
        assert_eq!(scenario.number_of_participants(), 4);
        assert_eq!(scenario.payload().hardware.len(), 1);
    }
}
