//! Whole-meeting damage aggregation

use log::debug;
use serde::{Deserialize, Serialize};
use visio_types::{Bound, Category, DamageVector, Result, ValidationError};

use crate::model::{Hardware, HardwareSpec, Journey, JourneySpec, Software, SoftwareDamageOptions, SoftwareSpec};
use crate::repository::ReferenceRepository;
use crate::service::category_damage::{CategoryDamage, ComponentDamage};

/// Equipment used in a meeting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingPayload {
    #[serde(default)]
    pub hardware: Vec<HardwareSpec>,
    #[serde(default)]
    pub software: Vec<SoftwareSpec>,
    #[serde(default, alias = "journey")]
    pub journeys: Vec<JourneySpec>,
}

/// Hardware overrides as given in a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound: Option<Bound>,
}

/// Software overrides as given in a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instances_number: Option<u32>,
    #[serde(default, alias = "bandwithBound", skip_serializing_if = "Option::is_none")]
    pub bandwidth_bound: Option<Bound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_bound: Option<Bound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_duration: Option<f64>,
}

/// Optional per-category overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageOptions {
    #[serde(default)]
    pub hardware: HardwareOptions,
    #[serde(default)]
    pub software: SoftwareOptions,
}

impl DamageOptions {
    /// Fill unset fields from `fallback`
    pub fn or(self, fallback: DamageOptions) -> DamageOptions {
        DamageOptions {
            hardware: HardwareOptions {
                meeting_duration: self.hardware.meeting_duration.or(fallback.hardware.meeting_duration),
                bound: self.hardware.bound.or(fallback.hardware.bound),
            },
            software: SoftwareOptions {
                instances_number: self.software.instances_number.or(fallback.software.instances_number),
                bandwidth_bound: self.software.bandwidth_bound.or(fallback.software.bandwidth_bound),
                network_bound: self.software.network_bound.or(fallback.software.network_bound),
                meeting_duration: self.software.meeting_duration.or(fallback.software.meeting_duration),
            },
        }
    }
}

/// Resolved options for hardware damage computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareDamageOptions {
    /// Minutes
    pub meeting_duration: f64,
    pub bound: Bound,
}

/// Fully resolved options of a damage computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamagePayload {
    pub hardware: HardwareDamageOptions,
    pub software: SoftwareDamageOptions,
}

impl DamagePayload {
    pub fn validate(&self) -> Result<()> {
        for duration in [self.hardware.meeting_duration, self.software.meeting_duration] {
            if !duration.is_finite() || duration <= 0.0 {
                return Err(ValidationError::NonPositiveDuration(duration).into());
            }
        }
        if self.software.instances_number == 0 {
            return Err(ValidationError::NoInstances.into());
        }
        Ok(())
    }
}

/// Per-category damages of a meeting
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingDamage {
    hardware: CategoryDamage,
    software: CategoryDamage,
    journey: CategoryDamage,
}

impl MeetingDamage {
    pub fn new(hardware: CategoryDamage, software: CategoryDamage, journey: CategoryDamage) -> Self {
        Self {
            hardware,
            software,
            journey,
        }
    }

    /// Resolve every payload entry, then compute the three categories
    ///
    /// Reference and validation errors are reported before any damage is
    /// computed.
    pub fn compute<R>(payload: &MeetingPayload, options: &DamagePayload, repo: &R) -> Result<Self>
    where
        R: ReferenceRepository + ?Sized,
    {
        options.validate()?;

        let hardware = payload
            .hardware
            .iter()
            .map(|spec| Hardware::from_spec(spec, repo))
            .collect::<Result<Vec<_>>>()?;
        let software = payload
            .software
            .iter()
            .map(|spec| Software::from_spec(spec, repo))
            .collect::<Result<Vec<_>>>()?;
        let journeys = payload
            .journeys
            .iter()
            .map(|spec| Journey::from_spec(spec, repo))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Computing meeting damage: {} hardware, {} software, {} journeys",
            hardware.len(),
            software.len(),
            journeys.len()
        );

        let hardware_damage = CategoryDamage::labelled(
            Category::Hardware,
            hardware
                .iter()
                .map(|h| {
                    ComponentDamage::new(
                        h.name(),
                        h.compute_damage(options.hardware.meeting_duration, options.hardware.bound),
                    )
                })
                .collect(),
        );

        let network = repo.network_intensity();
        let software_damage = CategoryDamage::labelled(
            Category::Software,
            software
                .iter()
                .map(|s| ComponentDamage::new(s.name.as_str(), s.compute_damage(&options.software, network)))
                .collect(),
        );

        let journey_damage = CategoryDamage::labelled(
            Category::Journey,
            journeys
                .iter()
                .map(|j| ComponentDamage::new(format!("{} ({})", j.passenger(), j.mean().name), j.damage()))
                .collect(),
        );

        Ok(Self::new(hardware_damage, software_damage, journey_damage))
    }

    pub fn hardware(&self) -> &CategoryDamage {
        &self.hardware
    }

    pub fn software(&self) -> &CategoryDamage {
        &self.software
    }

    pub fn journey(&self) -> &CategoryDamage {
        &self.journey
    }

    pub fn category(&self, category: Category) -> &CategoryDamage {
        match category {
            Category::Hardware => &self.hardware,
            Category::Software => &self.software,
            Category::Journey => &self.journey,
        }
    }

    pub fn total_damage(&self) -> DamageVector {
        self.hardware
            .total_damage()
            .add(self.software.total_damage())
            .add(self.journey.total_damage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::repository;
    use visio_types::Error;

    fn options(meeting_duration: f64) -> DamagePayload {
        DamagePayload {
            hardware: HardwareDamageOptions {
                meeting_duration,
                bound: Bound::Upper,
            },
            software: SoftwareDamageOptions {
                instances_number: 5,
                bandwidth_bound: Bound::Upper,
                network_bound: Bound::Upper,
                meeting_duration,
            },
        }
    }

    fn payload() -> MeetingPayload {
        MeetingPayload {
            hardware: vec![
                HardwareSpec::new("DESKTOP"),
                HardwareSpec::new("DESKTOP").with_share_for_visio(0.5),
                HardwareSpec::new("TV").with_component(HardwareSpec::new("TV_SCREEN").with_size(42.0)),
            ],
            software: vec![SoftwareSpec::new("SKYPE")],
            journeys: vec![
                JourneySpec::new("P1", "CAR_ELECTRIC_ONE_KM", 120.0, 4),
                JourneySpec::new("P2", "BUS_LARGE_DISTANCE_ONE_PERSON_KM", 40.0, 1),
            ],
        }
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        let damage = MeetingDamage::compute(&payload(), &options(120.0), &repository()).unwrap();
        let expected = damage
            .hardware()
            .total_damage()
            .add(damage.software().total_damage())
            .add(damage.journey().total_damage());
        assert_eq!(damage.total_damage(), expected);
        assert_eq!(damage.hardware().len(), 3);
        assert_eq!(damage.software().len(), 1);
        assert_eq!(damage.journey().len(), 2);
        assert_eq!(damage.journey().components()[0].label, "P1 (CAR_ELECTRIC_ONE_KM)");
    }

    #[test]
    fn test_category_matches_direct_computation() {
        let repo = repository();
        let damage = MeetingDamage::compute(&payload(), &options(120.0), &repo).unwrap();
        let desktop = Hardware::from_spec(&HardwareSpec::new("DESKTOP"), &repo).unwrap();
        assert_eq!(
            damage.hardware().components()[0].damage,
            desktop.compute_damage(120.0, Bound::Upper)
        );
        let journey = Journey::from_spec(&JourneySpec::new("P2", "BUS_LARGE_DISTANCE_ONE_PERSON_KM", 40.0, 1), &repo)
            .unwrap();
        assert_eq!(damage.journey().components()[1].damage, journey.damage());
    }

    #[test]
    fn test_empty_payload_is_zero() {
        let damage = MeetingDamage::compute(&MeetingPayload::default(), &options(60.0), &repository()).unwrap();
        assert!(damage.total_damage().is_zero());
        assert!(damage.hardware().is_empty());
    }

    #[test]
    fn test_unknown_reference_fails_before_arithmetic() {
        let mut payload = payload();
        payload.journeys.push(JourneySpec::new("P3", "ROCKET", 10.0, 1));
        let err = MeetingDamage::compute(&payload, &options(60.0), &repository()).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let repo = repository();
        let err = MeetingDamage::compute(&payload(), &options(0.0), &repo).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::NonPositiveDuration(_))));

        let mut no_instances = options(60.0);
        no_instances.software.instances_number = 0;
        let err = MeetingDamage::compute(&payload(), &no_instances, &repo).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::NoInstances)));
    }

    #[test]
    fn test_hardware_and_software_scale_with_duration() {
        let repo = repository();
        let mut payload = payload();
        payload.journeys.clear();
        let simple = MeetingDamage::compute(&payload, &options(60.0), &repo).unwrap();
        let double = MeetingDamage::compute(&payload, &options(120.0), &repo).unwrap();
        for category in visio_types::DamageCategory::ALL {
            let expected = simple.total_damage().get(category) * 2.0;
            assert!((double.total_damage().get(category) - expected).abs() <= expected.abs() * 1e-12);
        }
    }

    #[test]
    fn test_payload_accepts_journey_alias_and_bandwith_typo() {
        let payload: MeetingPayload = serde_json::from_str(
            r#"{"hardware": [{"name": "DESKTOP"}], "journey": [{"passenger": "P1", "mean": "CAR_ELECTRIC_ONE_KM", "distance": 10, "numberOfPeople": 1}]}"#,
        )
        .unwrap();
        assert_eq!(payload.journeys.len(), 1);
        assert!(payload.software.is_empty());

        let options: DamageOptions =
            serde_json::from_str(r#"{"software": {"bandwithBound": "LOWER", "instancesNumber": 3}}"#).unwrap();
        assert_eq!(options.software.bandwidth_bound, Some(Bound::Lower));
        assert_eq!(options.software.instances_number, Some(3));
        assert_eq!(options.hardware, HardwareOptions::default());
    }

    #[test]
    fn test_options_or_prefers_self() {
        let cli = DamageOptions {
            hardware: HardwareOptions {
                meeting_duration: Some(30.0),
                bound: None,
            },
            ..Default::default()
        };
        let request = DamageOptions {
            hardware: HardwareOptions {
                meeting_duration: Some(90.0),
                bound: Some(Bound::Lower),
            },
            ..Default::default()
        };
        let merged = cli.or(request);
        assert_eq!(merged.hardware.meeting_duration, Some(30.0));
        assert_eq!(merged.hardware.bound, Some(Bound::Lower));
        assert_eq!(merged.software.instances_number, None);
    }
}
