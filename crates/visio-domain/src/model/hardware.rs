//! Hardware damage model
//!
//! A hardware is either a leaf carrying raw damage data, or a composite
//! owning an ordered list of child hardware. Composite damage is always the
//! sum of the children's damage.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use visio_types::{
    Bound, DamageKind, DamageVector, Error, ReferenceKind, Result, ValidationError,
};

use crate::constants::{MAX_COMPOSITE_DEPTH, MINUTES_IN_HOUR};
use crate::model::record::{HardwareRecord, LeafProfile, RecordBody};
use crate::repository::ReferenceRepository;

/// Hardware entry of a meeting payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_for_visio: Option<f64>,
    /// Overrides for sub-components, matched by name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<HardwareSpec>,
}

impl HardwareSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_share_for_visio(mut self, share: f64) -> Self {
        self.share_for_visio = Some(share);
        self
    }

    pub fn with_component(mut self, component: HardwareSpec) -> Self {
        self.components.push(component);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HardwareNode {
    Leaf {
        profile: LeafProfile,
        is_size_dependent: bool,
    },
    Composite(Vec<Hardware>),
}

/// A resolved physical device or device cluster
#[derive(Debug, Clone, PartialEq)]
pub struct Hardware {
    name: String,
    size: f64,
    share_for_visio: f64,
    node: HardwareNode,
}

impl Hardware {
    /// Resolve a payload entry against the reference data
    pub fn from_spec<R>(spec: &HardwareSpec, repo: &R) -> Result<Self>
    where
        R: ReferenceRepository + ?Sized,
    {
        Self::build(spec, None, repo, 0)
    }

    fn build<R>(spec: &HardwareSpec, inherited_share: Option<f64>, repo: &R, depth: usize) -> Result<Self>
    where
        R: ReferenceRepository + ?Sized,
    {
        if depth > MAX_COMPOSITE_DEPTH {
            return Err(Error::Database(format!(
                "composite nesting deeper than {} levels at {}",
                MAX_COMPOSITE_DEPTH, spec.name
            )));
        }

        let record = repo
            .find_hardware(&spec.name)
            .ok_or_else(|| Error::not_found(ReferenceKind::Hardware, &spec.name))?;
        let share_for_visio = resolve_share(&record.name, spec.share_for_visio.or(inherited_share))?;
        let size = resolve_size(record, spec.size)?;

        let node = match &record.body {
            RecordBody::Leaf(profile) => HardwareNode::Leaf {
                profile: profile.clone(),
                is_size_dependent: record.is_size_dependent,
            },
            RecordBody::Composite(children) => {
                debug!(
                    "Resolving composite hardware {} ({} components)",
                    record.name,
                    children.len()
                );
                let mut used = vec![false; spec.components.len()];
                let mut built = Vec::with_capacity(children.len());
                for child in children {
                    let child_hardware = match take_override(&spec.components, &mut used, child) {
                        Some(child_spec) => Self::build(child_spec, Some(share_for_visio), repo, depth + 1)?,
                        None => Self::build(&HardwareSpec::new(child.as_str()), Some(share_for_visio), repo, depth + 1)?,
                    };
                    built.push(child_hardware);
                }
                for (component, _) in spec.components.iter().zip(&used).filter(|(_, used)| !**used) {
                    warn!(
                        "Component override {} does not match any component of {}",
                        component.name, record.name
                    );
                }
                HardwareNode::Composite(built)
            }
        };

        Ok(Self {
            name: record.name.clone(),
            size,
            share_for_visio,
            node,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn share_for_visio(&self) -> f64 {
        self.share_for_visio
    }

    pub fn node(&self) -> &HardwareNode {
        &self.node
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.node, HardwareNode::Composite(_))
    }

    pub fn is_size_dependent(&self) -> bool {
        matches!(
            self.node,
            HardwareNode::Leaf {
                is_size_dependent: true,
                ..
            }
        )
    }

    /// Child hardware, empty for a leaf
    pub fn components(&self) -> &[Hardware] {
        match &self.node {
            HardwareNode::Composite(children) => children,
            HardwareNode::Leaf { .. } => &[],
        }
    }

    /// Total usage hours the raw value of `kind` is spread over
    ///
    /// Returns `None` for a composite, which has no lifetime of its own.
    pub fn compute_time(&self, kind: DamageKind) -> Option<f64> {
        match &self.node {
            HardwareNode::Leaf { profile, .. } => Some(profile.compute_time(kind)),
            HardwareNode::Composite(_) => None,
        }
    }

    /// Raw reference value for `kind`, or `None` when the record has none
    pub fn get_typed_damage(&self, kind: DamageKind, bound: Bound) -> Option<DamageVector> {
        match &self.node {
            HardwareNode::Leaf { profile, .. } => profile
                .damage_field(kind.field())
                .map(|range| range.select(bound)),
            HardwareNode::Composite(_) => None,
        }
    }

    /// Damage of `kind` attributable to a meeting of `meeting_duration` minutes
    pub fn compute_typed_damage(&self, kind: DamageKind, meeting_duration: f64, bound: Bound) -> DamageVector {
        let profile = match &self.node {
            HardwareNode::Composite(children) => {
                return children
                    .iter()
                    .map(|child| child.compute_typed_damage(kind, meeting_duration, bound))
                    .sum();
            }
            HardwareNode::Leaf { profile, .. } => profile,
        };

        let Some(raw) = self.get_typed_damage(kind, bound) else {
            return DamageVector::ZERO;
        };

        let scale = if self.is_size_dependent() {
            self.share_for_visio * self.size
        } else {
            self.share_for_visio
        };
        let hours = meeting_duration / MINUTES_IN_HOUR;

        if kind.is_embodied() {
            let time = profile.compute_time(kind);
            raw.transform(|_, value| value * scale / time * hours)
        } else {
            raw.transform(|_, value| value * scale * hours)
        }
    }

    /// Sum of the four damage kinds
    pub fn compute_damage(&self, meeting_duration: f64, bound: Bound) -> DamageVector {
        DamageKind::ALL
            .iter()
            .map(|kind| self.compute_typed_damage(*kind, meeting_duration, bound))
            .sum()
    }
}

fn take_override<'a>(overrides: &'a [HardwareSpec], used: &mut [bool], name: &str) -> Option<&'a HardwareSpec> {
    let index = overrides
        .iter()
        .enumerate()
        .position(|(i, spec)| !used[i] && spec.name == name)?;
    used[index] = true;
    Some(&overrides[index])
}

fn resolve_share(name: &str, share: Option<f64>) -> Result<f64> {
    match share {
        None => Ok(1.0),
        Some(share) if share.is_finite() && (0.0..=1.0).contains(&share) => Ok(share),
        Some(share) => Err(ValidationError::ShareOutOfRange {
            name: name.to_string(),
            share,
        }
        .into()),
    }
}

fn resolve_size(record: &HardwareRecord, size: Option<f64>) -> Result<f64> {
    match size.or(record.default_size) {
        Some(size) if size.is_finite() && size > 0.0 => Ok(size),
        Some(size) => Err(ValidationError::NonPositiveSize {
            name: record.name.clone(),
            size,
        }
        .into()),
        None if record.is_size_dependent => Err(ValidationError::MissingSize(record.name.clone()).into()),
        None => Ok(1.0),
    }
}
