//! Damage vector arithmetic

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

use crate::Bound;

/// One of the four endpoint categories a damage is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DamageCategory {
    HumanHealth,
    EcosystemQuality,
    ClimateChange,
    Resources,
}

impl DamageCategory {
    /// All categories, in field order
    pub const ALL: [DamageCategory; 4] = [
        DamageCategory::HumanHealth,
        DamageCategory::EcosystemQuality,
        DamageCategory::ClimateChange,
        DamageCategory::Resources,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DamageCategory::HumanHealth => "Human Health",
            DamageCategory::EcosystemQuality => "Ecosystem Quality",
            DamageCategory::ClimateChange => "Climate Change",
            DamageCategory::Resources => "Resources",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            DamageCategory::HumanHealth => "DALY",
            DamageCategory::EcosystemQuality => "PDF*m2*y",
            DamageCategory::ClimateChange => "kg CO2 eq",
            DamageCategory::Resources => "MJ primary",
        }
    }
}

/// Four-dimensional impact quantity
///
/// Missing fields deserialize to zero, so an absent source always yields
/// the zero vector rather than a partial one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DamageVector {
    pub human_health: f64,
    pub ecosystem_quality: f64,
    pub climate_change: f64,
    pub resources: f64,
}

impl DamageVector {
    pub const ZERO: DamageVector = DamageVector {
        human_health: 0.0,
        ecosystem_quality: 0.0,
        climate_change: 0.0,
        resources: 0.0,
    };

    pub fn new(human_health: f64, ecosystem_quality: f64, climate_change: f64, resources: f64) -> Self {
        Self {
            human_health,
            ecosystem_quality,
            climate_change,
            resources,
        }
    }

    /// Componentwise sum
    pub fn add(self, other: DamageVector) -> DamageVector {
        DamageVector {
            human_health: self.human_health + other.human_health,
            ecosystem_quality: self.ecosystem_quality + other.ecosystem_quality,
            climate_change: self.climate_change + other.climate_change,
            resources: self.resources + other.resources,
        }
    }

    /// Apply `f` to each of the four fields
    pub fn transform<F>(&self, f: F) -> DamageVector
    where
        F: Fn(DamageCategory, f64) -> f64,
    {
        DamageVector {
            human_health: f(DamageCategory::HumanHealth, self.human_health),
            ecosystem_quality: f(DamageCategory::EcosystemQuality, self.ecosystem_quality),
            climate_change: f(DamageCategory::ClimateChange, self.climate_change),
            resources: f(DamageCategory::Resources, self.resources),
        }
    }

    pub fn scale(&self, factor: f64) -> DamageVector {
        self.transform(|_, value| value * factor)
    }

    pub fn get(&self, category: DamageCategory) -> f64 {
        match category {
            DamageCategory::HumanHealth => self.human_health,
            DamageCategory::EcosystemQuality => self.ecosystem_quality,
            DamageCategory::ClimateChange => self.climate_change,
            DamageCategory::Resources => self.resources,
        }
    }

    pub fn is_zero(&self) -> bool {
        DamageCategory::ALL.iter().all(|c| self.get(*c) == 0.0)
    }
}

impl Add for DamageVector {
    type Output = DamageVector;

    fn add(self, rhs: DamageVector) -> DamageVector {
        DamageVector::add(self, rhs)
    }
}

impl Sum for DamageVector {
    fn sum<I: Iterator<Item = DamageVector>>(iter: I) -> Self {
        iter.fold(DamageVector::ZERO, |acc, damage| acc.add(damage))
    }
}

impl<'a> Sum<&'a DamageVector> for DamageVector {
    fn sum<I: Iterator<Item = &'a DamageVector>>(iter: I) -> Self {
        iter.fold(DamageVector::ZERO, |acc, damage| acc.add(*damage))
    }
}

/// Lower/upper pair of damage vectors
///
/// Reference values given as a single vector are stored with both bounds equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageRange {
    pub lower: DamageVector,
    pub upper: DamageVector,
}

impl DamageRange {
    pub fn new(lower: DamageVector, upper: DamageVector) -> Self {
        Self { lower, upper }
    }

    pub fn fixed(value: DamageVector) -> Self {
        Self {
            lower: value,
            upper: value,
        }
    }

    pub fn select(&self, bound: Bound) -> DamageVector {
        match bound {
            Bound::Lower => self.lower,
            Bound::Upper => self.upper,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.lower == self.upper
    }
}
