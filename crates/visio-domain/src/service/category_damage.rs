//! Damage of one meeting category

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use visio_types::{Category, DamageVector};

/// Damage of one named component of a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDamage {
    pub label: String,
    pub damage: DamageVector,
}

impl ComponentDamage {
    pub fn new(label: impl Into<String>, damage: DamageVector) -> Self {
        Self {
            label: label.into(),
            damage,
        }
    }
}

/// Ordered component damages of a category with a cached total
#[derive(Debug, Clone)]
pub struct CategoryDamage {
    category: Category,
    components: Vec<ComponentDamage>,
    total: OnceLock<DamageVector>,
}

impl CategoryDamage {
    /// Build from bare damages, labelled by position
    pub fn new(category: Category, damages: Vec<DamageVector>) -> Self {
        let components = damages
            .into_iter()
            .enumerate()
            .map(|(i, damage)| ComponentDamage::new(format!("{} #{}", category, i + 1), damage))
            .collect();
        Self::labelled(category, components)
    }

    pub fn labelled(category: Category, components: Vec<ComponentDamage>) -> Self {
        Self {
            category,
            components,
            total: OnceLock::new(),
        }
    }

    pub fn empty(category: Category) -> Self {
        Self::labelled(category, Vec::new())
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn components(&self) -> &[ComponentDamage] {
        &self.components
    }

    pub fn damages(&self) -> impl Iterator<Item = &DamageVector> + '_ {
        self.components.iter().map(|c| &c.damage)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Left-fold sum of the component damages, computed once
    pub fn total_damage(&self) -> DamageVector {
        *self.total.get_or_init(|| {
            self.components
                .iter()
                .fold(DamageVector::ZERO, |acc, c| acc.add(c.damage))
        })
    }
}

impl PartialEq for CategoryDamage {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.components == other.components
    }
}
