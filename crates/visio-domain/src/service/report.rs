//! Meeting damage report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use visio_types::{Category, DamageCategory, DamageVector};

use crate::service::meeting_scenario::MeetingScenario;

/// Damage of one component, tagged with its category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentLine {
    pub category: Category,
    pub label: String,
    pub damage: DamageVector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingReport {
    pub user: String,
    pub meeting_duration: f64,
    pub number_of_participants: u32,
    pub generated_at: DateTime<Utc>,
    pub hardware_damage: DamageVector,
    pub software_damage: DamageVector,
    pub journey_damage: DamageVector,
    pub total_damage: DamageVector,
    pub components: Vec<ComponentLine>,
}

impl MeetingReport {
    /// `None` until the scenario damage has been computed
    pub fn from_scenario(scenario: &MeetingScenario) -> Option<Self> {
        let damage = scenario.damage()?;

        let components = Category::ALL
            .iter()
            .flat_map(move |category| {
                damage
                    .category(*category)
                    .components()
                    .iter()
                    .map(move |c| ComponentLine {
                        category: *category,
                        label: c.label.clone(),
                        damage: c.damage,
                    })
            })
            .collect();

        Some(Self {
            user: scenario.user().to_string(),
            meeting_duration: scenario.meeting_duration(),
            number_of_participants: scenario.number_of_participants(),
            generated_at: Utc::now(),
            hardware_damage: damage.hardware().total_damage(),
            software_damage: damage.software().total_damage(),
            journey_damage: damage.journey().total_damage(),
            total_damage: damage.total_damage(),
            components,
        })
    }

    pub fn category_damage(&self, category: Category) -> DamageVector {
        match category {
            Category::Hardware => self.hardware_damage,
            Category::Software => self.software_damage,
            Category::Journey => self.journey_damage,
        }
    }
}

pub fn generate_damage_report(report: &MeetingReport) -> String {
    let width = 96;
    let mut out = String::new();
    out.push_str(&"=".repeat(width));
    out.push('\n');
    out.push_str("                     Videoconference Damage Report\n");
    out.push_str(&"=".repeat(width));
    out.push_str("\n\n");

    out.push_str("[Meeting]\n");
    if !report.user.is_empty() {
        out.push_str(&format!("  User:                 {}\n", report.user));
    }
    out.push_str(&format!("  Duration:             {} min\n", report.meeting_duration));
    out.push_str(&format!("  Participants:         {}\n", report.number_of_participants));
    out.push_str(&format!(
        "  Generated:            {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out.push_str("[Summary]\n");
    push_header(&mut out, "Category", width);
    for category in Category::ALL {
        push_row(&mut out, category.label(), &report.category_damage(category));
    }
    out.push_str(&"-".repeat(width));
    out.push('\n');
    push_row(&mut out, "TOTAL", &report.total_damage);
    out.push('\n');

    if report.components.is_empty() {
        out.push_str("[No Components]\n\n");
    } else {
        out.push_str("[Components]\n");
        push_header(&mut out, "Component", width);
        for line in &report.components {
            let label = format!("{:<8} {}", line.category.label(), line.label);
            push_row(&mut out, &truncate_str(&label, 39), &line.damage);
        }
        out.push('\n');
    }

    out.push_str("Units: ");
    let units: Vec<String> = DamageCategory::ALL
        .iter()
        .map(|c| format!("{} [{}]", c.label(), c.unit()))
        .collect();
    out.push_str(&units.join(", "));
    out.push('\n');
    out.push_str(&"=".repeat(width));
    out.push('\n');
    out
}

fn push_header(out: &mut String, first: &str, width: usize) {
    out.push_str(&"-".repeat(width));
    out.push('\n');
    out.push_str(&format!(
        "{:<40}{:>14}{:>14}{:>14}{:>14}\n",
        first, "Human Health", "Ecosystem", "Climate", "Resources"
    ));
    out.push_str(&"-".repeat(width));
    out.push('\n');
}

fn push_row(out: &mut String, label: &str, damage: &DamageVector) {
    out.push_str(&format!(
        "{:<40}{:>14.4e}{:>14.4e}{:>14.4e}{:>14.4e}\n",
        label, damage.human_health, damage.ecosystem_quality, damage.climate_change, damage.resources
    ));
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
