//! Domain services

pub mod category_damage;
pub mod meeting_damage;
pub mod meeting_scenario;
pub mod report;

pub use category_damage::{CategoryDamage, ComponentDamage};
pub use meeting_damage::{
    DamageOptions, DamagePayload, HardwareDamageOptions, HardwareOptions, MeetingDamage, MeetingPayload,
    SoftwareOptions,
};
pub use meeting_scenario::{MeetingRequest, MeetingScenario};
pub use report::{generate_damage_report, ComponentLine, MeetingReport};
