//! Damage values as written in the TOML databases

use serde::Deserialize;
use visio_types::{DamageRange, DamageVector};

/// Either a `{ lower, upper }` pair or a single vector used for both bounds
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawDamage {
    Range { lower: DamageVector, upper: DamageVector },
    Fixed(DamageVector),
}

impl From<RawDamage> for DamageRange {
    fn from(raw: RawDamage) -> Self {
        match raw {
            RawDamage::Range { lower, upper } => DamageRange::new(lower, upper),
            RawDamage::Fixed(value) => DamageRange::fixed(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        value: RawDamage,
    }

    fn parse(toml_content: &str) -> DamageRange {
        let holder: Holder = toml::from_str(toml_content).unwrap();
        holder.value.into()
    }

    #[test]
    fn test_fixed_vector() {
        let range = parse("value = { climateChange = 2.5, resources = 10.0 }");
        assert!(range.is_fixed());
        assert_eq!(range.upper, DamageVector::new(0.0, 0.0, 2.5, 10.0));
    }

    #[test]
    fn test_range() {
        let range = parse(
            r#"
value.lower = { climateChange = 1.0 }
value.upper = { climateChange = 3.0 }
"#,
        );
        assert_eq!(range.lower.climate_change, 1.0);
        assert_eq!(range.upper.climate_change, 3.0);
    }

    #[test]
    fn test_misspelled_field_is_rejected() {
        let result: Result<Holder, _> = toml::from_str("value = { climate = 2.5 }");
        assert!(result.is_err());
    }
}
