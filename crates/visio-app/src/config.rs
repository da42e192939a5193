//! Configuration management for visio-damage
//!
//! Config stored at: ~/.config/visio-damage/config.json

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use visio_domain::service::{DamageOptions, HardwareOptions, SoftwareOptions};
use visio_types::{Bound, ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding hardware.toml, software.toml and transport.toml
    ///
    /// The embedded database is used when unset.
    #[serde(default)]
    pub database_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Default bound for hardware damage
    #[serde(default)]
    pub hardware_bound: Option<Bound>,

    /// Default bound for software bandwidth
    #[serde(default)]
    pub bandwidth_bound: Option<Bound>,

    /// Default bound for network intensity
    #[serde(default)]
    pub network_bound: Option<Bound>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("visio-damage");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Bound defaults as damage options, below request options in precedence
    pub fn damage_defaults(&self) -> DamageOptions {
        DamageOptions {
            hardware: HardwareOptions {
                meeting_duration: None,
                bound: self.hardware_bound,
            },
            software: SoftwareOptions {
                instances_number: None,
                bandwidth_bound: self.bandwidth_bound,
                network_bound: self.network_bound,
                meeting_duration: None,
            },
        }
    }
}

fn bound_or_default(bound: Option<Bound>) -> String {
    bound
        .map(|b| b.to_string())
        .unwrap_or_else(|| "(request or UPPER)".to_string())
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Visio Damage Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Database dir:    {}",
            self.database_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(builtin)".to_string())
        )?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(f, "Hardware bound:  {}", bound_or_default(self.hardware_bound))?;
        writeln!(f, "Bandwidth bound: {}", bound_or_default(self.bandwidth_bound))?;
        writeln!(f, "Network bound:   {}", bound_or_default(self.network_bound))?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visio_types::Error;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            database_dir: Some(PathBuf::from("/srv/visio")),
            output_format: OutputFormat::Json,
            hardware_bound: Some(Bound::Lower),
            bandwidth_bound: None,
            network_bound: Some(Bound::Upper),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"network_bound": "LOWER"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.network_bound, Some(Bound::Lower));
        assert_eq!(config.database_dir, None);
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_damage_defaults_only_set_bounds() {
        let config = Config {
            hardware_bound: Some(Bound::Lower),
            ..Default::default()
        };
        let defaults = config.damage_defaults();
        assert_eq!(defaults.hardware.bound, Some(Bound::Lower));
        assert_eq!(defaults.hardware.meeting_duration, None);
        assert_eq!(defaults.software.instances_number, None);
        assert_eq!(defaults.software.bandwidth_bound, None);
    }

    #[test]
    fn test_display() {
        let text = Config::default().to_string();
        assert!(text.contains("Database dir:    (builtin)"));
        assert!(text.contains("Output format:   table"));
    }
}
