//! Repository adapters for the reference data

use std::path::{Path, PathBuf};

use log::info;
use visio_domain::repository::ReferenceRepository;
use visio_infra::persistence::FileReferenceRepository;
use visio_infra::{builtin_database, ReferenceDatabase};
use visio_types::Result;

use crate::config::Config;

/// Where the reference data of a run comes from
pub enum ReferenceSource {
    Builtin(&'static ReferenceDatabase),
    Directory(FileReferenceRepository),
}

impl ReferenceSource {
    pub fn repository(&self) -> &dyn ReferenceRepository {
        match self {
            ReferenceSource::Builtin(database) => *database,
            ReferenceSource::Directory(repo) => repo,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ReferenceSource::Builtin(_) => "builtin".to_string(),
            ReferenceSource::Directory(repo) => repo.dir().display().to_string(),
        }
    }
}

/// Open the reference data, preferring `database_dir` over the config
pub fn open_reference_repo(config: &Config, database_dir: Option<&Path>) -> Result<ReferenceSource> {
    let dir: Option<PathBuf> = database_dir
        .map(Path::to_path_buf)
        .or_else(|| config.database_dir.clone());

    match dir {
        Some(dir) => {
            info!("Using reference database at {}", dir.display());
            FileReferenceRepository::new(dir).map(ReferenceSource::Directory)
        }
        None => builtin_database().map(ReferenceSource::Builtin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visio_infra::builtin::{BUILTIN_HARDWARE, BUILTIN_SOFTWARE, BUILTIN_TRANSPORT};
    use visio_infra::reference_database::{HARDWARE_FILE, SOFTWARE_FILE, TRANSPORT_FILE};

    #[test]
    fn test_builtin_by_default() {
        let source = open_reference_repo(&Config::default(), None).unwrap();
        assert_eq!(source.describe(), "builtin");
        assert!(source.repository().find_hardware("DESKTOP").is_some());
    }

    #[test]
    fn test_directory_override_beats_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(HARDWARE_FILE), BUILTIN_HARDWARE).unwrap();
        std::fs::write(dir.path().join(SOFTWARE_FILE), BUILTIN_SOFTWARE).unwrap();
        std::fs::write(dir.path().join(TRANSPORT_FILE), BUILTIN_TRANSPORT).unwrap();

        let config = Config {
            database_dir: Some(PathBuf::from("/nonexistent/visio")),
            ..Default::default()
        };
        let source = open_reference_repo(&config, Some(dir.path())).unwrap();
        assert_eq!(source.describe(), dir.path().display().to_string());
        assert!(source.repository().find_software("SKYPE").is_some());

        assert!(open_reference_repo(&config, None).is_err());
    }
}
