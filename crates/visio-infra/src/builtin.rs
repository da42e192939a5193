//! Reference database embedded in the binary

use std::sync::LazyLock;

use visio_types::{Error, Result};

use crate::reference_database::ReferenceDatabase;

pub const BUILTIN_HARDWARE: &str = include_str!("../data/hardware.toml");
pub const BUILTIN_SOFTWARE: &str = include_str!("../data/software.toml");
pub const BUILTIN_TRANSPORT: &str = include_str!("../data/transport.toml");

/// Parsed once on first use, read-only afterwards
static BUILTIN: LazyLock<std::result::Result<ReferenceDatabase, String>> = LazyLock::new(|| {
    ReferenceDatabase::load_from_str(BUILTIN_HARDWARE, BUILTIN_SOFTWARE, BUILTIN_TRANSPORT).map_err(|e| match e {
        Error::Database(msg) => msg,
        other => other.to_string(),
    })
});

/// Shared handle to the builtin reference database
pub fn builtin_database() -> Result<&'static ReferenceDatabase> {
    BUILTIN.as_ref().map_err(|msg| Error::Database(msg.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use visio_domain::repository::ReferenceRepository;

    #[test]
    fn test_builtin_loads() {
        let database = builtin_database().unwrap();
        assert_eq!(database.hardware_count(), 12);
        assert_eq!(database.software_count(), 4);
        assert_eq!(database.transport_count(), 7);
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = builtin_database().unwrap();
        let b = builtin_database().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_builtin_listings_are_sorted() {
        let database = builtin_database().unwrap();
        let names: Vec<&str> = database.all_hardware().iter().map(|h| h.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(database.all_software()[0].name, "HANGOUTS");
    }
}
