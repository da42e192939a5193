//! Infrastructure layer - reference database loaders and request files

pub mod builtin;
pub mod hardware_loader;
pub mod persistence;
mod raw_damage;
pub mod reference_database;
pub mod request_json;
pub mod software_loader;
pub mod transport_loader;

pub use builtin::builtin_database;
pub use persistence::FileReferenceRepository;
pub use reference_database::ReferenceDatabase;
pub use request_json::{load_request_from_json, parse_request};
