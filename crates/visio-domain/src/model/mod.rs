//! Domain models

pub mod hardware;
pub mod journey;
pub mod record;
pub mod software;

pub use hardware::{Hardware, HardwareNode, HardwareSpec};
pub use journey::{Journey, JourneySpec, TransportationMean};
pub use record::{HardwareRecord, LeafProfile, RecordBody};
pub use software::{BandwidthRange, Software, SoftwareDamageOptions, SoftwareSpec};
