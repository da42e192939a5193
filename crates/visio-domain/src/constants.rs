//! Time and data-volume conversion constants

pub const MINUTES_IN_HOUR: f64 = 60.0;
pub const HOURS_IN_DAY: f64 = 24.0;

/// Working days per year used to turn a lifetime into usage hours
pub const WORKING_DAYS_PER_YEAR: f64 = 230.0;

pub const SECONDS_IN_MINUTE: f64 = 60.0;
pub const BITS_PER_KILOBIT: f64 = 1000.0;
pub const BITS_PER_BYTE: f64 = 8.0;
pub const BYTES_PER_GIGABYTE: f64 = 1.0e9;

/// Participant limits of a meeting scenario
pub const MIN_PARTICIPANTS: u32 = 2;
pub const MAX_PARTICIPANTS: u32 = 30;

/// Deepest composite nesting accepted when building a hardware tree
pub const MAX_COMPOSITE_DEPTH: usize = 16;
