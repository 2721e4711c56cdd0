//! Error types for schedule construction

use thiserror::Error;

/// Reasons a set of slot lengths and capacities is not a valid schedule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Length and capacity lists differ in size
    #[error("Slot lengths ({lengths}) and capacities ({capacities}) differ in count")]
    LengthMismatch { lengths: usize, capacities: usize },

    /// A slot has no duration
    #[error("Slot {0} has zero length")]
    ZeroLength(usize),

    /// Explicit slots run past midnight
    #[error("Slots add up to {0} minutes, more than a day")]
    ExceedsDay(u64),
}

/// Result type for schedule construction
pub type Result<T> = std::result::Result<T, ScheduleError>;
