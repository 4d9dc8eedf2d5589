use thiserror::Error;

/// Reasons a millisecond value cannot become a sleep duration
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DurationError {
    #[error("duration must not be negative (got {0:?} ms)")]
    Negative(f64),
    #[error("duration must be a finite number (got {0:?} ms)")]
    NotFinite(f64),
    #[error("duration of {0:?} ms does not fit the platform sleep unit")]
    OutOfRange(f64),
}
