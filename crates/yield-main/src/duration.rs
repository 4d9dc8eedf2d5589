use std::time::Duration;

use crate::errors::DurationError;

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        /// Windows sleeps with millisecond granularity
        pub const UNITS_PER_MILLI: u64 = 1;
    } else {
        /// POSIX `usleep` takes microseconds
        pub const UNITS_PER_MILLI: u64 = 1_000;
    }
}

/// A sleep length counted in the platform's native unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NativeDuration(u64);

impl NativeDuration {
    pub const ZERO: NativeDuration = NativeDuration(0);

    pub const fn from_units(units: u64) -> Self {
        NativeDuration(units)
    }

    /// Convert milliseconds, truncating to whole platform units.
    ///
    /// Negative, NaN and infinite values become [`NativeDuration::ZERO`].
    /// Values too large for `u64` saturate.
    pub fn from_millis_clamped(millis: f64) -> Self {
        if !millis.is_finite() || millis < 0.0 {
            log::debug!("clamping sleep duration of {} ms to zero", millis);
            return Self::ZERO;
        }

        // Float-to-int `as` truncates and saturates at u64::MAX
        NativeDuration((millis * UNITS_PER_MILLI as f64) as u64)
    }

    /// Convert milliseconds, refusing anything `from_millis_clamped` would
    /// have to clamp or saturate.
    pub fn try_from_millis(millis: f64) -> Result<Self, DurationError> {
        if !millis.is_finite() {
            return Err(DurationError::NotFinite(millis));
        }
        if millis < 0.0 {
            return Err(DurationError::Negative(millis));
        }

        let units = millis * UNITS_PER_MILLI as f64;
        if units >= u64::MAX as f64 {
            return Err(DurationError::OutOfRange(millis));
        }

        Ok(NativeDuration(units as u64))
    }

    pub fn as_units(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn as_duration(self) -> Duration {
        cfg_if::cfg_if! {
            if #[cfg(windows)] {
                Duration::from_millis(self.0)
            } else {
                Duration::from_micros(self.0)
            }
        }
    }
}

impl From<NativeDuration> for Duration {
    fn from(duration: NativeDuration) -> Self {
        duration.as_duration()
    }
}
