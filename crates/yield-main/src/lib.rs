
pub mod duration;
pub mod errors;
pub mod ffi;
pub mod platform;

pub use duration::{NativeDuration, UNITS_PER_MILLI};
pub use errors::DurationError;

/// Block the calling thread for roughly `millis` milliseconds.
///
/// Negative and non-finite input clamps to zero. Sub-unit fractions are
/// truncated (microseconds on POSIX, milliseconds on Windows).
pub fn sleep_main(millis: f64) {
    let duration = NativeDuration::from_millis_clamped(millis);
    log::trace!("sleep_main: {} ms -> {:?}", millis, duration);
    platform::sleep(duration);
}

/// Sleep entry point for host adapters.
///
/// A missing argument is a no-op: nothing is slept and no OS call is made.
pub fn sleep_main_opt(millis: Option<f64>) {
    match millis {
        Some(millis) => sleep_main(millis),
        None => log::trace!("sleep_main: no argument, returning"),
    }
}

/// Like [`sleep_main`], but rejects input that would otherwise be clamped.
pub fn sleep_main_checked(millis: f64) -> Result<(), DurationError> {
    let duration = NativeDuration::try_from_millis(millis)?;
    log::trace!("sleep_main_checked: {} ms -> {:?}", millis, duration);
    platform::sleep(duration);
    Ok(())
}

/// Give up the rest of the calling thread's time slice.
pub fn yield_main() {
    platform::yield_now();
}
