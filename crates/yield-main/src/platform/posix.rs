use crate::duration::NativeDuration;

/// Largest argument POSIX requires `usleep` to accept
pub(crate) const USLEEP_MAX_MICROS: u64 = 999_999;

/// Sleep via `usleep`, one chunk at a time for long durations.
///
/// A zero duration still makes one `usleep(0)` call. EINTR is ignored.
pub fn sleep(duration: NativeDuration) {
    let mut remaining = duration.as_units();
    loop {
        let chunk = remaining.min(USLEEP_MAX_MICROS);
        unsafe {
            libc::usleep(chunk as libc::useconds_t);
        }
        remaining -= chunk;
        if remaining == 0 {
            break;
        }
    }
}

/// Yield via `sched_yield`
pub fn yield_now() {
    unsafe {
        libc::sched_yield();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_sleep_spans_multiple_chunks() {
        // Just over one chunk, so the loop has to run twice
        let start = Instant::now();
        sleep(NativeDuration::from_units(USLEEP_MAX_MICROS + 5_000));
        assert!(start.elapsed() >= Duration::from_micros(USLEEP_MAX_MICROS + 5_000) * 9 / 10);
    }
}
