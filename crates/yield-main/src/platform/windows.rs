use std::thread;

use crate::duration::NativeDuration;

pub fn sleep(duration: NativeDuration) {
    thread::sleep(duration.as_duration());
}

pub fn yield_now() {
    thread::yield_now();
}
