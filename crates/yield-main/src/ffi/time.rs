/// Sleep for the given number of milliseconds.
/// Negative and non-finite values sleep for zero.
#[no_mangle]
pub extern "C" fn yield_main_sleep(millis: f64) {
    crate::sleep_main(millis);
}

/// Sleep for the given number of milliseconds, rejecting bad input.
/// Returns 0 after sleeping, 1 (without sleeping) if `millis` is negative,
/// non-finite or too large.
#[no_mangle]
pub extern "C" fn yield_main_sleep_checked(millis: f64) -> i32 {
    match crate::sleep_main_checked(millis) {
        Ok(()) => 0,
        Err(e) => {
            log::debug!("yield_main_sleep_checked: {}", e);
            1
        }
    }
}

/// Yield the rest of the calling thread's time slice to the OS scheduler
#[no_mangle]
pub extern "C" fn yield_main_yield() {
    crate::yield_main();
}
