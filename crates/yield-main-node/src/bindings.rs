use std::ptr;

use crate::sys::{napi_callback_info, napi_env, napi_get_cb_info, napi_get_value_double, napi_ok, napi_value};

/// `sleepMain(milliseconds)`: blocks the calling thread
///
/// # Safety
/// Must only be called by Node with a live `env` and `info`
pub unsafe extern "C" fn js_sleep_main(env: napi_env, info: napi_callback_info) -> napi_value {
    yield_main::sleep_main_opt(sleep_argument(env, info));

    // NULL reads as `undefined` on the JS side
    ptr::null_mut()
}

/// `yieldMain()`: hands the rest of the time slice back to the OS
///
/// # Safety
/// Must only be called by Node
pub unsafe extern "C" fn js_yield_main(_env: napi_env, _info: napi_callback_info) -> napi_value {
    yield_main::yield_main();
    ptr::null_mut()
}

/// Pull the first argument as milliseconds.
///
/// `None` when the caller passed nothing. An argument that is not a number
/// reads as zero milliseconds.
unsafe fn sleep_argument(env: napi_env, info: napi_callback_info) -> Option<f64> {
    let mut argc: usize = 1;
    let mut argv: [napi_value; 1] = [ptr::null_mut()];

    let status = napi_get_cb_info(
        env,
        info,
        &mut argc,
        argv.as_mut_ptr(),
        ptr::null_mut(),
        ptr::null_mut(),
    );
    if status != napi_ok || argc < 1 {
        return None;
    }

    let mut millis = 0.0;
    if napi_get_value_double(env, argv[0], &mut millis) != napi_ok {
        log::trace!("sleepMain: argument is not a number, sleeping 0 ms");
    }
    Some(millis)
}
