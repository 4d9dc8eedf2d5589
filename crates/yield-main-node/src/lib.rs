//! Node-API addon exposing `sleepMain` and `yieldMain`.
//!
//! Node calls `napi_register_module_v1` once per environment that loads the
//! addon; the host module cache keeps repeated `require`s from re-running it.

mod bindings;
mod errors;
mod sys;

use std::ffi::{CStr, CString};
use std::ptr;

use errors::NapiError;
use sys::{napi_env, napi_value, NAPI_AUTO_LENGTH};

/// Export name of the sleep binding
pub const SLEEP_EXPORT: &CStr = c"sleepMain";
/// Export name of the yield binding
pub const YIELD_EXPORT: &CStr = c"yieldMain";

/// Node-API version this addon is built against
const NAPI_VERSION: i32 = 8;

type Callback = unsafe extern "C" fn(napi_env, sys::napi_callback_info) -> napi_value;

/// Module entry point looked up by Node when the `.node` file is loaded.
///
/// # Safety
/// Must only be called by Node with a live `env` and `exports`
#[no_mangle]
pub unsafe extern "C" fn napi_register_module_v1(env: napi_env, exports: napi_value) -> napi_value {
    match register(env, exports) {
        Ok(()) => {
            log::debug!("registered {:?} and {:?}", SLEEP_EXPORT, YIELD_EXPORT);
            exports
        }
        Err(e) => {
            throw(env, &e);
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "C" fn node_api_module_get_api_version_v1() -> i32 {
    NAPI_VERSION
}

unsafe fn register(env: napi_env, exports: napi_value) -> Result<(), NapiError> {
    export_function(env, exports, SLEEP_EXPORT, bindings::js_sleep_main)?;
    export_function(env, exports, YIELD_EXPORT, bindings::js_yield_main)?;
    Ok(())
}

unsafe fn export_function(
    env: napi_env,
    exports: napi_value,
    name: &CStr,
    callback: Callback,
) -> Result<(), NapiError> {
    let mut function: napi_value = ptr::null_mut();
    sys::check(
        sys::napi_create_function(
            env,
            name.as_ptr(),
            NAPI_AUTO_LENGTH,
            Some(callback),
            ptr::null_mut(),
            &mut function,
        ),
        "napi_create_function",
    )?;
    sys::check(
        sys::napi_set_named_property(env, exports, name.as_ptr(), function),
        "napi_set_named_property",
    )?;
    Ok(())
}

/// Raise a JS `Error` unless one is already pending
unsafe fn throw(env: napi_env, err: &NapiError) {
    let mut pending = false;
    if sys::napi_is_exception_pending(env, &mut pending) == sys::napi_ok && pending {
        return;
    }

    log::debug!("module registration failed: {}", err);
    let message = CString::new(format!("yield-main: {}", err)).unwrap_or_default();
    sys::napi_throw_error(env, ptr::null(), message.as_ptr());
}
