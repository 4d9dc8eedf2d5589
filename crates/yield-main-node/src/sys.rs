#![allow(non_camel_case_types, non_upper_case_globals)]

use std::os::raw::{c_char, c_int, c_void};

use crate::errors::NapiError;

#[repr(C)]
pub struct napi_env__ {
    _private: [u8; 0],
}

#[repr(C)]
pub struct napi_value__ {
    _private: [u8; 0],
}

#[repr(C)]
pub struct napi_callback_info__ {
    _private: [u8; 0],
}

pub type napi_env = *mut napi_env__;
pub type napi_value = *mut napi_value__;
pub type napi_callback_info = *mut napi_callback_info__;
pub type napi_status = c_int;
pub type napi_callback =
    Option<unsafe extern "C" fn(env: napi_env, info: napi_callback_info) -> napi_value>;

pub const napi_ok: napi_status = 0;

/// Tells N-API that a name argument is NUL-terminated
pub const NAPI_AUTO_LENGTH: usize = usize::MAX;

// Node-API C declarations (js_native_api.h)
extern "C" {
    /// Read the arguments of the current call; `argc` is in/out
    pub fn napi_get_cb_info(
        env: napi_env,
        cbinfo: napi_callback_info,
        argc: *mut usize,
        argv: *mut napi_value,
        this_arg: *mut napi_value,
        data: *mut *mut c_void,
    ) -> napi_status;

    /// Fails with `napi_number_expected` for non-numbers, leaving `result` untouched
    pub fn napi_get_value_double(env: napi_env, value: napi_value, result: *mut f64) -> napi_status;

    pub fn napi_create_function(
        env: napi_env,
        utf8name: *const c_char,
        length: usize,
        cb: napi_callback,
        data: *mut c_void,
        result: *mut napi_value,
    ) -> napi_status;

    pub fn napi_set_named_property(
        env: napi_env,
        object: napi_value,
        utf8name: *const c_char,
        value: napi_value,
    ) -> napi_status;

    pub fn napi_is_exception_pending(env: napi_env, result: *mut bool) -> napi_status;

    pub fn napi_throw_error(env: napi_env, code: *const c_char, msg: *const c_char) -> napi_status;
}

/// Turn an N-API status into a `Result`, tagging failures with the call name
pub fn check(status: napi_status, call: &'static str) -> Result<(), NapiError> {
    if status == napi_ok {
        Ok(())
    } else {
        Err(NapiError { call, status })
    }
}
