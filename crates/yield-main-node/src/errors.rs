use thiserror::Error;

use crate::sys::napi_status;

/// An N-API call that returned something other than `napi_ok`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{call} failed with napi_status {status}")]
pub struct NapiError {
    pub call: &'static str,
    pub status: napi_status,
}
