// FFI module for C-compatible entry points

pub mod time;

pub use time::{yield_main_sleep, yield_main_sleep_checked, yield_main_yield};
