// Compile-time selection of the OS sleep/yield calls

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        mod windows;
        pub use self::windows::{sleep, yield_now};
    } else if #[cfg(unix)] {
        mod posix;
        pub use self::posix::{sleep, yield_now};
    } else {
        compile_error!("yield-main only supports unix and windows targets");
    }
}
