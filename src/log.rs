//! Diagnostic output
//!
//! Lines go to `esp-println` when the `esp32-log` feature is enabled and
//! are compiled out otherwise.

#[cfg(feature = "esp32-log")]
macro_rules! diag {
    ($($arg:tt)*) => {
        esp_println::println!($($arg)*)
    };
}

#[cfg(not(feature = "esp32-log"))]
macro_rules! diag {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}
