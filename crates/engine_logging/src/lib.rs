#![deny(missing_docs)]
//! Logging front door for the wizard crates.
//!
//! Every crate logs through the `engine_*` macros below. They expand to the
//! `log` facade re-exported from here, so callers do not need their own
//! `log` dependency, and all records share the [`TARGET`] target.

use log::LevelFilter;

#[doc(hidden)]
pub use log as __log;

/// Target attached to every record emitted through the macros.
pub const TARGET: &str = "wizard";

/// Logs a trace-level message.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {
        $crate::__log::trace!(target: $crate::TARGET, $($arg)*)
    };
}

/// Logs a debug-level message.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {
        $crate::__log::debug!(target: $crate::TARGET, $($arg)*)
    };
}

/// Logs an info-level message.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {
        $crate::__log::info!(target: $crate::TARGET, $($arg)*)
    };
}

/// Logs a warn-level message.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {
        $crate::__log::warn!(target: $crate::TARGET, $($arg)*)
    };
}

/// Logs an error-level message.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {
        $crate::__log::error!(target: $crate::TARGET, $($arg)*)
    };
}

/// Debug in debug builds, info in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs a stderr logger for tests. Later calls are ignored.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let _ = TermLogger::init(
        default_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}
