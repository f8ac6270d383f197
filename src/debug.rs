//! Opt-in debug logging.
//!
//! Off by default. Enabled with [`enable`] or by setting
//! `TRUENO_RASTER_DEBUG=1` and calling [`enable_from_env`]. The rasterizer
//! itself never logs; only the [`crate::screen::Screen`] facade reports
//! rejected draws.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable checked by [`enable_from_env`].
pub const ENV_VAR: &str = "TRUENO_RASTER_DEBUG";

/// Global debug mode flag.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enables debug mode globally.
pub fn enable() {
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disables debug mode globally.
pub fn disable() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Returns true if debug mode is enabled.
#[inline]
pub fn is_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Enables debug mode if [`ENV_VAR`] is `1` or `true`.
///
/// Returns the resulting state.
pub fn enable_from_env() -> bool {
    let on = std::env::var(ENV_VAR).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    if on {
        enable();
    }
    is_enabled()
}

/// Debug log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Fine-grained tracing
    Trace,
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl Level {
    /// Fixed-width label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

/// Format a log line: `[LEVEL] [component] message`.
#[must_use]
pub fn format_line(level: Level, component: &str, message: &str) -> String {
    format!("[{:5}] [{}] {}", level.as_str(), component, message)
}

/// Logs a debug message to stderr if debug mode is enabled.
pub fn log(level: Level, component: &str, message: &str) {
    if !is_enabled() {
        return;
    }
    let _ = writeln!(io::stderr(), "{}", format_line(level, component, message));
}

/// Logs with format arguments.
#[macro_export]
macro_rules! debug_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debug::is_enabled() {
            $crate::debug::log($level, $component, &format!($($arg)*));
        }
    };
}

/// Convenience macro for trace level.
#[macro_export]
macro_rules! trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Trace, $component, $($arg)*)
    };
}

/// Convenience macro for warn level.
#[macro_export]
macro_rules! warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Warn, $component, $($arg)*)
    };
}
