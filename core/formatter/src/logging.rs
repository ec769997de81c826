//! FILENAME: core/formatter/src/logging.rs
// PURPOSE: Category logging for the formatter, routed through the `log` facade.
// CONTEXT: Lines keep the seq|level|category|message shape so they can be
// merged with the host's own log and sorted by sequence number. The host
// picks the sink by installing a `log` implementation; with none installed
// nothing is formatted.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

pub use log::Level;

static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

fn level_code(level: Level) -> char {
    match level {
        Level::Error => 'E',
        Level::Warn => 'W',
        Level::Info => 'I',
        Level::Debug => 'D',
        Level::Trace => 'T',
    }
}

/// Emits one sequenced line under `category`.
pub fn write_log(level: Level, category: &str, message: fmt::Arguments<'_>) {
    if !log::log_enabled!(target: category, level) {
        return;
    }
    let seq = next_seq();
    log::log!(
        target: category,
        level,
        "{}|{}|{}|{}",
        seq,
        level_code(level),
        category,
        message
    );
}

/// Emits an ENTER/EXIT trace line for `func`, with optional detail.
pub fn write_trace(category: &str, marker: &str, func: &str, detail: fmt::Arguments<'_>) {
    if !log::log_enabled!(target: category, Level::Debug) {
        return;
    }
    let detail = detail.to_string();
    if detail.is_empty() {
        write_log(Level::Debug, category, format_args!("{} {}", marker, func));
    } else {
        write_log(Level::Debug, category, format_args!("{} {} {}", marker, func, detail));
    }
}

// ============================================================================
// MACROS
// ============================================================================

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::Level::Debug, $cat, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::Level::Warn, $cat, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::Level::Error, $cat, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_enter {
    ($cat:expr, $func:expr) => {
        $crate::logging::write_trace($cat, "ENTER", $func, format_args!(""))
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        $crate::logging::write_trace($cat, "ENTER", $func, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_exit {
    ($cat:expr, $func:expr) => {
        $crate::logging::write_trace($cat, "EXIT", $func, format_args!(""))
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        $crate::logging::write_trace($cat, "EXIT", $func, format_args!($($arg)*))
    };
}

// Re-export so modules can `use crate::logging::log_debug;`
pub use log_debug;
pub use log_enter;
pub use log_error;
pub use log_exit;
pub use log_warn;
