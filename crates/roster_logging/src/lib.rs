#![deny(missing_docs)]
//! Shared logging utilities for the roster workspace.
//!
//! This crate provides the `roster_*` logging macros used by the core, the
//! fetch engine and the host, plus a test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Sequence number of the message currently being dispatched on this thread.
    static DISPATCH_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Records the sequence number of the message being dispatched on this thread.
/// The host calls this once per message before handing it to the core.
pub fn set_dispatch_seq(seq: u64) {
    DISPATCH_SEQ.with(|v| v.set(seq));
}

/// Returns the sequence number of the message being dispatched on this thread,
/// or 0 outside of a dispatch.
pub fn dispatch_seq() -> u64 {
    DISPATCH_SEQ.with(|v| v.get())
}

/// Logs a trace-level message, tagged with the current dispatch sequence.
#[macro_export]
macro_rules! roster_trace {
    ($($arg:tt)*) => {{
        log::trace!("[#{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message, tagged with the current dispatch sequence.
#[macro_export]
macro_rules! roster_debug {
    ($($arg:tt)*) => {{
        log::debug!("[#{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message, tagged with the current dispatch sequence.
#[macro_export]
macro_rules! roster_info {
    ($($arg:tt)*) => {{
        log::info!("[#{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message, tagged with the current dispatch sequence.
#[macro_export]
macro_rules! roster_warn {
    ($($arg:tt)*) => {{
        log::warn!("[#{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message, tagged with the current dispatch sequence.
#[macro_export]
macro_rules! roster_error {
    ($($arg:tt)*) => {{
        log::error!("[#{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Initializes a terminal logger for use in tests.
///
/// Safe to call from every test: a second initialization is ignored.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
