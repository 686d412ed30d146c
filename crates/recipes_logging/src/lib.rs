#![deny(missing_docs)]
//! Shared logging utilities for the recipe table workspace.
//!
//! This crate provides the `recipes_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the fetch request currently being serviced.
    static REQUEST_CONTEXT: Cell<Option<u64>> = const { Cell::new(None) };
}

/// Sets the fetch request id for the current thread.
/// Pass `None` once the request has settled.
pub fn set_request_context(request_id: Option<u64>) {
    REQUEST_CONTEXT.with(|v| v.set(request_id));
}

/// Retrieves the fetch request id for the current thread, if any.
pub fn request_context() -> Option<u64> {
    REQUEST_CONTEXT.with(|v| v.get())
}

/// Runs `f` with `request_id` as the current request context, then restores the previous one.
pub fn with_request_context<R>(request_id: u64, f: impl FnOnce() -> R) -> R {
    let previous = request_context();
    set_request_context(Some(request_id));
    let result = f();
    set_request_context(previous);
    result
}

/// Builds the `[req N] ` prefix for log lines emitted while a request is serviced.
#[doc(hidden)]
pub fn context_prefix() -> String {
    match request_context() {
        Some(id) => format!("[req {id}] "),
        None => String::new(),
    }
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! recipes_trace {
    ($($arg:tt)*) => {{
        log::trace!("{}{}", $crate::context_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! recipes_info {
    ($($arg:tt)*) => {{
        log::info!("{}{}", $crate::context_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! recipes_debug {
    ($($arg:tt)*) => {{
        log::debug!("{}{}", $crate::context_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! recipes_warn {
    ($($arg:tt)*) => {{
        log::warn!("{}{}", $crate::context_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! recipes_error {
    ($($arg:tt)*) => {{
        log::error!("{}{}", $crate::context_prefix(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have won the race.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_follows_request_context() {
        set_request_context(None);
        assert_eq!(context_prefix(), "");

        set_request_context(Some(7));
        assert_eq!(request_context(), Some(7));
        assert_eq!(context_prefix(), "[req 7] ");

        set_request_context(None);
        assert_eq!(context_prefix(), "");
    }

    #[test]
    fn scoped_context_restores_previous() {
        set_request_context(Some(1));
        let inner = with_request_context(2, context_prefix);
        assert_eq!(inner, "[req 2] ");
        assert_eq!(request_context(), Some(1));
        set_request_context(None);
    }
}
