//! crates/logl/src/macros.rs
//! Call-site macros.
//!
//! Each macro checks the compile-time floor first, then the logger's runtime
//! threshold for the tag, and only then evaluates the format arguments. Below
//! [`STATIC_FLOOR`](crate::STATIC_FLOOR) the whole call site folds away.

/// Log at an explicit level.
///
/// # Example
/// ```
/// use logl::{Level, Logger, LoglConfig, log_at};
///
/// let logger = Logger::new(Vec::new(), &LoglConfig::default());
/// log_at!(logger, Level::Info, "net", "connected to {}", "10.0.0.1");
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $tag:expr, $($arg:tt)+) => {{
        let level: $crate::Level = $level;
        if level.statically_enabled() {
            // `match` keeps the scrutinee's temporaries alive for the body.
            match (&$logger, ::core::convert::AsRef::<str>::as_ref(&$tag)) {
                (logger, tag) => {
                    if logger.enabled(level, tag) {
                        logger.emit_unfiltered(level, tag, ::core::format_args!($($arg)+));
                    }
                }
            }
        }
    }};
}

/// Log a debug message.
///
/// # Example
/// ```ignore
/// log_debug!(logger, "disk", "read {} blocks", count);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Debug, $tag, $($arg)+)
    };
}

/// Log an info message.
///
/// # Example
/// ```ignore
/// log_info!(logger, "net", "listening on port {}", port);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Info, $tag, $($arg)+)
    };
}

/// Log a warning.
///
/// # Example
/// ```ignore
/// log_warn!(logger, "net", "retrying in {} ms", delay);
/// ```
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Warn, $tag, $($arg)+)
    };
}

/// Log an error.
///
/// # Example
/// ```ignore
/// log_error!(logger, "net", "failed: {}", code);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Error, $tag, $($arg)+)
    };
}
