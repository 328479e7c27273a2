//! src/bin/demo.rs
//!
//! Walks through the logger's features on standard output. Configuration comes
//! from the `LOGL_*` environment variables; see [`logl::LoglConfig::from_env`].

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use logl::{Level, Logger, LoglConfig, log_debug, log_error, log_info, log_warn};

/// Exit status for configuration errors.
const EXIT_CONFIG: u8 = 2;

/// Loads the configuration through `lookup` and emits the sample lines.
///
/// Configuration errors are reported on `stderr` and yield exit status 2.
pub fn run_with<F, E>(lookup: F, stderr: &mut E) -> ExitCode
where
    F: Fn(&str) -> Option<String>,
    E: Write,
{
    let config = match LoglConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(err) => {
            let _ = writeln!(stderr, "logl-demo: {err}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let logger = Arc::new(Logger::stdout(&config));
    emit_samples(&logger);

    #[cfg(feature = "tracing")]
    {
        if let Err(err) = logl::init_tracing(Arc::clone(&logger)) {
            let _ = writeln!(stderr, "logl-demo: {err}");
        }
        tracing::info!(target: "demo::trace", "routed through tracing");
        tracing::debug!(tag = "disk", "tracing event with explicit tag");
    }

    ExitCode::SUCCESS
}

fn emit_samples<W, C>(logger: &Logger<W, C>)
where
    W: Write,
    C: logl::Clock,
{
    log_debug!(logger, "disk", "cache warmed with {} blocks", 128);
    log_info!(logger, "net", "connected to {}", "10.0.0.1:8080");
    log_warn!(logger, "net", "retrying in {} ms", 250);
    log_error!(logger, "disk", "write failed: no space left on device");

    // `ui` is quiet unless something goes wrong.
    let _ = logger.set_level("ui", Level::Error);
    log_info!(logger, "ui", "redrawn");
    log_error!(logger, "ui", "render thread stalled");
}
