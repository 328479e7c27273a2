#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logl` is a small leveled, tagged logger. Every message carries a
//! [`Level`] and a free-form tag string. Callers raise or lower verbosity per
//! tag at runtime through a bounded registry, and a global floor caps
//! verbosity for every tag at once.
//!
//! # Design
//!
//! - [`TagRegistry`] maps tags to minimum levels. It holds at most
//!   [`LoglConfig::capacity`] distinct tags and compares tags by content.
//! - [`Logger`] owns the registry, a [`Clock`] and a
//!   [`LineSink`](logl_sink::LineSink) over any [`io::Write`](std::io::Write).
//!   An event at level `E` for tag `T` is written iff
//!   `E >= max(floor, get_level(T))`.
//! - The floor has two parts: [`STATIC_FLOOR`], picked by the `floor-*` cargo
//!   features so call sites below it are removed at compile time, and the
//!   runtime [`LoglConfig::floor`].
//! - The [`log_at!`], [`log_debug!`], [`log_info!`], [`log_warn!`] and
//!   [`log_error!`] macros evaluate their format arguments only when the event
//!   passes the filter.
//!
//! # Output
//!
//! Each emitted line has the form
//! `{color}{letter} ({timestamp}) {tag}: {message}{reset}` followed by the
//! configured [`LineEnding`], `\r\n` by default. Colors are red for errors,
//! brown for warnings and green for info; debug lines are never colored.
//!
//! # Errors
//!
//! Logging itself never fails. Writer errors are swallowed.
//! [`Logger::set_level`] returns [`RegistryError::CapacityExceeded`] when the
//! registry is full, after writing a warning under the [`SELF_TAG`] tag that
//! bypasses the filter. Configuration parsing reports [`ConfigError`].
//!
//! # Examples
//!
//! ```
//! use logl::{ColorMode, FixedClock, Level, Logger, LoglConfig, log_error, log_warn};
//!
//! let config = LoglConfig::default()
//!     .with_color(ColorMode::Never)
//!     .with_level("net", Level::Error);
//! let logger = Logger::with_clock(Vec::new(), FixedClock(100), &config);
//!
//! log_warn!(logger, "net", "retrying in {} ms", 250);
//! log_error!(logger, "net", "unreachable after {} attempts", 3);
//!
//! let output = String::from_utf8(logger.into_writer()).unwrap();
//! assert_eq!(output, "E (100) net: unreachable after 3 attempts\r\n");
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Level`], [`ColorMode`],
//!   [`LineEnding`] and [`LoglConfig`].
//! - `tracing`: a `tracing-subscriber` layer routing tracing events through
//!   the tag filter.
//! - `floor-info`, `floor-warn`, `floor-error`: compile-time floor.

mod clock;
mod color;
mod config;
mod error;
mod level;
mod logger;
mod macros;
mod registry;
#[cfg(feature = "tracing")]
mod tracing_bridge;

/// Tag used for the logger's own diagnostics.
pub const SELF_TAG: &str = "logl";

pub use clock::{Clock, FixedClock, SystemClock};
pub use color::ColorMode;
pub use config::{
    ENV_COLOR, ENV_FLOOR, ENV_LEVELS, ENV_LINE_ENDING, ENV_MAX_TAGS, LevelDirective, LoglConfig,
    parse_directives,
};
pub use error::{ConfigError, ConfigResult, RegistryError, RegistryResult};
pub use level::{
    COLOR_BROWN, COLOR_GREEN, COLOR_RED, Level, ParseLevelError, RESET_COLOR, STATIC_FLOOR,
};
pub use logger::Logger;
pub use logl_sink::LineEnding;
pub use registry::{DEFAULT_CAPACITY, SetOutcome, TagEntry, TagRegistry};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{TagFilterLayer, init_tracing};
