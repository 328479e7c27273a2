//! crates/logl/src/logger.rs
//! The dispatch filter: gate, format and write one event.

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use is_terminal::IsTerminal;
use logl_sink::{LineEnding, LineSink};

use crate::SELF_TAG;
use crate::clock::{Clock, SystemClock};
use crate::config::LoglConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::level::{Level, RESET_COLOR, STATIC_FLOOR};
use crate::registry::TagRegistry;

const LINE_CAPACITY_HINT: usize = 96;

/// Leveled, tagged logger with per-tag runtime thresholds.
///
/// A message at level `E` for tag `T` is written iff
/// `E >= max(floor, get_level(T))`, where `floor` is the configured runtime
/// floor raised to [`STATIC_FLOOR`]. Suppressed messages never read the clock
/// or touch the writer.
///
/// Emitted lines look like `{color}{letter} ({timestamp}) {tag}: {message}{reset}`
/// followed by the configured [`LineEnding`]. Color sequences appear only when
/// color is enabled and the level has a color.
///
/// The logger is an ordinary value owned by the application; share it by
/// reference or [`Arc`](std::sync::Arc). It is `Sync` whenever the writer is
/// `Send` and the clock is `Sync`.
///
/// # Examples
///
/// ```
/// use logl::{ColorMode, FixedClock, Level, Logger, LoglConfig};
///
/// let config = LoglConfig::default().with_color(ColorMode::Never);
/// let logger = Logger::with_clock(Vec::new(), FixedClock(7), &config);
///
/// logger.set_level("net", Level::Warn)?;
/// logger.info("net", format_args!("suppressed"));
/// logger.error("net", format_args!("failed: {}", 7));
///
/// assert_eq!(logger.into_writer(), b"E (7) net: failed: 7\r\n".to_vec());
/// # Ok::<(), logl::RegistryError>(())
/// ```
pub struct Logger<W, C = SystemClock> {
    registry: TagRegistry,
    floor: Level,
    color: bool,
    clock: C,
    line_ending: LineEnding,
    sink: Mutex<LineSink<W>>,
}

impl Logger<io::Stdout> {
    /// Builds a logger that writes to standard output.
    ///
    /// [`ColorMode::Auto`](crate::ColorMode::Auto) enables color when stdout
    /// is a terminal.
    pub fn stdout(config: &LoglConfig) -> Self {
        let stdout = io::stdout();
        let color = config.color.resolve(stdout.is_terminal());
        Self::build(stdout, SystemClock, config, color)
    }
}

impl<W> Logger<W>
where
    W: Write,
{
    /// Builds a logger over `writer` using the wall clock.
    ///
    /// The writer is not a known terminal, so
    /// [`ColorMode::Auto`](crate::ColorMode::Auto) disables color.
    pub fn new(writer: W, config: &LoglConfig) -> Self {
        Self::with_clock(writer, SystemClock, config)
    }
}

impl<W, C> Logger<W, C>
where
    W: Write,
    C: Clock,
{
    /// Builds a logger over `writer` with an explicit timestamp provider.
    pub fn with_clock(writer: W, clock: C, config: &LoglConfig) -> Self {
        let color = config.color.resolve(false);
        Self::build(writer, clock, config, color)
    }

    fn build(writer: W, clock: C, config: &LoglConfig, color: bool) -> Self {
        let logger = Self {
            registry: TagRegistry::with_capacity(config.capacity),
            floor: config.floor.max_const(STATIC_FLOOR),
            color,
            clock,
            line_ending: config.line_ending,
            sink: Mutex::new(LineSink::with_line_ending(writer, config.line_ending)),
        };

        for directive in &config.levels {
            // Overflow is already reported on the sink.
            let _ = logger.set_level(directive.tag.clone(), directive.level);
        }

        logger
    }

    /// Sets the minimum level for `tag`.
    ///
    /// When the registry is full and `tag` is new, nothing changes, a warning
    /// naming the tag is written unconditionally under the [`SELF_TAG`] tag,
    /// and the error is returned.
    pub fn set_level<T>(&self, tag: T, level: Level) -> RegistryResult<()>
    where
        T: Into<Cow<'static, str>>,
    {
        match self.registry.set_level(tag, level) {
            Ok(_) => Ok(()),
            Err(err) => {
                let RegistryError::CapacityExceeded { tag, capacity } = &err;
                self.emit_unfiltered(
                    Level::Warn,
                    SELF_TAG,
                    format_args!(
                        "Could not add tag {tag} to list: List is full. \
                         Try increasing the tag capacity (currently {capacity})"
                    ),
                );
                Err(err)
            }
        }
    }

    /// Returns the level registered for `tag`, or the default level.
    pub fn get_level(&self, tag: &str) -> Level {
        self.registry.get_level(tag)
    }

    /// Returns the cutoff applied to `tag`: the higher of the floor and the
    /// tag's level.
    pub fn threshold(&self, tag: &str) -> Level {
        self.floor.max(self.registry.get_level(tag))
    }

    /// Reports whether an event at `level` for `tag` would be written.
    #[inline(always)]
    pub fn enabled(&self, level: Level, tag: &str) -> bool {
        level.statically_enabled() && level >= self.floor && level >= self.registry.get_level(tag)
    }

    /// Logs `args` at `level` under `tag` if it clears the threshold.
    #[inline(always)]
    pub fn log(&self, level: Level, tag: &str, args: fmt::Arguments<'_>) {
        if self.enabled(level, tag) {
            self.emit_unfiltered(level, tag, args);
        }
    }

    /// Logs at [`Level::Debug`].
    #[inline(always)]
    pub fn debug(&self, tag: &str, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, tag, args);
    }

    /// Logs at [`Level::Info`].
    #[inline(always)]
    pub fn info(&self, tag: &str, args: fmt::Arguments<'_>) {
        self.log(Level::Info, tag, args);
    }

    /// Logs at [`Level::Warn`].
    #[inline(always)]
    pub fn warn(&self, tag: &str, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, tag, args);
    }

    /// Logs at [`Level::Error`].
    #[inline(always)]
    pub fn error(&self, tag: &str, args: fmt::Arguments<'_>) {
        self.log(Level::Error, tag, args);
    }

    /// Formats and writes one line without consulting the filter.
    ///
    /// Used by the logging macros after they have checked
    /// [`enabled`](Self::enabled), and for the registry overflow warning.
    #[doc(hidden)]
    pub fn emit_unfiltered(&self, level: Level, tag: &str, args: fmt::Arguments<'_>) {
        let timestamp = self.clock.now();
        let (color, reset) = match level.color() {
            Some(color) if self.color => (color, RESET_COLOR),
            _ => ("", ""),
        };
        let letter = level.letter();

        // Render before taking the sink lock so a `Display` impl that logs
        // through this logger cannot deadlock.
        let mut line = String::with_capacity(LINE_CAPACITY_HINT);
        if write!(line, "{color}{letter} ({timestamp}) {tag}: {args}{reset}").is_err() {
            return;
        }

        // Write failures must never reach the caller.
        let _ = self.lock_sink().write_line(line);
    }

    fn lock_sink(&self) -> MutexGuard<'_, LineSink<W>> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W, C> Logger<W, C> {
    /// Returns the tag registry.
    pub const fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    /// Returns the effective global floor.
    pub const fn floor(&self) -> Level {
        self.floor
    }

    /// Reports whether lines are wrapped in color sequences.
    pub const fn color_enabled(&self) -> bool {
        self.color
    }

    /// Returns the timestamp provider.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the line ending appended to each line.
    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Consumes the logger and returns the writer.
    pub fn into_writer(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_inner()
    }
}

impl<W, C> fmt::Debug for Logger<W, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("registry", &self.registry)
            .field("floor", &self.floor)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}
