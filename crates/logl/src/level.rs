//! crates/logl/src/level.rs
//! Severity levels, their presentation, and the compile-time floor.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log event.
///
/// Levels are totally ordered, `Debug < Info < Warn < Error`, and filtering
/// compares them numerically.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Level {
    /// Detailed diagnostics, usually silenced in production.
    #[default]
    Debug = 0,
    /// Routine progress information.
    Info = 1,
    /// Something unexpected that the program recovered from.
    Warn = 2,
    /// A failure the caller should know about.
    Error = 3,
}

/// ANSI sequence that restores the terminal's default attributes.
pub const RESET_COLOR: &str = "\x1b[0m";
/// ANSI sequence for red foreground text.
pub const COLOR_RED: &str = "\x1b[0;31m";
/// ANSI sequence for brown (dark yellow) foreground text.
pub const COLOR_BROWN: &str = "\x1b[0;33m";
/// ANSI sequence for green foreground text.
pub const COLOR_GREEN: &str = "\x1b[0;32m";

/// Compile-time global floor.
///
/// Selected with the `floor-info`, `floor-warn` and `floor-error` cargo
/// features. Events below this level are rejected by a `const` comparison, so
/// the optimizer drops the call site entirely.
#[cfg(feature = "floor-error")]
pub const STATIC_FLOOR: Level = Level::Error;
/// Compile-time global floor.
///
/// Selected with the `floor-info`, `floor-warn` and `floor-error` cargo
/// features. Events below this level are rejected by a `const` comparison, so
/// the optimizer drops the call site entirely.
#[cfg(all(feature = "floor-warn", not(feature = "floor-error")))]
pub const STATIC_FLOOR: Level = Level::Warn;
/// Compile-time global floor.
///
/// Selected with the `floor-info`, `floor-warn` and `floor-error` cargo
/// features. Events below this level are rejected by a `const` comparison, so
/// the optimizer drops the call site entirely.
#[cfg(all(
    feature = "floor-info",
    not(any(feature = "floor-warn", feature = "floor-error"))
))]
pub const STATIC_FLOOR: Level = Level::Info;
/// Compile-time global floor.
///
/// Selected with the `floor-info`, `floor-warn` and `floor-error` cargo
/// features. Events below this level are rejected by a `const` comparison, so
/// the optimizer drops the call site entirely.
#[cfg(not(any(feature = "floor-info", feature = "floor-warn", feature = "floor-error")))]
pub const STATIC_FLOOR: Level = Level::Debug;

impl Level {
    /// Every level in ascending order.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// The least restrictive level. Unregistered tags resolve to this.
    pub const MIN: Self = Self::Debug;

    /// Returns the lowercase name used in configuration and `Display`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logl::Level;
    ///
    /// assert_eq!(Level::Debug.as_str(), "debug");
    /// assert_eq!(Level::Warn.as_str(), "warn");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Returns the indicator letter that prefixes every rendered line.
    ///
    /// # Examples
    ///
    /// ```
    /// use logl::Level;
    ///
    /// let letters: String = Level::ALL.iter().map(|level| level.letter()).collect();
    /// assert_eq!(letters, "DIWE");
    /// ```
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }

    /// Returns the ANSI color sequence for this level, if it has one.
    ///
    /// Debug lines are never colored.
    #[must_use]
    pub const fn color(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Info => Some(COLOR_GREEN),
            Self::Warn => Some(COLOR_BROWN),
            Self::Error => Some(COLOR_RED),
        }
    }

    /// Returns the numeric rank of the level.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the more restrictive of `self` and `other`.
    ///
    /// Equivalent to [`Ord::max`], usable in `const` contexts.
    #[must_use]
    pub const fn max_const(self, other: Self) -> Self {
        if other.as_u8() > self.as_u8() {
            other
        } else {
            self
        }
    }

    /// Reports whether events at this level survive [`STATIC_FLOOR`].
    ///
    /// # Examples
    ///
    /// ```
    /// use logl::Level;
    ///
    /// assert!(Level::Error.statically_enabled());
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn statically_enabled(self) -> bool {
        self.as_u8() >= STATIC_FLOOR.as_u8()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised log level `{input}` (expected debug, info, warn or error)")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts level names in any case, `warning` as an alias for `warn`, and
    /// the single indicator letters `D`, `I`, `W` and `E`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let level = match trimmed.to_ascii_lowercase().as_str() {
            "debug" | "d" => Self::Debug,
            "info" | "i" => Self::Info,
            "warn" | "warning" | "w" => Self::Warn,
            "error" | "e" => Self::Error,
            _ => {
                return Err(ParseLevelError {
                    input: trimmed.to_owned(),
                });
            }
        };
        Ok(level)
    }
}
