//! crates/logl/src/config.rs
//! Build-time logger configuration and its environment loader.

use std::env;

use logl_sink::LineEnding;

use crate::color::ColorMode;
use crate::error::{ConfigError, ConfigResult};
use crate::level::Level;
use crate::registry::DEFAULT_CAPACITY;

/// Environment variable holding the runtime global floor.
pub const ENV_FLOOR: &str = "LOGL_FLOOR";
/// Environment variable holding the registry capacity.
pub const ENV_MAX_TAGS: &str = "LOGL_MAX_TAGS";
/// Environment variable holding the color mode.
pub const ENV_COLOR: &str = "LOGL_COLOR";
/// Environment variable holding the line ending.
pub const ENV_LINE_ENDING: &str = "LOGL_LINE_ENDING";
/// Environment variable holding comma-separated `tag=level` directives.
pub const ENV_LEVELS: &str = "LOGL_LEVELS";

/// A per-tag level applied when a [`Logger`](crate::Logger) is built.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelDirective {
    /// Tag the level applies to.
    pub tag: String,
    /// Minimum level for the tag.
    pub level: Level,
}

impl LevelDirective {
    /// Creates a directive.
    pub fn new(tag: impl Into<String>, level: Level) -> Self {
        Self {
            tag: tag.into(),
            level,
        }
    }

    /// Parses a single `tag=level` token.
    ///
    /// # Examples
    ///
    /// ```
    /// use logl::{Level, LevelDirective};
    ///
    /// let directive = LevelDirective::parse("net=warn")?;
    /// assert_eq!(directive, LevelDirective::new("net", Level::Warn));
    /// # Ok::<(), logl::ConfigError>(())
    /// ```
    pub fn parse(token: &str) -> ConfigResult<Self> {
        let token = token.trim();
        let Some((tag, level)) = token.split_once('=') else {
            return Err(ConfigError::InvalidDirective(token.to_owned()));
        };

        let tag = tag.trim();
        if tag.is_empty() {
            return Err(ConfigError::InvalidDirective(token.to_owned()));
        }

        Ok(Self::new(tag, level.parse()?))
    }
}

/// Parses a comma-separated directive list such as `"net=warn, disk=error"`.
///
/// Empty items are skipped, so trailing commas are accepted. Later directives
/// for the same tag win when applied.
pub fn parse_directives(spec: &str) -> ConfigResult<Vec<LevelDirective>> {
    spec.split(',')
        .filter(|token| !token.trim().is_empty())
        .map(LevelDirective::parse)
        .collect()
}

/// Options fixed when a [`Logger`](crate::Logger) is built.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoglConfig {
    /// Runtime global floor. Raised to [`STATIC_FLOOR`](crate::STATIC_FLOOR)
    /// if lower.
    pub floor: Level,
    /// Maximum number of distinct tags the registry tracks.
    pub capacity: usize,
    /// Color enablement.
    pub color: ColorMode,
    /// Terminator appended to every line.
    pub line_ending: LineEnding,
    /// Per-tag levels applied in order at build time.
    pub levels: Vec<LevelDirective>,
}

impl Default for LoglConfig {
    fn default() -> Self {
        Self {
            floor: Level::MIN,
            capacity: DEFAULT_CAPACITY,
            color: ColorMode::default(),
            line_ending: LineEnding::default(),
            levels: Vec::new(),
        }
    }
}

impl LoglConfig {
    /// Sets the runtime global floor.
    pub fn with_floor(mut self, floor: Level) -> Self {
        self.floor = floor;
        self
    }

    /// Sets the registry capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the color mode.
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Sets the line ending.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Appends a per-tag level directive.
    pub fn with_level(mut self, tag: impl Into<String>, level: Level) -> Self {
        self.levels.push(LevelDirective::new(tag, level));
        self
    }

    /// Appends every directive in a comma-separated `tag=level` list.
    pub fn apply_directives(&mut self, spec: &str) -> ConfigResult<()> {
        self.levels.extend(parse_directives(spec)?);
        Ok(())
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads [`ENV_FLOOR`], [`ENV_MAX_TAGS`], [`ENV_COLOR`],
    /// [`ENV_LINE_ENDING`] and [`ENV_LEVELS`]. Unset or non-Unicode variables
    /// keep their defaults.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// This is the testable core of [`from_env`](Self::from_env).
    ///
    /// # Examples
    ///
    /// ```
    /// use logl::{ColorMode, Level, LoglConfig};
    ///
    /// let config = LoglConfig::from_lookup(|key| match key {
    ///     "LOGL_FLOOR" => Some("info".to_owned()),
    ///     "LOGL_COLOR" => Some("never".to_owned()),
    ///     "LOGL_LEVELS" => Some("net=error".to_owned()),
    ///     _ => None,
    /// })?;
    ///
    /// assert_eq!(config.floor, Level::Info);
    /// assert_eq!(config.color, ColorMode::Never);
    /// assert_eq!(config.levels.len(), 1);
    /// # Ok::<(), logl::ConfigError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(floor) = lookup(ENV_FLOOR) {
            config.floor = floor.parse()?;
        }

        if let Some(capacity) = lookup(ENV_MAX_TAGS) {
            config.capacity = capacity
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidCapacity(capacity.trim().to_owned()))?;
        }

        if let Some(color) = lookup(ENV_COLOR) {
            config.color = color.parse()?;
        }

        if let Some(line_ending) = lookup(ENV_LINE_ENDING) {
            config.line_ending = line_ending
                .parse()
                .map_err(|_| ConfigError::InvalidLineEnding(line_ending.trim().to_owned()))?;
        }

        if let Some(levels) = lookup(ENV_LEVELS) {
            config.apply_directives(&levels)?;
        }

        Ok(config)
    }
}
