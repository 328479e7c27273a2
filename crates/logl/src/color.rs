//! crates/logl/src/color.rs
//! Color enablement for rendered lines.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Whether rendered lines are wrapped in ANSI color sequences.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorMode {
    /// Color when the destination is a terminal.
    #[default]
    Auto,
    /// Always emit color sequences.
    Always,
    /// Never emit color sequences.
    Never,
}

impl ColorMode {
    /// Resolves the mode against whether the destination is a terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use logl::ColorMode;
    ///
    /// assert!(ColorMode::Auto.resolve(true));
    /// assert!(!ColorMode::Auto.resolve(false));
    /// assert!(ColorMode::Always.resolve(false));
    /// assert!(!ColorMode::Never.resolve(true));
    /// ```
    #[must_use]
    pub const fn resolve(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }

    /// Returns the configuration keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ConfigError;

    /// Accepts `auto`, `always` and `never` in any case; an empty string
    /// means `auto`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else if trimmed.eq_ignore_ascii_case("always") {
            Ok(Self::Always)
        } else if trimmed.eq_ignore_ascii_case("never") {
            Ok(Self::Never)
        } else {
            Err(ConfigError::InvalidColorMode(trimmed.to_owned()))
        }
    }
}
