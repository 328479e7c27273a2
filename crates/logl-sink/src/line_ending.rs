use std::fmt;
use std::str::FromStr;

/// Terminator a [`LineSink`](crate::LineSink) appends to every line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineEnding {
    /// Carriage return followed by line feed (`\r\n`). Raw-mode terminals
    /// need the explicit carriage return.
    #[default]
    CrLf,
    /// Bare line feed (`\n`).
    Lf,
}

impl LineEnding {
    /// Returns the terminator bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use logl_sink::LineEnding;
    ///
    /// assert_eq!(LineEnding::CrLf.as_bytes(), b"\r\n");
    /// assert_eq!(LineEnding::Lf.as_bytes(), b"\n");
    /// ```
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::CrLf => b"\r\n",
            Self::Lf => b"\n",
        }
    }

    /// Returns the terminator as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }

    /// Returns the configuration keyword for this line ending.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CrLf => "crlf",
            Self::Lf => "lf",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a [`LineEnding`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseLineEndingError {
    _private: (),
}

impl fmt::Display for ParseLineEndingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised line ending (expected \"crlf\" or \"lf\")")
    }
}

impl std::error::Error for ParseLineEndingError {}

impl FromStr for LineEnding {
    type Err = ParseLineEndingError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("crlf") {
            Ok(Self::CrLf)
        } else if input.eq_ignore_ascii_case("lf") {
            Ok(Self::Lf)
        } else {
            Err(ParseLineEndingError { _private: () })
        }
    }
}
