//! crates/logl/src/error.rs
//!
//! Error types for the tag registry and configuration loading.

use thiserror::Error;

use crate::level::ParseLevelError;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Result type for configuration parsing.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors reported by [`TagRegistry`](crate::TagRegistry).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RegistryError {
    /// The registry is full and `tag` has no entry yet.
    ///
    /// No state changed; `tag` keeps resolving to the default level.
    #[error("could not add tag {tag} to list: list is full ({capacity} tags)")]
    CapacityExceeded {
        /// The tag that was not added.
        tag: String,
        /// The registry capacity at the time of the call.
        capacity: usize,
    },
}

/// Errors raised while building a [`LoglConfig`](crate::LoglConfig) from text.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// A level name did not parse.
    #[error(transparent)]
    InvalidLevel(#[from] ParseLevelError),
    /// A color mode keyword did not parse.
    #[error("invalid color mode `{0}` (expected auto, always or never)")]
    InvalidColorMode(String),
    /// A line ending keyword did not parse.
    #[error("invalid line ending `{0}` (expected crlf or lf)")]
    InvalidLineEnding(String),
    /// A `tag=level` directive was malformed.
    #[error("invalid level directive `{0}` (expected tag=level)")]
    InvalidDirective(String),
    /// The tag capacity was not a non-negative integer.
    #[error("invalid tag capacity `{0}`")]
    InvalidCapacity(String),
}
