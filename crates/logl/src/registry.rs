//! crates/logl/src/registry.rs
//! Bounded tag -> minimum level table.

use std::borrow::Cow;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{RegistryError, RegistryResult};
use crate::level::Level;

/// Number of distinct tags a registry tracks unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 20;

/// One (tag, level) pair stored in a [`TagRegistry`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TagEntry {
    tag: Cow<'static, str>,
    level: Level,
}

impl TagEntry {
    /// Returns the tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the minimum level registered for the tag.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }
}

/// What [`TagRegistry::set_level`] did with the entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SetOutcome {
    /// The tag had no entry and one was added.
    Inserted,
    /// The tag already had an entry and its level was overwritten.
    Updated,
}

/// Bounded associative store mapping tags to their minimum log level.
///
/// Tags are compared by content, so two distinct allocations of `"net"` name
/// the same entry. Lookups scan entries in insertion order. The table never
/// grows past its capacity: a new tag arriving when it is full is refused with
/// [`RegistryError::CapacityExceeded`] and keeps resolving to the default
/// level.
///
/// Each operation takes the internal lock for the duration of one scan and
/// releases it before returning; no I/O happens under the lock.
///
/// # Examples
///
/// ```
/// use logl::{Level, TagRegistry};
///
/// let registry = TagRegistry::with_capacity(2);
/// registry.set_level("net", Level::Warn)?;
/// registry.set_level("disk", Level::Error)?;
///
/// assert_eq!(registry.get_level("net"), Level::Warn);
/// assert_eq!(registry.get_level("ui"), Level::Debug);
/// assert!(registry.set_level("ui", Level::Info).is_err());
/// # Ok::<(), logl::RegistryError>(())
/// ```
#[derive(Debug)]
pub struct TagRegistry {
    entries: Mutex<Vec<TagEntry>>,
    capacity: usize,
    default_level: Level,
}

impl TagRegistry {
    /// Creates an empty registry holding up to [`DEFAULT_CAPACITY`] tags.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty registry holding up to `capacity` tags.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            // `capacity` is only a bound; the table grows as tags arrive.
            entries: Mutex::new(Vec::with_capacity(capacity.min(DEFAULT_CAPACITY))),
            capacity,
            default_level: Level::MIN,
        }
    }

    /// Sets the minimum level for `tag`.
    ///
    /// An existing entry is overwritten in place. A new tag is appended while
    /// there is room; once the table is full the call changes nothing and
    /// returns [`RegistryError::CapacityExceeded`].
    pub fn set_level<T>(&self, tag: T, level: Level) -> RegistryResult<SetOutcome>
    where
        T: Into<Cow<'static, str>>,
    {
        let tag = tag.into();
        let mut entries = self.lock();

        if let Some(entry) = entries.iter_mut().find(|entry| entry.tag == tag) {
            entry.level = level;
            return Ok(SetOutcome::Updated);
        }

        if entries.len() >= self.capacity {
            return Err(RegistryError::CapacityExceeded {
                tag: tag.into_owned(),
                capacity: self.capacity,
            });
        }

        entries.push(TagEntry { tag, level });
        Ok(SetOutcome::Inserted)
    }

    /// Returns the level registered for `tag`, or the default level.
    pub fn get_level(&self, tag: &str) -> Level {
        self.lookup(tag).unwrap_or(self.default_level)
    }

    /// Returns the level registered for `tag`, if any.
    pub fn lookup(&self, tag: &str) -> Option<Level> {
        self.lock()
            .iter()
            .find(|entry| entry.tag == tag)
            .map(TagEntry::level)
    }

    /// Reports whether `tag` has an entry.
    pub fn contains(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the level unregistered tags resolve to.
    #[must_use]
    pub const fn default_level(&self) -> Level {
        self.default_level
    }

    /// Returns a snapshot of all entries in insertion order.
    pub fn entries(&self) -> Vec<TagEntry> {
        self.lock().clone()
    }

    /// Removes every entry, returning the registry to its initial state.
    pub fn reset(&self) {
        self.lock().clear();
    }

    // A panic while the lock was held cannot leave the table half-updated,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<TagEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new()
    }
}
