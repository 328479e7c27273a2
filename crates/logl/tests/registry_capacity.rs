//! Integration tests for the bounded tag registry.
//!
//! These tests cover tag uniqueness, the capacity bound and the overflow
//! warning written through the unfiltered path.

use std::sync::Arc;
use std::thread;

use logl::{
    ColorMode, DEFAULT_CAPACITY, Level, LineEnding, Logger, LoglConfig, RegistryError, SELF_TAG,
    SetOutcome, TagRegistry,
};
use test_support::{CountingClock, SharedBuffer};

fn plain() -> LoglConfig {
    LoglConfig::default()
        .with_color(ColorMode::Never)
        .with_line_ending(LineEnding::Lf)
}

// ============================================================================
// Uniqueness
// ============================================================================

/// Verifies repeated calls for the same tag keep one entry with the last level.
#[test]
fn repeated_set_level_keeps_one_entry() {
    let registry = TagRegistry::new();
    assert_eq!(registry.set_level("net", Level::Info), Ok(SetOutcome::Inserted));
    assert_eq!(registry.set_level("net", Level::Error), Ok(SetOutcome::Updated));
    assert_eq!(registry.set_level("net", Level::Warn), Ok(SetOutcome::Updated));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get_level("net"), Level::Warn);
}

/// Verifies tags built at runtime match literals with the same text.
#[test]
fn runtime_strings_match_literal_tags() {
    let registry = TagRegistry::new();
    registry.set_level("disk", Level::Error).expect("room");

    let built = ["di", "sk"].concat();
    assert_eq!(registry.get_level(&built), Level::Error);
    assert_eq!(registry.set_level(built, Level::Info), Ok(SetOutcome::Updated));
    assert_eq!(registry.len(), 1);
}

// ============================================================================
// Capacity
// ============================================================================

/// Verifies the default registry fits exactly twenty tags.
#[test]
fn default_capacity_is_twenty() {
    let registry = TagRegistry::new();
    assert_eq!(registry.capacity(), DEFAULT_CAPACITY);
    assert_eq!(DEFAULT_CAPACITY, 20);

    for index in 0..DEFAULT_CAPACITY {
        registry
            .set_level(format!("tag{index}"), Level::Info)
            .expect("within capacity");
    }

    let err = registry
        .set_level("one-too-many", Level::Info)
        .expect_err("full");
    assert_eq!(
        err,
        RegistryError::CapacityExceeded {
            tag: "one-too-many".to_owned(),
            capacity: DEFAULT_CAPACITY,
        }
    );
    assert_eq!(registry.get_level("one-too-many"), Level::MIN);
    assert_eq!(registry.len(), DEFAULT_CAPACITY);
}

/// Verifies existing tags can still be updated when the table is full.
#[test]
fn full_registry_still_updates_existing_tags() {
    let registry = TagRegistry::with_capacity(2);
    registry.set_level("a", Level::Info).expect("room");
    registry.set_level("b", Level::Info).expect("room");

    assert_eq!(registry.set_level("a", Level::Error), Ok(SetOutcome::Updated));
    assert_eq!(registry.get_level("a"), Level::Error);
}

/// Verifies the overflow warning carries the tag and is emitted once per
/// rejected call.
#[test]
fn overflow_writes_warning_under_self_tag() {
    let buffer = SharedBuffer::new();
    let config = plain().with_capacity(1);
    let logger = Logger::with_clock(buffer.clone(), CountingClock::new(42), &config);

    logger.set_level("net", Level::Info).expect("room");
    let err = logger.set_level("disk", Level::Info).expect_err("full");
    assert!(matches!(err, RegistryError::CapacityExceeded { ref tag, .. } if tag == "disk"));

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with(&format!("W (42) {SELF_TAG}: Could not add tag disk")));
    assert!(lines[0].contains("List is full"));
    assert_eq!(logger.get_level("disk"), Level::MIN);
}

/// Verifies the overflow warning ignores a floor that filters warnings and a
/// muted self tag.
#[test]
fn overflow_warning_bypasses_filter() {
    let buffer = SharedBuffer::new();
    let config = plain().with_floor(Level::Error).with_capacity(1);
    let logger = Logger::with_clock(buffer.clone(), CountingClock::new(0), &config);
    logger.set_level(SELF_TAG, Level::Error).expect("room");

    logger.warn(SELF_TAG, format_args!("ordinary warnings stay hidden"));
    assert!(buffer.is_empty());

    let _ = logger.set_level("late", Level::Debug);
    assert_eq!(buffer.lines().len(), 1);
    assert!(buffer.contents().starts_with("W (0) logl: Could not add tag late"));
}

/// Verifies a zero-capacity registry rejects every tag.
#[test]
#[cfg_attr(
    any(feature = "floor-info", feature = "floor-warn", feature = "floor-error"),
    ignore = "needs every level enabled"
)]
fn zero_capacity_rejects_everything() {
    let buffer = SharedBuffer::new();
    let config = plain().with_capacity(0);
    let logger = Logger::with_clock(buffer.clone(), CountingClock::new(0), &config);

    assert!(logger.set_level("a", Level::Error).is_err());
    assert!(logger.registry().is_empty());
    logger.debug("a", format_args!("still visible"));
    assert_eq!(buffer.lines().len(), 2);
}

// ============================================================================
// Concurrency
// ============================================================================

/// Verifies concurrent inserts never exceed capacity or duplicate a tag.
#[test]
fn concurrent_inserts_respect_bound() {
    let buffer = SharedBuffer::new();
    let config = plain().with_capacity(8);
    let logger = Arc::new(Logger::with_clock(buffer.clone(), CountingClock::new(0), &config));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for index in 0..6 {
                    let _ = logger.set_level(format!("tag{index}"), Level::Info);
                    let _ = logger.set_level(format!("w{worker}-{index}"), Level::Warn);
                    logger.info("shared", format_args!("worker {worker} step {index}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker");
    }

    let entries = logger.registry().entries();
    assert_eq!(entries.len(), 8);
    let mut tags: Vec<&str> = entries.iter().map(|entry| entry.tag()).collect();
    tags.sort_unstable();
    tags.dedup();
    assert_eq!(tags.len(), 8);

    for line in buffer.lines() {
        assert!(
            line.starts_with("I (0) shared: worker ") || line.starts_with("W (0) logl: "),
            "torn line: {line:?}"
        );
    }
}
