//! crates/logl/src/tracing_bridge.rs
//! Bridge between the tracing crate and the tag filter.
//!
//! [`TagFilterLayer`] is a `tracing-subscriber` layer that turns each tracing
//! event into a tagged log line. The tag is taken from an explicit `tag` field
//! when present, otherwise from the last `::` segment of the event target, so
//! `tracing::warn!(target: "app::net", ...)` is filtered under tag `net`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logl::{Logger, LoglConfig, init_tracing};
//!
//! let logger = Arc::new(Logger::stdout(&LoglConfig::default()));
//! init_tracing(Arc::clone(&logger))?;
//!
//! tracing::info!(target: "app::net", "connected");
//! tracing::warn!(tag = "disk", "almost full");
//! ```

use std::fmt::{self, Write as _};
use std::io::Write;
use std::sync::Arc;

use tracing::{Level as TracingLevel, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::clock::Clock;
use crate::level::Level;
use crate::logger::Logger;

/// A tracing layer that routes events through a [`Logger`]'s tag filter.
pub struct TagFilterLayer<W, C> {
    logger: Arc<Logger<W, C>>,
}

impl<W, C> TagFilterLayer<W, C> {
    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger<W, C>>) -> Self {
        Self { logger }
    }

    /// Returns the logger events are routed to.
    #[must_use]
    pub const fn logger(&self) -> &Arc<Logger<W, C>> {
        &self.logger
    }

    /// Maps a tracing level to a log level. `TRACE` folds into debug.
    fn level_from_tracing(level: &TracingLevel) -> Level {
        match *level {
            TracingLevel::ERROR => Level::Error,
            TracingLevel::WARN => Level::Warn,
            TracingLevel::INFO => Level::Info,
            _ => Level::Debug,
        }
    }

    /// Derives a tag from a tracing target: its last `::` segment.
    fn tag_from_target(target: &str) -> &str {
        target.rsplit("::").next().unwrap_or(target)
    }
}

impl<S, W, C> Layer<S> for TagFilterLayer<W, C>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::level_from_tracing(metadata.level());
        if !level.statically_enabled() {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        if visitor.failed {
            return;
        }

        let tag = visitor
            .tag
            .as_deref()
            .unwrap_or_else(|| Self::tag_from_target(metadata.target()));
        if !self.logger.enabled(level, tag) {
            return;
        }

        let message = visitor.message.unwrap_or_default();
        self.logger
            .emit_unfiltered(level, tag, format_args!("{message}"));
    }
}

/// Visitor extracting the `message` and optional `tag` fields from an event.
///
/// `failed` is set when a field's `Debug` impl reports an error; the event is
/// then dropped, as a direct logging call would drop it.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    tag: Option<String>,
    failed: bool,
}

impl EventVisitor {
    fn render(&mut self, value: &dyn fmt::Debug) -> Option<String> {
        let mut rendered = String::new();
        if write!(rendered, "{value:?}").is_err() {
            self.failed = true;
            return None;
        }
        Some(rendered)
    }
}

impl tracing::field::Visit for EventVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = self.render(value),
            "tag" => {
                self.tag = self
                    .render(value)
                    .map(|tag| tag.trim_matches('"').to_owned());
            }
            _ => {}
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_owned()),
            "tag" => self.tag = Some(value.to_owned()),
            _ => {}
        }
    }
}

/// Installs a global tracing subscriber that routes events through `logger`.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing<W, C>(logger: Arc<Logger<W, C>>) -> Result<(), TryInitError>
where
    W: Write + Send + 'static,
    C: Clock + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(TagFilterLayer::new(logger))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorMode, FixedClock, LoglConfig};
    use logl_sink::LineEnding;
    use std::io;
    use std::sync::Mutex;
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Shared {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().expect("lock").clone()).expect("utf-8")
        }
    }

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn layered(config: &LoglConfig) -> (Shared, Arc<Logger<Shared, FixedClock>>) {
        let buffer = Shared::default();
        let logger = Arc::new(Logger::with_clock(buffer.clone(), FixedClock(1), config));
        (buffer, logger)
    }

    fn plain() -> LoglConfig {
        LoglConfig::default()
            .with_color(ColorMode::Never)
            .with_line_ending(LineEnding::Lf)
    }

    #[test]
    fn test_level_from_tracing() {
        type L = TagFilterLayer<Vec<u8>, FixedClock>;
        assert_eq!(L::level_from_tracing(&TracingLevel::ERROR), Level::Error);
        assert_eq!(L::level_from_tracing(&TracingLevel::WARN), Level::Warn);
        assert_eq!(L::level_from_tracing(&TracingLevel::INFO), Level::Info);
        assert_eq!(L::level_from_tracing(&TracingLevel::DEBUG), Level::Debug);
        assert_eq!(L::level_from_tracing(&TracingLevel::TRACE), Level::Debug);
    }

    #[test]
    fn test_tag_from_target() {
        type L = TagFilterLayer<Vec<u8>, FixedClock>;
        assert_eq!(L::tag_from_target("app::net"), "net");
        assert_eq!(L::tag_from_target("app::storage::disk"), "disk");
        assert_eq!(L::tag_from_target("plain"), "plain");
    }

    #[test]
    #[cfg_attr(
        any(feature = "floor-info", feature = "floor-warn", feature = "floor-error"),
        ignore = "needs every level enabled"
    )]
    fn events_are_filtered_by_target_tag() {
        let (buffer, logger) = layered(&plain().with_level("net", Level::Warn));
        let subscriber =
            tracing_subscriber::registry().with(TagFilterLayer::new(Arc::clone(&logger)));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "app::net", "hidden");
            tracing::warn!(target: "app::net", "retrying in {} ms", 250);
            tracing::debug!(target: "app::disk", "visible");
        });

        assert_eq!(
            buffer.text(),
            "W (1) net: retrying in 250 ms\nD (1) disk: visible\n"
        );
    }

    #[test]
    fn failing_display_in_event_is_dropped_without_panicking() {
        struct Refuses;

        impl fmt::Display for Refuses {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let (buffer, logger) = layered(&plain());
        let subscriber =
            tracing_subscriber::registry().with(TagFilterLayer::new(Arc::clone(&logger)));

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(target: "app::net", "{}", Refuses);
            tracing::error!(target: "app::net", "after");
        });

        assert_eq!(buffer.text(), "E (1) net: after\n");
    }

    #[test]
    fn explicit_tag_field_overrides_target() {
        let (buffer, logger) = layered(&plain().with_level("db", Level::Error));
        let subscriber =
            tracing_subscriber::registry().with(TagFilterLayer::new(Arc::clone(&logger)));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "app::net", tag = "db", "hidden");
            tracing::error!(target: "app::net", tag = "db", "pool exhausted");
        });

        assert_eq!(buffer.text(), "E (1) db: pool exhausted\n");
    }
}
