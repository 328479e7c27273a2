use std::fmt;

use crate::line_ending::LineEnding;

mod writing;

/// Streaming sink that writes whole log lines into an [`std::io::Write`] target.
///
/// Each call to [`write_line`](Self::write_line) takes ownership of the
/// rendered payload, appends the configured [`LineEnding`] in place and hands
/// the result to the writer with a single `write_all`, followed by a flush.
///
/// # Examples
///
/// Collect lines into a [`Vec<u8>`] with the default `\r\n` terminator:
///
/// ```
/// use logl_sink::LineSink;
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_line("E (7) net: failed: 7")?;
///
/// assert_eq!(sink.into_inner(), b"E (7) net: failed: 7\r\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct LineSink<W> {
    writer: W,
    line_ending: LineEnding,
}

impl<W> LineSink<W> {
    /// Creates a sink that terminates each line with [`LineEnding::CrLf`].
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_ending(writer, LineEnding::default())
    }

    /// Creates a sink with the provided [`LineEnding`].
    #[must_use]
    pub const fn with_line_ending(writer: W, line_ending: LineEnding) -> Self {
        Self {
            writer,
            line_ending,
        }
    }

    /// Returns the [`LineEnding`] appended to every line.
    #[must_use]
    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for LineSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for LineSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink")
            .field("writer", &self.writer)
            .field("line_ending", &self.line_ending)
            .finish()
    }
}
