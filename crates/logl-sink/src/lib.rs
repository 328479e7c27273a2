#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logl-sink/src/lib.rs
//!
//! # Overview
//!
//! `logl-sink` provides the write side of the `logl` logging facility: a
//! [`LineSink`] that wraps any [`std::io::Write`] implementor and emits one
//! complete log line per call. The terminator is appended to the caller's
//! buffer so payload and terminator reach the writer in a single `write_all`.
//!
//! # Invariants
//!
//! - Every successful write ends with the sink's [`LineEnding`].
//! - The sink flushes after each line so diagnostics appear promptly.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer. The logger that owns the sink decides whether to act on
//! them; `logl` discards them.
//!
//! # Examples
//!
//! ```
//! use logl_sink::{LineEnding, LineSink};
//!
//! let mut sink = LineSink::with_line_ending(Vec::new(), LineEnding::Lf);
//! sink.write_line("I (0) net: ready")?;
//! sink.write_line(format!("W ({}) {}: {}", 1, "disk", "slow"))?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "I (0) net: ready\nW (1) disk: slow\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod line_ending;
mod sink;

pub use line_ending::{LineEnding, ParseLineEndingError};
pub use sink::LineSink;
