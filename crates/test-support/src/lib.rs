#![deny(unsafe_code)]

//! crates/test-support/src/lib.rs
//! Writers and clocks that let integration tests observe a
//! [`Logger`](logl::Logger) from the outside.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use logl::Clock;
use tempfile::TempDir;

/// Clock returning a settable value and counting how often it was read.
#[derive(Debug, Default)]
pub struct CountingClock {
    now: AtomicU64,
    calls: AtomicUsize,
}

impl CountingClock {
    /// Creates a clock that reports `now`.
    pub fn new(now: u64) -> Self {
        Self {
            now: AtomicU64::new(now),
            calls: AtomicUsize::new(0),
        }
    }

    /// Changes the reported time.
    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Number of times [`Clock::now`] has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Clock for CountingClock {
    fn now(&self) -> u64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.now.load(Ordering::SeqCst)
    }
}

/// In-memory writer whose contents stay readable after it is moved into a
/// logger. Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
    writes: Arc<AtomicUsize>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far as UTF-8, replacing invalid bytes.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Returns the written lines with their terminators stripped.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Number of `write` calls that reached this buffer.
    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Reports whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that rejects every write and flush.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

/// A log file inside a temporary directory that is removed on drop.
#[derive(Debug)]
pub struct TempLogFile {
    _dir: TempDir,
    path: PathBuf,
}

impl TempLogFile {
    /// Creates the directory and an empty `test.log` in it.
    pub fn create() -> io::Result<(Self, File)> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("test.log");
        let file = File::create(&path)?;
        Ok((Self { _dir: dir, path }, file))
    }

    /// Path of the log file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Reads the whole file back.
    pub fn read(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}
