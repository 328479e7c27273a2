use super::LineSink;
use std::io::{self, Write};

impl<W> LineSink<W>
where
    W: Write,
{
    /// Writes `line` followed by the sink's [`LineEnding`](crate::LineEnding).
    ///
    /// `line` must not carry its own terminator. Passing an owned `String` or
    /// `Vec<u8>` reuses its allocation for the terminated line.
    pub fn write_line(&mut self, line: impl Into<Vec<u8>>) -> io::Result<()> {
        let mut bytes = line.into();
        bytes.extend_from_slice(self.line_ending.as_bytes());
        self.writer
            .write_all(&bytes)
            .and_then(|()| self.writer.flush())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineEnding;

    #[derive(Default)]
    struct CountingWriter {
        buffer: Vec<u8>,
        writes: usize,
        flushes: usize,
    }

    impl Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_line_appends_crlf_by_default() {
        let mut sink = LineSink::new(Vec::new());
        sink.write_line("I (1) net: up").expect("write succeeds");
        sink.write_line(b"E (2) net: down".to_vec()).expect("write succeeds");

        assert_eq!(
            sink.into_inner(),
            b"I (1) net: up\r\nE (2) net: down\r\n".to_vec()
        );
    }

    #[test]
    fn write_line_honours_lf() {
        let mut sink = LineSink::with_line_ending(Vec::new(), LineEnding::Lf);
        sink.write_line(String::from("ready")).expect("write succeeds");

        assert_eq!(sink.line_ending(), LineEnding::Lf);
        assert_eq!(sink.get_ref(), &b"ready\n".to_vec());
    }

    #[test]
    fn each_line_reaches_writer_in_one_write_and_one_flush() {
        let mut sink = LineSink::new(CountingWriter::default());
        sink.write_line(format!("{} ({}) {}: {}", 'W', 3, "disk", "slow"))
            .expect("write succeeds");

        let writer = sink.into_inner();
        assert_eq!(writer.writes, 1);
        assert_eq!(writer.flushes, 1);
        assert_eq!(writer.buffer, b"W (3) disk: slow\r\n".to_vec());
    }

    #[test]
    fn writer_errors_surface() {
        let mut sink = LineSink::new(BrokenWriter);
        let error = sink.write_line("lost").expect_err("write fails");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }
}
