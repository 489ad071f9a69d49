//! The byte stream status lines end up in, plus the "is this a terminal?" check that decides
//! whether escapes are worth emitting.

use std::fmt;
use std::fs::File;
use std::io::{self, IsTerminal, Write};

/// Where emissions go. Standard streams and files carry a descriptor the TTY check can ask
/// about; arbitrary writers do not and are always treated as non-terminals.
#[derive(Default)]
pub enum Sink {
    /// Diagnostics conventionally go to stderr so they don't mix with a tool's real output.
    #[default]
    Stderr,
    Stdout,
    File(File),
    /// In-memory buffers, pipes, sockets: anything `Write`.
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    /// Wraps an arbitrary writer.
    #[must_use]
    pub fn writer(w: impl Write + Send + 'static) -> Self {
        Self::Writer(Box::new(w))
    }

    /// True only when the underlying descriptor is a terminal device. Never fails.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Stderr => io::stderr().is_terminal(),
            Self::Stdout => io::stdout().is_terminal(),
            Self::File(f) => f.is_terminal(),
            Self::Writer(_) => false,
        }
    }

    /// Hands the whole line over in one call.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    pub fn write_line(&mut self, line: &[u8]) -> Result<(), crate::Error> {
        match self {
            Self::Stderr => io::stderr().lock().write_all(line)?,
            Self::Stdout => io::stdout().lock().write_all(line)?,
            Self::File(f) => f.write_all(line)?,
            Self::Writer(w) => w.write_all(line)?,
        }
        Ok(())
    }

    /// Buffered writers may hold the tail of the output until flushed.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    pub fn flush(&mut self) -> Result<(), crate::Error> {
        match self {
            Self::Stderr => io::stderr().flush()?,
            Self::Stdout => io::stdout().flush()?,
            Self::File(f) => f.flush()?,
            Self::Writer(w) => w.flush()?,
        }
        Ok(())
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr => f.write_str("Sink::Stderr"),
            Self::Stdout => f.write_str("Sink::Stdout"),
            Self::File(file) => f.debug_tuple("Sink::File").field(file).finish(),
            Self::Writer(_) => f.write_str("Sink::Writer(..)"),
        }
    }
}

impl From<File> for Sink {
    fn from(f: File) -> Self {
        Self::File(f)
    }
}

impl From<Box<dyn Write + Send>> for Sink {
    fn from(w: Box<dyn Write + Send>) -> Self {
        Self::Writer(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_is_never_a_terminal() {
        assert!(!Sink::writer(Vec::new()).is_terminal());
    }

    #[test]
    fn regular_file_is_not_a_terminal() {
        let file = tempfile::tempfile().unwrap();
        assert!(!Sink::from(file).is_terminal());
    }

    #[test]
    fn write_line_reaches_writer() {
        let buf = Shared::default();
        let mut sink = Sink::writer(buf.clone());
        sink.write_line(b"hello\n").unwrap();
        sink.flush().unwrap();
        assert_eq!(buf.0.lock().unwrap().as_slice(), b"hello\n");
    }

    #[test]
    fn default_is_stderr() {
        assert!(matches!(Sink::default(), Sink::Stderr));
    }
}
