//! Destinations for diagnostic lines.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::DiagnosticStream;

/// In-memory line sink, cloneable across workers.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Written lines, without terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Where a [`TestContext`](crate::TestContext) writes its `FAIL`/`REPORT` lines.
///
/// Cloning shares the destination; each line is written under one lock so
/// concurrent workers never interleave inside a line.
#[derive(Clone, Default)]
pub enum DiagnosticSink {
    #[default]
    Stderr,
    Stdout,
    Buffer(SharedBuffer),
    Writer(Arc<Mutex<Box<dyn Write + Send>>>),
    /// Drop every line.
    Discard,
}

impl DiagnosticSink {
    /// Wrap an arbitrary writer (a log file, a socket, ...).
    #[must_use]
    pub fn writer(w: impl Write + Send + 'static) -> Self {
        Self::Writer(Arc::new(Mutex::new(Box::new(w))))
    }

    /// Write one line followed by `\n`.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        match self {
            Self::Stderr => writeln!(std::io::stderr().lock(), "{line}"),
            Self::Stdout => writeln!(std::io::stdout().lock(), "{line}"),
            Self::Buffer(buf) => {
                let mut bytes = buf.bytes.lock();
                bytes.extend_from_slice(line.as_bytes());
                bytes.push(b'\n');
                Ok(())
            }
            Self::Writer(w) => writeln!(w.lock(), "{line}"),
            Self::Discard => Ok(()),
        }
    }

    pub fn flush(&self) -> std::io::Result<()> {
        match self {
            Self::Stderr => std::io::stderr().flush(),
            Self::Stdout => std::io::stdout().flush(),
            Self::Writer(w) => w.lock().flush(),
            Self::Buffer(_) | Self::Discard => Ok(()),
        }
    }
}

impl From<DiagnosticStream> for DiagnosticSink {
    fn from(stream: DiagnosticStream) -> Self {
        match stream {
            DiagnosticStream::Stderr => Self::Stderr,
            DiagnosticStream::Stdout => Self::Stdout,
        }
    }
}

impl From<SharedBuffer> for DiagnosticSink {
    fn from(buf: SharedBuffer) -> Self {
        Self::Buffer(buf)
    }
}

impl std::fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stderr => f.write_str("Stderr"),
            Self::Stdout => f.write_str("Stdout"),
            Self::Buffer(buf) => f.debug_tuple("Buffer").field(buf).finish(),
            Self::Writer(_) => f.write_str("Writer(..)"),
            Self::Discard => f.write_str("Discard"),
        }
    }
}
