//! Test utilities for render sinks.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::io::{self, Write};

/// A sink that accepts a fixed number of bytes, then fails every write
/// with [`io::ErrorKind::BrokenPipe`].
#[derive(Debug, Default)]
pub struct FailingWriter {
    budget: usize,
    written: Vec<u8>,
}

impl FailingWriter {
    /// Accept `budget` bytes before failing.
    pub fn after(budget: usize) -> Self {
        Self {
            budget,
            written: Vec::new(),
        }
    }

    /// Bytes accepted before the failure.
    pub fn written(&self) -> &str {
        std::str::from_utf8(&self.written).unwrap_or_default()
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        let n = buf.len().min(self.budget);
        self.written.extend_from_slice(&buf[..n]);
        self.budget -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
