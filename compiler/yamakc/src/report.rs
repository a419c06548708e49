//! Output sinks for a compiler run.
//!
//! The driver never prints directly; every line goes through a
//! [`Reporter`], so the same run can write to the terminal, be captured in
//! a test, or feed some other front end.

use std::io::{self, Write};

/// Receives each line of output produced by a run.
pub trait Reporter {
    /// Report one line. `is_error` marks diagnostics and failure banners.
    fn report(&mut self, message: &str, is_error: bool);
}

/// Writes regular output to stdout and errors to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdReporter;

impl Reporter for StdReporter {
    fn report(&mut self, message: &str, is_error: bool) {
        // Write failures are logged, never propagated.
        let result = if is_error {
            writeln!(io::stderr().lock(), "{message}")
        } else {
            writeln!(io::stdout().lock(), "{message}")
        };
        if let Err(err) = result {
            tracing::debug!(%err, "failed to write report line");
        }
    }
}

/// Keeps every reported line in memory.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BufferReporter {
    lines: Vec<(String, bool)>,
}

impl BufferReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines in report order, with their error flag.
    pub fn lines(&self) -> &[(String, bool)] {
        &self.lines
    }

    /// Lines reported as regular output.
    pub fn output(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(|(_, is_error)| !is_error)
            .map(|(line, _)| line.as_str())
    }

    /// Lines reported as errors.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(|(_, is_error)| *is_error)
            .map(|(line, _)| line.as_str())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Reporter for BufferReporter {
    fn report(&mut self, message: &str, is_error: bool) {
        self.lines.push((message.to_owned(), is_error));
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, message: &str, is_error: bool) {
        (**self).report(message, is_error);
    }
}
