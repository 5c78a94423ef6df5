//! Verbosity-aware diagnostic output.

use std::io::Write;
use std::sync::Mutex;

use tracing::warn;

/// Sink for human-readable diagnostics.
pub trait VerbosityWriter {
    fn is_very_verbose(&self) -> bool;

    /// Write `lines` joined by newlines, optionally followed by a newline.
    fn write(&self, lines: &[String], newline: bool);
}

impl<W: VerbosityWriter + ?Sized> VerbosityWriter for &W {
    fn is_very_verbose(&self) -> bool {
        (**self).is_very_verbose()
    }

    fn write(&self, lines: &[String], newline: bool) {
        (**self).write(lines, newline);
    }
}

/// Output verbosity, ordered from least to most chatty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    VeryVerbose,
    Debug,
}

/// [`VerbosityWriter`] over any byte sink.
pub struct ConsoleIo<W> {
    verbosity: Verbosity,
    out: Mutex<W>,
}

impl ConsoleIo<std::io::Stderr> {
    pub fn stderr(verbosity: Verbosity) -> Self {
        Self::new(std::io::stderr(), verbosity)
    }
}

impl<W: Write> ConsoleIo<W> {
    pub fn new(out: W, verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            out: Mutex::new(out),
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Recover the underlying sink.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write> VerbosityWriter for ConsoleIo<W> {
    fn is_very_verbose(&self) -> bool {
        self.verbosity >= Verbosity::VeryVerbose
    }

    // Diagnostics must not fail the caller, so write errors are only traced.
    fn write(&self, lines: &[String], newline: bool) {
        let mut buf = lines.join("\n");
        if newline {
            buf.push('\n');
        }
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = out.write_all(buf.as_bytes()) {
            warn!(err = %e, "failed to write diagnostic output");
        } else if let Err(e) = out.flush() {
            warn!(err = %e, "failed to flush diagnostic output");
        }
    }
}
