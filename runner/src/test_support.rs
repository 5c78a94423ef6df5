//! Test-only collaborators for the process builder.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::error::Error;
use crate::io::config::ProcessConfig;
use crate::io::locator::ExternalCommandLocator;
use crate::io::output::VerbosityWriter;

/// Locator backed by a fixed name → path table.
#[derive(Debug, Clone, Default)]
pub struct StaticLocator {
    paths: HashMap<String, String>,
}

impl StaticLocator {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            paths: entries
                .into_iter()
                .map(|(name, path)| (name.into(), path.into()))
                .collect(),
        }
    }
}

impl ExternalCommandLocator for StaticLocator {
    fn locate(&self, name: &str) -> Result<String, Error> {
        self.paths
            .get(name)
            .cloned()
            .ok_or_else(|| Error::command_not_found(name))
    }
}

/// Writer that records every `write` call.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    very_verbose: bool,
    writes: Mutex<Vec<(Vec<String>, bool)>>,
}

impl RecordingWriter {
    pub fn new(very_verbose: bool) -> Self {
        Self {
            very_verbose,
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Recorded `(lines, newline)` pairs in call order.
    pub fn writes(&self) -> Vec<(Vec<String>, bool)> {
        self.writes.lock().expect("writes lock").clone()
    }
}

impl VerbosityWriter for RecordingWriter {
    fn is_very_verbose(&self) -> bool {
        self.very_verbose
    }

    fn write(&self, lines: &[String], newline: bool) {
        self.writes
            .lock()
            .expect("writes lock")
            .push((lines.to_vec(), newline));
    }
}

/// Config with a constant timeout.
#[derive(Debug, Clone, Copy)]
pub struct FixedConfig(pub f64);

impl ProcessConfig for FixedConfig {
    fn timeout(&self) -> f64 {
        self.0
    }
}

/// Config whose timeout can be changed between builds.
#[derive(Debug)]
pub struct SharedConfig {
    timeout: Mutex<f64>,
}

impl SharedConfig {
    pub fn new(timeout: f64) -> Self {
        Self {
            timeout: Mutex::new(timeout),
        }
    }

    pub fn set_timeout(&self, timeout: f64) {
        *self.timeout.lock().expect("timeout lock") = timeout;
    }
}

impl ProcessConfig for SharedConfig {
    fn timeout(&self) -> f64 {
        *self.timeout.lock().expect("timeout lock")
    }
}
