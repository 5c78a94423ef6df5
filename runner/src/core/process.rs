//! Unstarted, fully configured external process.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use crate::core::arguments::ProcessArguments;
use crate::core::error::Error;
use crate::core::quoting::{QuotingStyle, render_command_line};

/// Everything the execution layer needs to start a process.
///
/// Constructing a descriptor never spawns anything; [`Self::to_command`]
/// hands back a [`Command`] that the caller may start.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessDescriptor {
    arguments: ProcessArguments,
    command_line: String,
    timeout: f64,
    working_dir: Option<PathBuf>,
    env: Vec<(String, String)>,
}

impl ProcessDescriptor {
    /// Fails with [`Error::InvalidArguments`] when `arguments` is empty and
    /// with [`Error::InvalidTimeout`] when `timeout` is negative or not finite.
    pub fn new(
        arguments: ProcessArguments,
        timeout: f64,
        style: QuotingStyle,
    ) -> Result<Self, Error> {
        if arguments.is_empty() {
            return Err(Error::InvalidArguments(
                "cannot build a process without an executable".to_string(),
            ));
        }
        if !timeout.is_finite() || timeout < 0.0 {
            return Err(Error::InvalidTimeout(timeout));
        }
        let command_line = render_command_line(arguments.iter(), style);
        Ok(Self {
            arguments,
            command_line,
            timeout,
            working_dir: None,
            env: Vec::new(),
        })
    }

    pub fn program(&self) -> &str {
        &self.arguments[0]
    }

    /// Arguments after the executable.
    pub fn args(&self) -> &[String] {
        &self.arguments.values()[1..]
    }

    pub fn arguments(&self) -> &ProcessArguments {
        &self.arguments
    }

    /// The rendered, quoted command line.
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    /// Timeout in seconds. `0.0` means no timeout.
    pub fn timeout(&self) -> f64 {
        self.timeout
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        if self.timeout > 0.0 {
            Duration::try_from_secs_f64(self.timeout).ok()
        } else {
            None
        }
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    pub fn env(&self) -> &[(String, String)] {
        &self.env
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Build the platform command for this process without starting it.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(self.program());
        cmd.args(self.args());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }
}
