//! Turns logical command names into configured, unstarted processes.
//!
//! [`ProcessBuilder`] holds three collaborators and no other state: a
//! [`ExternalCommandLocator`] for resolving executables, a [`VerbosityWriter`]
//! for echoing command lines, and a [`ProcessConfig`] that supplies the
//! timeout. Every call is a function of its inputs plus those collaborators,
//! so one builder can be shared by all tasks of a run.

use tracing::{debug, instrument};

use crate::core::arguments::ProcessArguments;
use crate::core::error::Error;
use crate::core::process::ProcessDescriptor;
use crate::core::quoting::QuotingStyle;
use crate::io::config::ProcessConfig;
use crate::io::locator::ExternalCommandLocator;
use crate::io::output::VerbosityWriter;

pub struct ProcessBuilder<L, W, C> {
    locator: L,
    io: W,
    config: C,
    quoting: QuotingStyle,
}

impl<L, W, C> ProcessBuilder<L, W, C>
where
    L: ExternalCommandLocator,
    W: VerbosityWriter,
    C: ProcessConfig,
{
    /// Builder that renders command lines with the host's quoting convention.
    pub fn new(locator: L, io: W, config: C) -> Self {
        Self {
            locator,
            io,
            config,
            quoting: QuotingStyle::for_host(),
        }
    }

    pub fn with_quoting(mut self, quoting: QuotingStyle) -> Self {
        self.quoting = quoting;
        self
    }

    pub fn quoting(&self) -> QuotingStyle {
        self.quoting
    }

    /// One-element argument set holding the resolved path of `command`.
    ///
    /// Locator failures are returned unchanged.
    pub fn create_arguments_for_command(&self, command: &str) -> Result<ProcessArguments, Error> {
        self.create_arguments_for_command_with(command, |path| path)
    }

    /// Like [`Self::create_arguments_for_command`], with `transform` applied
    /// once to the resolved path (never to `command`).
    #[instrument(skip_all, fields(command = %command))]
    pub fn create_arguments_for_command_with<F>(
        &self,
        command: &str,
        transform: F,
    ) -> Result<ProcessArguments, Error>
    where
        F: FnOnce(String) -> String,
    {
        let path = self.locator.locate(command)?;
        let executable = transform(path);
        debug!(executable = %executable, "created arguments for command");
        Ok(ProcessArguments::for_executable(executable))
    }

    /// Configure an unstarted process for `arguments`.
    ///
    /// The timeout is read from the config on every call. In very-verbose
    /// mode the rendered command line is written once before returning.
    #[instrument(skip_all, fields(args = arguments.count()))]
    pub fn build_process(&self, arguments: &ProcessArguments) -> Result<ProcessDescriptor, Error> {
        let timeout = self.config.timeout();
        let process = ProcessDescriptor::new(arguments.clone(), timeout, self.quoting)?;
        debug!(
            command_line = process.command_line(),
            timeout_secs = timeout,
            "built process"
        );

        if self.io.is_very_verbose() {
            self.io
                .write(&[format!("Command: {}", process.command_line())], true);
        }

        Ok(process)
    }
}
