//! Process construction for a task runner that drives external tools.
//!
//! Tasks name the tool they need (`"phpcs"`, `"phpunit"`, ...). The
//! [`ProcessBuilder`] resolves that name to an executable, hands back an
//! argument list for the task to extend, and finally turns the list into an
//! unstarted [`ProcessDescriptor`] carrying the configured timeout.
//!
//! - **[`core`]**: Pure, deterministic logic (argument lists, quoting,
//!   process descriptors). No I/O, fully testable in isolation.
//! - **[`io`]**: Collaborators that touch the outside world (executable
//!   lookup, configuration files, console output) behind small traits, plus
//!   the builder itself.

pub mod core;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::arguments::ProcessArguments;
pub use crate::core::error::Error;
pub use crate::core::process::ProcessDescriptor;
pub use crate::core::quoting::{QuotingStyle, is_quoted, render_command_line};
pub use crate::io::builder::ProcessBuilder;
pub use crate::io::config::{ProcessConfig, RunnerConfig};
pub use crate::io::locator::{ExternalCommandLocator, PathLocator};
pub use crate::io::output::{ConsoleIo, Verbosity, VerbosityWriter};
