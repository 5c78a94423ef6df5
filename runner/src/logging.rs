//! Development-time tracing for the process builder.
//!
//! Very-verbose command echoing goes through [`crate::io::output`] and is
//! product output. Tracing is for diagnosing the builder itself and is only
//! visible when a subscriber is installed.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize a tracing subscriber for the binary embedding this crate.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format. Returns `false` if a global subscriber
/// was already installed.
///
/// # Example
/// ```bash
/// RUST_LOG=task_runner=debug my-task-runner run
/// ```
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        init();
        assert!(!init());
    }
}
