//! Runner configuration stored in TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default process timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 60.0;

/// Source of the timeout applied to every built process.
///
/// Implementations are read on every build, so a changed value is picked up
/// by the next process without rebuilding anything.
pub trait ProcessConfig {
    /// Timeout in seconds. `0.0` disables the timeout.
    fn timeout(&self) -> f64;
}

impl<C: ProcessConfig + ?Sized> ProcessConfig for &C {
    fn timeout(&self) -> f64 {
        (**self).timeout()
    }
}

/// Runner configuration (TOML).
///
/// Missing fields default to the values of [`RunnerConfig::default`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunnerConfig {
    pub process: ProcessSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProcessSettings {
    /// Seconds before an external command is considered hung. Integers are accepted.
    pub timeout: f64,
}

impl Default for ProcessSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<()> {
        let timeout = self.process.timeout;
        if !timeout.is_finite() || timeout < 0.0 {
            return Err(anyhow!(
                "process.timeout must be a finite number >= 0, got {timeout}"
            ));
        }
        Ok(())
    }
}

impl ProcessConfig for RunnerConfig {
    fn timeout(&self) -> f64 {
        self.process.timeout
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RunnerConfig::default()`.
pub fn load_config(path: &Path) -> Result<RunnerConfig> {
    if !path.exists() {
        let cfg = RunnerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RunnerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &RunnerConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
