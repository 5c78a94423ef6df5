//! Resolution of logical command names to executable paths.
//!
//! The [`ExternalCommandLocator`] trait is the only thing the process builder
//! depends on. [`PathLocator`] is the filesystem-backed implementation: it
//! checks the project's bin directory before `PATH`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::core::error::Error;

/// Maps a logical command name to an executable path.
pub trait ExternalCommandLocator {
    /// Fails with [`Error::CommandNotFound`] when nothing matches `name`.
    fn locate(&self, name: &str) -> Result<String, Error>;
}

impl<L: ExternalCommandLocator + ?Sized> ExternalCommandLocator for &L {
    fn locate(&self, name: &str) -> Result<String, Error> {
        (**self).locate(name)
    }
}

/// Extensions tried on Windows when the bare name is not a file.
const WINDOWS_EXTENSIONS: [&str; 4] = [".exe", ".bat", ".cmd", ".com"];

/// Searches an optional bin directory, then a fixed list of directories.
#[derive(Debug, Clone, Default)]
pub struct PathLocator {
    bin_dir: Option<PathBuf>,
    search_dirs: Vec<PathBuf>,
}

impl PathLocator {
    pub fn new<I, P>(search_dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            bin_dir: None,
            search_dirs: search_dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Snapshot the current `PATH`.
    pub fn from_env() -> Self {
        Self::from_path_var(std::env::var_os("PATH"))
    }

    pub fn from_path_var(path: Option<OsString>) -> Self {
        let dirs = path
            .map(|path| std::env::split_paths(&path).collect())
            .unwrap_or_default();
        Self {
            bin_dir: None,
            search_dirs: dirs,
        }
    }

    /// Check `dir` before any search directory.
    pub fn with_bin_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bin_dir = Some(dir.into());
        self
    }

    pub fn search_dirs(&self) -> impl Iterator<Item = &Path> {
        self.bin_dir
            .iter()
            .chain(self.search_dirs.iter())
            .map(PathBuf::as_path)
    }

    fn find(&self, name: &str) -> Option<PathBuf> {
        let candidate = Path::new(name);
        if candidate.components().count() > 1 {
            return is_executable(candidate).then(|| candidate.to_path_buf());
        }
        self.search_dirs().find_map(|dir| find_in_dir(dir, name))
    }
}

impl ExternalCommandLocator for PathLocator {
    fn locate(&self, name: &str) -> Result<String, Error> {
        let found = self
            .find(name)
            .ok_or_else(|| Error::command_not_found(name))?;
        debug!(command = name, path = %found.display(), "located external command");
        Ok(found.to_string_lossy().into_owned())
    }
}

fn find_in_dir(dir: &Path, name: &str) -> Option<PathBuf> {
    let direct = dir.join(name);
    trace!(candidate = %direct.display(), "probing");
    if is_executable(&direct) {
        return Some(direct);
    }
    if !cfg!(windows) {
        return None;
    }
    WINDOWS_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}{ext}")))
        .find(|candidate| candidate.is_file())
}

/// A regular file with at least one execute bit set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

/// Any regular file; Windows marks executables by extension.
#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
