use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, trace};

use crate::error::{ImportError, Result};

/// Makes sure `path` is a directory, creating just that one level if needed.
///
/// The parent has to exist already. An existing directory (including one
/// created concurrently by someone else) is a success, anything else that
/// keeps the directory from existing afterwards is a
/// [`ImportError::DirectoryCreateFailed`].
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        trace!("{} already exists", path.display());
        return Ok(());
    }
    match fs::create_dir(path) {
        Ok(()) => {
            info!("Created {}", path.display());
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(source) => Err(ImportError::DirectoryCreateFailed {
            path: path.to_owned(),
            source,
        }),
    }
}

/// A destination directory together with the fixed chain of directories
/// leading to it, outermost first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    chain: Vec<PathBuf>,
}

impl Destination {
    pub(crate) fn new(chain: Vec<PathBuf>) -> Self {
        debug_assert!(!chain.is_empty());
        Self { chain }
    }

    /// The directory files are written into
    pub fn path(&self) -> &Path {
        self.chain.last().map(PathBuf::as_path).unwrap_or(Path::new(""))
    }

    pub fn chain(&self) -> &[PathBuf] {
        &self.chain
    }

    /// Ensures every level of the chain, stopping at the first failure.
    pub fn ensure(&self) -> Result<&Path> {
        for dir in &self.chain {
            ensure_directory(dir)?;
        }
        Ok(self.path())
    }
}
