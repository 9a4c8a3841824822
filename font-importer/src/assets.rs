//! Read-only stores of bundled files, organized into named groups.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::warn;

/// A read-only bundle of files grouped into folder-like namespaces.
///
/// The importer never writes to, or deletes from, a store.
pub trait AssetStore {
    type Reader: Read;

    /// Names of the files in `group`, without the group prefix.
    ///
    /// A group that does not exist may either fail or list nothing, callers
    /// treat both the same way.
    fn list(&self, group: &str) -> io::Result<Vec<String>>;

    fn open(&self, group: &str, name: &str) -> io::Result<Self::Reader>;
}

impl<S: AssetStore + ?Sized> AssetStore for &S {
    type Reader = S::Reader;

    fn list(&self, group: &str) -> io::Result<Vec<String>> {
        (**self).list(group)
    }

    fn open(&self, group: &str, name: &str) -> io::Result<Self::Reader> {
        (**self).open(group, name)
    }
}

/// An [`AssetStore`] backed by a plain directory, each sub-directory being
/// one group.
///
/// Mirrors how the APK's `assets/` folder is laid out before packaging.
#[derive(Clone, Debug)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetStore for DirAssetStore {
    type Reader = File;

    /// Lists regular files only (sorted), like the NDK asset directory API
    /// does. Sub-directories and non UTF-8 names are left out.
    fn list(&self, group: &str) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.root.join(group))? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => warn!("Ignoring asset with non UTF-8 name {name:?}"),
            }
        }
        names.sort();
        Ok(names)
    }

    fn open(&self, group: &str, name: &str) -> io::Result<File> {
        File::open(self.root.join(group).join(name))
    }
}
