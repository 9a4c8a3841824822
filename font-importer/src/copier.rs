use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use log::{error, trace};

use crate::assets::AssetStore;
use crate::error::{ImportError, Result};

/// A file that made it to the destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopiedFile {
    pub name: String,
    pub bytes: u64,
}

/// What a [`copy_group`] run did, file by file.
///
/// Only used for diagnostics: skipped files don't turn a run into a failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: Vec<CopiedFile>,
    pub skipped: Vec<String>,
}

impl CopyReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.copied.iter().map(|file| file.bytes).sum()
    }
}

/// Copies every file of `group` from `store` into the `dest` directory.
///
/// Destination files get the asset's base name and are truncated if they
/// already exist. Bytes are streamed through a `buffer_size` buffer.
///
/// The listing has to succeed and be non-empty, otherwise this fails with
/// [`ImportError::GroupListingFailed`] before touching `dest`. After that
/// each file is best-effort: a file that fails to copy is logged and skipped
/// and the loop moves on. The run succeeds once the loop is done.
pub fn copy_group<S>(store: &S, group: &str, dest: &Path, buffer_size: usize) -> Result<CopyReport>
where
    S: AssetStore + ?Sized,
{
    let names = store
        .list(group)
        .map_err(|source| ImportError::GroupListingFailed {
            group: group.to_owned(),
            source: Some(source),
        })?;
    if names.is_empty() {
        return Err(ImportError::GroupListingFailed {
            group: group.to_owned(),
            source: None,
        });
    }

    let mut report = CopyReport::default();
    for name in names {
        match copy_asset(store, group, &name, dest, buffer_size) {
            Ok(bytes) => {
                trace!("Copied {group}/{name} ({bytes} bytes)");
                report.copied.push(CopiedFile { name, bytes });
            }
            Err(source) => {
                let err = ImportError::PerFileCopyFailed {
                    name: format!("{group}/{name}"),
                    source,
                };
                error!("{err}");
                report.skipped.push(name);
            }
        }
    }
    Ok(report)
}

// Both handles are dropped when this returns, whichever way it returns
fn copy_asset<S>(store: &S, group: &str, name: &str, dest: &Path, buffer_size: usize) -> io::Result<u64>
where
    S: AssetStore + ?Sized,
{
    let asset = store.open(group, name)?;
    let mut reader = BufReader::with_capacity(buffer_size.max(1), asset);
    let mut file = File::create(dest.join(name))?;
    io::copy(&mut reader, &mut file)
}
