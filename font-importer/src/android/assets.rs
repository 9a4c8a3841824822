use std::ffi::CString;
use std::io;

use ndk::asset::{Asset, AssetManager};

use crate::assets::AssetStore;

/// The `assets/` folder packaged into the APK.
pub(crate) struct ApkAssetStore {
    manager: AssetManager,
}

impl ApkAssetStore {
    pub fn new(manager: AssetManager) -> Self {
        Self { manager }
    }
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("no asset at `{path}`"))
}

impl AssetStore for ApkAssetStore {
    type Reader = Asset;

    /// Note: `AAssetDir` only ever lists files, and a folder that isn't in
    /// the APK simply lists nothing.
    fn list(&self, group: &str) -> io::Result<Vec<String>> {
        let dir_name = CString::new(group)?;
        let dir = self
            .manager
            .open_dir(&dir_name)
            .ok_or_else(|| not_found(group))?;
        dir.map(|name| {
            name.into_string()
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
        })
        .collect()
    }

    fn open(&self, group: &str, name: &str) -> io::Result<Asset> {
        let path = format!("{group}/{name}");
        let c_path = CString::new(path.as_str())?;
        self.manager.open(&c_path).ok_or_else(|| not_found(&path))
    }
}
