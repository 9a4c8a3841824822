//! Copies the fonts bundled with this app into the directory PCEngine loads
//! fonts from.
//!
//! The user picks one of the bundled [`LanguageGroup`]s and the [`Importer`]
//! then:
//!
//! 1. checks that the app may write to external storage ([`StorageAccess`]),
//! 2. ensures `<external storage>/PCEngine/.fonts/` exists, one level at a
//!    time,
//! 3. lists the group's folder in the [`AssetStore`] and
//! 4. copies every file into the destination, skipping (and logging) files
//!    that fail.
//!
//! The result is reported to the user as a single [`Notice`].
//!
//! # Android
//!
//! On Android the crate is packaged as a `NativeActivity` application. The
//! activity is a small Java subclass of `android.app.NativeActivity` that
//! hosts the language picker and is expected to provide:
//!
//! ```java
//! native void notifyImportRequested(int pickerPosition);
//! native void notifyPermissionsResult(int requestCode, boolean granted);
//! void showNotice(String text); // posts a toast on the UI thread
//! ```
//!
//! The native methods only queue a [`Command`]; imports run one after the
//! other on the `android_main` thread.

mod assets;
mod config;
mod copier;
mod destination;
mod error;
mod importer;
mod language;
mod notice;
mod permission;
mod util;

#[cfg(target_os = "android")]
mod android;
#[cfg(target_os = "android")]
mod intent;
#[cfg(target_os = "android")]
mod jni_utils;

pub use assets::{AssetStore, DirAssetStore};
pub use config::{DestinationLayout, ImportConfig, DEFAULT_BUFFER_SIZE, FONT_DIR, PC_ENGINE_DIR};
pub use copier::{copy_group, CopiedFile, CopyReport};
pub use destination::{ensure_directory, Destination};
pub use error::{ImportError, Result};
pub use importer::{Command, ImportOutcome, ImportState, Importer};
pub use language::LanguageGroup;
pub use notice::{Notice, Notifier};
pub use permission::{PermissionModel, StorageAccess, ALL_FILES_ACCESS_SDK, STORAGE_REQUEST_CODE};
pub use util::parse_sdk_version;

#[test]
fn test_importer_is_send_sync() {
    fn needs_send_sync<T: Send + Sync>() {}
    needs_send_sync::<ImportError>();
    needs_send_sync::<Importer<DirAssetStore, Box<dyn StorageAccess + Send + Sync>>>();
}
