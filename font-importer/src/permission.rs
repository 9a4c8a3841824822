use crate::error::Result;

/// Request code used when asking for `WRITE_EXTERNAL_STORAGE` at runtime
pub const STORAGE_REQUEST_CODE: i32 = 123321;

/// First SDK version (Android 11, "R") where writing arbitrary external
/// storage needs the "all files access" special permission
pub const ALL_FILES_ACCESS_SDK: i32 = 30;

/// The two ways Android has authorized writes to shared external storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionModel {
    /// A runtime-granted `WRITE_EXTERNAL_STORAGE` permission. The grant
    /// result comes back later through the activity's
    /// `onRequestPermissionsResult`.
    Legacy,
    /// The `MANAGE_EXTERNAL_STORAGE` special permission, only grantable by
    /// the user from a system settings screen.
    AllFilesAccess,
}

impl PermissionModel {
    pub fn for_sdk_version(sdk: i32) -> Self {
        if sdk >= ALL_FILES_ACCESS_SDK {
            PermissionModel::AllFilesAccess
        } else {
            PermissionModel::Legacy
        }
    }
}

/// Answers whether this process may currently write to external storage.
///
/// Implementations never cache: every call asks the platform again since the
/// user can revoke or grant access at any time.
pub trait StorageAccess {
    fn model(&self) -> PermissionModel;

    fn has_storage_write_access(&self) -> bool;

    /// Asks the platform for access, without waiting for the answer.
    ///
    /// For [`PermissionModel::Legacy`] the answer arrives later as a
    /// permissions result; for [`PermissionModel::AllFilesAccess`] the user is
    /// sent to the system settings and has to retry the import afterwards.
    fn request_access(&self) -> Result<()>;
}

impl<A: StorageAccess + ?Sized> StorageAccess for Box<A> {
    fn model(&self) -> PermissionModel {
        (**self).model()
    }

    fn has_storage_write_access(&self) -> bool {
        (**self).has_storage_write_access()
    }

    fn request_access(&self) -> Result<()> {
        (**self).request_access()
    }
}

impl<A: StorageAccess + ?Sized> StorageAccess for &A {
    fn model(&self) -> PermissionModel {
        (**self).model()
    }

    fn has_storage_write_access(&self) -> bool {
        (**self).has_storage_write_access()
    }

    fn request_access(&self) -> Result<()> {
        (**self).request_access()
    }
}
