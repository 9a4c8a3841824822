use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::notice::Notice;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("No permission to write to external storage")]
    PermissionDenied,

    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The asset listing failed or came back empty.
    ///
    /// Both cases are reported the same way to the user, `source` is only
    /// set when the asset store actually returned an error.
    #[error("Asset group `{group}` is missing or empty")]
    GroupListingFailed {
        group: String,
        #[source]
        source: Option<io::Error>,
    },

    /// Never aborts an import, the file is logged and skipped.
    #[error("Failed to copy asset `{name}`: {source}")]
    PerFileCopyFailed {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Java VM or JNI error, including Java exceptions: {0}")]
    JavaError(String),
}

impl ImportError {
    /// The user-visible notice an import aborted by this error ends with.
    pub fn notice(&self) -> Notice {
        match self {
            ImportError::PermissionDenied => Notice::NoPermission,
            _ => Notice::UnknownFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;

// XXX: we don't want to expose jni-rs in the public API
// so we have an internal error type that the platform code
// uses and then strip it down to `ImportError::JavaError`
// at the boundary.
#[cfg(target_os = "android")]
#[derive(Error, Debug)]
pub(crate) enum InternalAppError {
    #[error("A JNI error")]
    JniError(jni::errors::JniError),
    #[error("A Java Exception was thrown via a JNI method call")]
    JniException(String),
    #[error("A Java VM error")]
    JvmError(jni::errors::Error),
}

#[cfg(target_os = "android")]
pub(crate) type InternalResult<T> = std::result::Result<T, InternalAppError>;

#[cfg(target_os = "android")]
impl From<jni::errors::Error> for InternalAppError {
    fn from(value: jni::errors::Error) -> Self {
        InternalAppError::JvmError(value)
    }
}

#[cfg(target_os = "android")]
impl From<jni::errors::JniError> for InternalAppError {
    fn from(value: jni::errors::JniError) -> Self {
        InternalAppError::JniError(value)
    }
}

#[cfg(target_os = "android")]
impl From<InternalAppError> for ImportError {
    fn from(value: InternalAppError) -> Self {
        match value {
            InternalAppError::JniError(err) => ImportError::JavaError(err.to_string()),
            InternalAppError::JniException(msg) => ImportError::JavaError(msg),
            InternalAppError::JvmError(err) => ImportError::JavaError(err.to_string()),
        }
    }
}
