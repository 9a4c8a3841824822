use jni::objects::{JObject, JValue};
use jni::JNIEnv;
use log::{info, warn};

use crate::error::Result;
use crate::intent::{package_uri, Action, Intent};
use crate::jni_utils::{package_name, JavaContext};
use crate::permission::{PermissionModel, StorageAccess, STORAGE_REQUEST_CODE};

const WRITE_EXTERNAL_STORAGE: &str = "android.permission.WRITE_EXTERNAL_STORAGE";

/// `PackageManager.PERMISSION_GRANTED`
const PERMISSION_GRANTED: i32 = 0;

/// Picks the [`StorageAccess`] matching the device's SDK version.
pub(crate) fn for_sdk_version(java: JavaContext, sdk: i32) -> Box<dyn StorageAccess> {
    match PermissionModel::for_sdk_version(sdk) {
        PermissionModel::Legacy => Box::new(LegacyAccess { java }),
        PermissionModel::AllFilesAccess => Box::new(AllFilesAccess { java }),
    }
}

/// Runtime `WRITE_EXTERNAL_STORAGE` permission, Android 10 and older
pub(crate) struct LegacyAccess {
    java: JavaContext,
}

impl StorageAccess for LegacyAccess {
    fn model(&self) -> PermissionModel {
        PermissionModel::Legacy
    }

    fn has_storage_write_access(&self) -> bool {
        let result = self.java.with_activity(|env, activity| {
            let permission = env.new_string(WRITE_EXTERNAL_STORAGE)?;
            let status = env
                .call_method(
                    activity,
                    "checkSelfPermission",
                    "(Ljava/lang/String;)I",
                    &[JValue::Object(&permission)],
                )?
                .i()?;
            Ok(status == PERMISSION_GRANTED)
        });
        match result {
            Ok(granted) => granted,
            Err(err) => {
                warn!("Failed to check {WRITE_EXTERNAL_STORAGE}: {err}");
                false
            }
        }
    }

    fn request_access(&self) -> Result<()> {
        info!("Requesting {WRITE_EXTERNAL_STORAGE}");
        self.java.with_activity(|env, activity| {
            let permission = env.new_string(WRITE_EXTERNAL_STORAGE)?;
            let permissions = env.new_object_array(1, "java/lang/String", &permission)?;
            env.call_method(
                activity,
                "requestPermissions",
                "([Ljava/lang/String;I)V",
                &[JValue::Object(&permissions), JValue::Int(STORAGE_REQUEST_CODE)],
            )?;
            Ok(())
        })?;
        Ok(())
    }
}

/// "All files access" special permission, Android 11 and newer
pub(crate) struct AllFilesAccess {
    java: JavaContext,
}

impl StorageAccess for AllFilesAccess {
    fn model(&self) -> PermissionModel {
        PermissionModel::AllFilesAccess
    }

    fn has_storage_write_access(&self) -> bool {
        let result = self.java.with_activity(|env, _| {
            env.call_static_method(
                "android/os/Environment",
                "isExternalStorageManager",
                "()Z",
                &[],
            )?
            .z()
        });
        match result {
            Ok(granted) => granted,
            Err(err) => {
                warn!("Failed to query all files access: {err}");
                false
            }
        }
    }

    fn request_access(&self) -> Result<()> {
        info!("Sending user to the all files access settings");
        self.java.with_activity(|env, activity| {
            let uri = package_uri(&package_name(env, activity)?);
            match open_settings(env, activity, Action::ManageAppAllFilesAccessPermission, &uri) {
                Ok(()) => Ok(()),
                // Some vendor builds don't ship the dedicated screen
                Err(jni::errors::Error::JavaException) => {
                    env.exception_clear()?;
                    warn!("All files access screen unavailable, opening app details");
                    open_settings(env, activity, Action::ApplicationDetailsSettings, &uri)
                }
                Err(err) => Err(err),
            }
        })?;
        Ok(())
    }
}

fn open_settings<'local>(
    env: &mut JNIEnv<'local>,
    activity: &JObject<'_>,
    action: Action,
    uri: &str,
) -> jni::errors::Result<()> {
    Intent::new_with_uri(env, action, uri)?.start_activity(env, activity)
}
