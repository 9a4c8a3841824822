//! The JNI calls we make in this crate are not part of a Java native method
//! implementation, they happen on the `android_main` thread. So we can't
//! assume we have a JNI local frame that is going to unwind and free local
//! references, and we also can't just leave exceptions to get thrown when
//! returning to Java.
//!
//! These utilities help us check + clear exceptions and map them into Rust Errors.

use std::sync::Arc;

use jni::{
    objects::{GlobalRef, JObject, JString, JValue},
    JNIEnv, JavaVM,
};

use crate::error::{InternalAppError, InternalResult};

/// The Java VM together with a global reference to our activity.
#[derive(Clone)]
pub(crate) struct JavaContext {
    jvm: Arc<JavaVM>,
    activity: GlobalRef,
}

impl JavaContext {
    /// Builds a context from the VM and activity pointers that the glue
    /// registered with `ndk-context`.
    pub fn from_android_context() -> InternalResult<Self> {
        let cx = ndk_context::android_context();
        let jvm = unsafe { JavaVM::from_raw(cx.vm().cast())? };
        let activity = {
            let mut env = jvm.attach_current_thread_permanently()?;
            let activity = unsafe { JObject::from_raw(cx.context().cast()) };
            env.new_global_ref(activity)?
        };
        Ok(Self {
            jvm: Arc::new(jvm),
            activity,
        })
    }

    /// Runs `f` in a fresh local frame with the activity object.
    ///
    /// Any Java exception raised by `f` is cleared and turned into an error.
    pub fn with_activity<T, F>(&self, f: F) -> InternalResult<T>
    where
        F: FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> jni::errors::Result<T>,
    {
        // Attach 'permanently' to avoid any chance of detaching the thread from the VM
        let mut env = self.jvm.attach_current_thread_permanently()?;
        let activity = self.activity.as_obj();
        env.with_local_frame::<_, _, InternalAppError>(16, |env| {
            f(env, activity).map_err(|err| clear_and_map_exception_to_err(env, err))
        })
    }
}

/// Use with `.map_err()` to map `jni::errors::Error::JavaException` into a
/// richer error based on the actual contents of the `JThrowable`
///
/// (The `jni` crate doesn't do that automatically since it's more
/// common to let the exception get thrown when returning to Java)
///
/// This will also clear the exception
pub(crate) fn clear_and_map_exception_to_err(
    env: &mut JNIEnv<'_>,
    err: jni::errors::Error,
) -> InternalAppError {
    if matches!(err, jni::errors::Error::JavaException) {
        let result = env.with_local_frame::<_, _, InternalAppError>(5, |env| {
            let e = env.exception_occurred()?;
            env.exception_clear()?;
            if e.is_null() {
                return Ok("UNKNOWN (no pending exception)".to_owned());
            }

            let msg = env
                .call_method(&e, "toString", "()Ljava/lang/String;", &[])?
                .l()?;
            let msg = JString::from(msg);
            let msg: String = env.get_string(&msg)?.into();
            Ok(msg)
        });

        match result {
            Ok(msg) => InternalAppError::JniException(msg),
            Err(err) => InternalAppError::JniException(format!(
                "UNKNOWN (Failed to query JThrowable: {err:?})"
            )),
        }
    } else {
        err.into()
    }
}

pub(crate) fn get_string(env: &mut JNIEnv<'_>, object: JObject<'_>) -> jni::errors::Result<String> {
    let string = JString::from(object);
    let string: String = env.get_string(&string)?.into();
    Ok(string)
}

/// `Context.getPackageName()`
pub(crate) fn package_name(env: &mut JNIEnv<'_>, activity: &JObject<'_>) -> jni::errors::Result<String> {
    let name = env
        .call_method(activity, "getPackageName", "()Ljava/lang/String;", &[])?
        .l()?;
    get_string(env, name)
}

/// `Environment.getExternalStorageDirectory().getAbsolutePath()`
pub(crate) fn external_storage_directory(env: &mut JNIEnv<'_>) -> jni::errors::Result<String> {
    let dir = env
        .call_static_method(
            "android/os/Environment",
            "getExternalStorageDirectory",
            "()Ljava/io/File;",
            &[],
        )?
        .l()?;
    let path = env
        .call_method(&dir, "getAbsolutePath", "()Ljava/lang/String;", &[])?
        .l()?;
    get_string(env, path)
}

/// Calls the activity's `showNotice(String)`
pub(crate) fn show_notice(
    env: &mut JNIEnv<'_>,
    activity: &JObject<'_>,
    text: &str,
) -> jni::errors::Result<()> {
    let text = env.new_string(text)?;
    env.call_method(
        activity,
        "showNotice",
        "(Ljava/lang/String;)V",
        &[JValue::Object(&text)],
    )?;
    Ok(())
}
