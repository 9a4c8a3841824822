use jni::{
    errors::Error,
    objects::{JObject, JValue},
    JNIEnv,
};

mod action;
pub use action::Action;

/// A messaging object you can use to request an action from another android app component.
#[must_use]
pub struct Intent<'local> {
    object: JObject<'local>,
}

impl<'local> Intent<'local> {
    /// An intent for `action` carrying `uri` as its data.
    pub fn new_with_uri(
        env: &mut JNIEnv<'local>,
        action: Action,
        uri: impl AsRef<str>,
    ) -> Result<Self, Error> {
        let uri_string = env.new_string(uri)?;
        let uri = env
            .call_static_method(
                "android/net/Uri",
                "parse",
                "(Ljava/lang/String;)Landroid/net/Uri;",
                &[JValue::Object(&uri_string)],
            )?
            .l()?;

        let action_name = env
            .get_static_field(action.class_name(), action.as_ref(), "Ljava/lang/String;")?
            .l()?;

        let object = env.new_object(
            "android/content/Intent",
            "(Ljava/lang/String;Landroid/net/Uri;)V",
            &[JValue::Object(&action_name), JValue::Object(&uri)],
        )?;

        Ok(Self { object })
    }

    /// Starts the intent from `activity`.
    pub fn start_activity(self, env: &mut JNIEnv<'local>, activity: &JObject<'_>) -> Result<(), Error> {
        env.call_method(
            activity,
            "startActivity",
            "(Landroid/content/Intent;)V",
            &[JValue::Object(&self.object)],
        )?;
        Ok(())
    }
}

/// Intent data URI addressing this app's package
pub fn package_uri(package: &str) -> String {
    format!("package:{package}")
}
