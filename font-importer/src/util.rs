/// Parses the value of the `ro.build.version.sdk` system property.
pub fn parse_sdk_version(value: &str) -> Option<i32> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<i32>().ok().filter(|sdk| *sdk > 0)
}

/// The user-visible SDK version of the framework
///
/// Also referred to as [`Build.VERSION_CODES`](https://developer.android.com/reference/android/os/Build.VERSION_CODES)
#[cfg(target_os = "android")]
pub fn sdk_version() -> Option<i32> {
    let prop = android_properties::getprop("ro.build.version.sdk");
    prop.value().as_deref().and_then(parse_sdk_version)
}
