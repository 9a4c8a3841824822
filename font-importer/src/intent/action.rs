/// Action to invoke with an intent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Settings screen granting this app "all files access"
    ManageAppAllFilesAccessPermission,
    /// This app's details page in the system settings
    ApplicationDetailsSettings,
}

impl Action {
    /// Class declaring the action's `String` constant
    pub fn class_name(&self) -> &'static str {
        "android/provider/Settings"
    }
}

impl AsRef<str> for Action {
    fn as_ref(&self) -> &str {
        match self {
            Self::ManageAppAllFilesAccessPermission => "ACTION_MANAGE_APP_ALL_FILES_ACCESS_PERMISSION",
            Self::ApplicationDetailsSettings => "ACTION_APPLICATION_DETAILS_SETTINGS",
        }
    }
}
