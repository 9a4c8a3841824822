use std::fmt;

/// The short user-visible messages an import can end with.
///
/// These are the only signals the user ever gets; details (which file was
/// skipped, which directory could not be created) only go to the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notice {
    /// The picker is still on its placeholder entry
    ChooseLanguage,
    NoPermission,
    UnknownFailure,
    Success,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::ChooseLanguage => "Please choose a language first",
            Notice::NoPermission => "No file access permission, please grant it and try again",
            Notice::UnknownFailure => "Import failed",
            Notice::Success => "Fonts imported",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Something that can put a [`Notice`] in front of the user.
///
/// On Android this is a toast shown by the activity, anything else (tests,
/// host tools) can simply record or print them.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}
