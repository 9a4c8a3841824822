use std::fmt;

/// A language whose fonts are bundled with the app.
///
/// Each group lives in its own top-level asset folder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LanguageGroup {
    Khmer,
    Thai,
    Vietnamese,
}

impl LanguageGroup {
    pub const ALL: [LanguageGroup; 3] = [
        LanguageGroup::Khmer,
        LanguageGroup::Thai,
        LanguageGroup::Vietnamese,
    ];

    /// Name of the asset folder holding this group's fonts.
    ///
    /// Also used as the leaf directory name with
    /// [`DestinationLayout::PerLanguage`](crate::DestinationLayout::PerLanguage).
    pub fn asset_folder(&self) -> &'static str {
        match self {
            LanguageGroup::Khmer => "khmer",
            LanguageGroup::Thai => "thai",
            LanguageGroup::Vietnamese => "viet",
        }
    }

    /// Maps the language picker's selected position to a group.
    ///
    /// Position `0` is the picker's "choose a language" placeholder, so it
    /// (and anything out of range) yields `None`.
    pub fn from_picker_position(position: i32) -> Option<Self> {
        match position {
            1 => Some(LanguageGroup::Khmer),
            2 => Some(LanguageGroup::Thai),
            3 => Some(LanguageGroup::Vietnamese),
            _ => None,
        }
    }
}

impl fmt::Display for LanguageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_folder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_positions() {
        assert_eq!(LanguageGroup::from_picker_position(0), None);
        assert_eq!(
            LanguageGroup::from_picker_position(1),
            Some(LanguageGroup::Khmer)
        );
        assert_eq!(
            LanguageGroup::from_picker_position(2),
            Some(LanguageGroup::Thai)
        );
        assert_eq!(
            LanguageGroup::from_picker_position(3),
            Some(LanguageGroup::Vietnamese)
        );
        assert_eq!(LanguageGroup::from_picker_position(4), None);
        assert_eq!(LanguageGroup::from_picker_position(-1), None);
    }

    #[test]
    fn asset_folders_are_distinct() {
        let folders: Vec<_> = LanguageGroup::ALL.iter().map(|g| g.asset_folder()).collect();
        assert_eq!(folders, ["khmer", "thai", "viet"]);
    }
}
