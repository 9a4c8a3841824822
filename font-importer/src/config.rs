use std::path::{Path, PathBuf};

use crate::destination::Destination;
use crate::language::LanguageGroup;

/// Directory PCEngine looks for its data in, relative to external storage
pub const PC_ENGINE_DIR: &str = "PCEngine";

/// Font directory inside [`PC_ENGINE_DIR`]
pub const FONT_DIR: &str = ".fonts";

pub const DEFAULT_BUFFER_SIZE: usize = 2048;

/// How fonts are laid out under the font directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DestinationLayout {
    /// Every language shares `<root>/PCEngine/.fonts/`
    #[default]
    Flat,
    /// Each language gets `<root>/PCEngine/.fonts/<asset folder>/`
    PerLanguage,
}

/// Where and how an import writes its files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportConfig {
    external_root: PathBuf,
    app_dir: String,
    font_dir: String,
    layout: DestinationLayout,
    buffer_size: usize,
}

impl ImportConfig {
    /// A config writing below `external_root`, normally the device's
    /// primary external storage directory.
    pub fn new(external_root: impl Into<PathBuf>) -> Self {
        Self {
            external_root: external_root.into(),
            app_dir: PC_ENGINE_DIR.to_owned(),
            font_dir: FONT_DIR.to_owned(),
            layout: DestinationLayout::default(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    pub fn with_app_dir(mut self, name: impl Into<String>) -> Self {
        self.app_dir = name.into();
        self
    }

    pub fn with_font_dir(mut self, name: impl Into<String>) -> Self {
        self.font_dir = name.into();
        self
    }

    pub fn with_layout(mut self, layout: DestinationLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Size of the intermediate buffer bytes are streamed through.
    ///
    /// A size of zero is bumped up to one byte.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }

    pub fn external_root(&self) -> &Path {
        &self.external_root
    }

    pub fn layout(&self) -> DestinationLayout {
        self.layout
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// The directory chain fonts for `group` are copied into.
    pub fn destination(&self, group: LanguageGroup) -> Destination {
        let app_dir = self.external_root.join(&self.app_dir);
        let font_dir = app_dir.join(&self.font_dir);
        let mut chain = vec![app_dir, font_dir];
        if self.layout == DestinationLayout::PerLanguage {
            let leaf = chain[1].join(group.asset_folder());
            chain.push(leaf);
        }
        Destination::new(chain)
    }
}
