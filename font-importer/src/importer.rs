use log::{debug, info, trace, warn};

use crate::assets::AssetStore;
use crate::config::ImportConfig;
use crate::copier::{copy_group, CopyReport};
use crate::error::ImportError;
use crate::language::LanguageGroup;
use crate::notice::{Notice, Notifier};
use crate::permission::{PermissionModel, StorageAccess, STORAGE_REQUEST_CODE};

/// Where a single import currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportState {
    Idle,
    CheckingPermission,
    EnsuringDirectory,
    Copying,
    Denied,
    Failed,
    Done,
}

impl ImportState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ImportState::Denied | ImportState::Failed | ImportState::Done
        )
    }

    pub fn can_advance_to(&self, next: ImportState) -> bool {
        use ImportState::*;
        matches!(
            (self, next),
            (Idle, CheckingPermission)
                | (CheckingPermission, Denied)
                | (CheckingPermission, EnsuringDirectory)
                | (EnsuringDirectory, Failed)
                | (EnsuringDirectory, Copying)
                | (Copying, Failed)
                | (Copying, Done)
        )
    }
}

fn advance(state: &mut ImportState, next: ImportState) {
    debug_assert!(
        state.can_advance_to(next),
        "invalid import transition {state:?} -> {next:?}"
    );
    trace!("Import {state:?} -> {next:?}");
    *state = next;
}

/// How an import ended.
#[derive(Debug)]
pub enum ImportOutcome {
    /// The loop ran to completion; some files may have been skipped
    Done(CopyReport),
    Aborted(ImportError),
}

impl ImportOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            ImportOutcome::Done(_) => Notice::Success,
            ImportOutcome::Aborted(err) => err.notice(),
        }
    }

    pub fn state(&self) -> ImportState {
        match self {
            ImportOutcome::Done(_) => ImportState::Done,
            ImportOutcome::Aborted(ImportError::PermissionDenied) => ImportState::Denied,
            ImportOutcome::Aborted(_) => ImportState::Failed,
        }
    }
}

/// User and platform events delivered to the importer from the activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// The import button was pressed with the picker at `position`
    ImportRequested { position: i32 },
    /// The activity received `onRequestPermissionsResult`
    PermissionsResult { request_code: i32, granted: bool },
}

/// Copies a language group's bundled fonts to the configured destination,
/// after checking storage access.
///
/// Imports run synchronously on the caller's thread and nothing coordinates
/// two of them; callers are expected to run one at a time.
#[derive(Debug)]
pub struct Importer<S, A> {
    store: S,
    access: A,
    config: ImportConfig,
}

impl<S: AssetStore, A: StorageAccess> Importer<S, A> {
    pub fn new(store: S, access: A, config: ImportConfig) -> Self {
        Self {
            store,
            access,
            config,
        }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    pub fn access(&self) -> &A {
        &self.access
    }

    /// Runs one import of `group`.
    ///
    /// A denied permission writes nothing. Directory and listing failures
    /// abort the import. Files that fail individually are skipped without
    /// failing the import.
    pub fn import(&self, group: LanguageGroup) -> ImportOutcome {
        let mut state = ImportState::Idle;

        advance(&mut state, ImportState::CheckingPermission);
        if !self.access.has_storage_write_access() {
            warn!("No storage write access ({:?})", self.access.model());
            advance(&mut state, ImportState::Denied);
            return ImportOutcome::Aborted(ImportError::PermissionDenied);
        }

        advance(&mut state, ImportState::EnsuringDirectory);
        let destination = self.config.destination(group);
        let dest = match destination.ensure() {
            Ok(dest) => dest,
            Err(err) => {
                warn!("{err}");
                advance(&mut state, ImportState::Failed);
                return ImportOutcome::Aborted(err);
            }
        };

        advance(&mut state, ImportState::Copying);
        match copy_group(
            &self.store,
            group.asset_folder(),
            dest,
            self.config.buffer_size(),
        ) {
            Ok(report) => {
                info!(
                    "Imported {} {group} font(s) into {} ({} skipped, {} bytes)",
                    report.copied.len(),
                    dest.display(),
                    report.skipped.len(),
                    report.total_bytes()
                );
                advance(&mut state, ImportState::Done);
                ImportOutcome::Done(report)
            }
            Err(err) => {
                warn!("{err}");
                advance(&mut state, ImportState::Failed);
                ImportOutcome::Aborted(err)
            }
        }
    }

    /// Checks storage access, asking for it if missing.
    ///
    /// Meant to be called when the activity starts. With
    /// [`PermissionModel::AllFilesAccess`] the user is told why they are
    /// about to land in the system settings.
    pub fn check_access(&self, notifier: &dyn Notifier) {
        if self.access.has_storage_write_access() {
            debug!("Storage write access granted");
            return;
        }
        if self.access.model() == PermissionModel::AllFilesAccess {
            notifier.notify(Notice::NoPermission);
        }
        if let Err(err) = self.access.request_access() {
            warn!("Failed to request storage access: {err}");
        }
    }

    /// Handles one [`Command`], reporting the result through `notifier`.
    pub fn handle(&self, command: Command, notifier: &dyn Notifier) {
        match command {
            Command::ImportRequested { position } => {
                let Some(group) = LanguageGroup::from_picker_position(position) else {
                    info!("Import requested without a language (position {position})");
                    notifier.notify(Notice::ChooseLanguage);
                    return;
                };
                info!("Import requested for {group}");
                let outcome = self.import(group);
                notifier.notify(outcome.notice());
            }
            Command::PermissionsResult {
                request_code,
                granted,
            } => {
                if request_code != STORAGE_REQUEST_CODE {
                    debug!("Ignoring permissions result for request {request_code}");
                    return;
                }
                // Ask again rather than trusting `granted`, which only covers
                // what was in this particular request
                debug!("Storage permission result: granted = {granted}");
                if !self.access.has_storage_write_access() {
                    notifier.notify(Notice::NoPermission);
                }
            }
        }
    }
}
