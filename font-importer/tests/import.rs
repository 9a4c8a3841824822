use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;

use font_importer::{
    Command, DestinationLayout, DirAssetStore, ImportConfig, ImportError, ImportOutcome,
    ImportState, Importer, LanguageGroup, Notice, Notifier, PermissionModel, StorageAccess,
    STORAGE_REQUEST_CODE,
};
use tempfile::TempDir;

/// Storage access that can be flipped by the test, counting requests.
struct FakeAccess {
    model: PermissionModel,
    granted: Cell<bool>,
    requests: Cell<usize>,
}

impl FakeAccess {
    fn new(model: PermissionModel, granted: bool) -> Self {
        Self {
            model,
            granted: Cell::new(granted),
            requests: Cell::new(0),
        }
    }
}

impl StorageAccess for FakeAccess {
    fn model(&self) -> PermissionModel {
        self.model
    }

    fn has_storage_write_access(&self) -> bool {
        self.granted.get()
    }

    fn request_access(&self) -> font_importer::Result<()> {
        self.requests.set(self.requests.get() + 1);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

impl RecordingNotifier {
    fn take(&self) -> Vec<Notice> {
        self.notices.take()
    }
}

struct Fixture {
    assets: TempDir,
    storage: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            assets: tempfile::tempdir().unwrap(),
            storage: tempfile::tempdir().unwrap(),
        }
    }

    fn add_asset(&self, group: &str, name: &str, data: &[u8]) {
        let dir = self.assets.path().join(group);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), data).unwrap();
    }

    fn remove_asset(&self, group: &str, name: &str) {
        fs::remove_file(self.assets.path().join(group).join(name)).unwrap();
    }

    fn importer(&self, access: FakeAccess) -> Importer<DirAssetStore, FakeAccess> {
        self.importer_with(access, ImportConfig::new(self.storage.path()))
    }

    fn importer_with(
        &self,
        access: FakeAccess,
        config: ImportConfig,
    ) -> Importer<DirAssetStore, FakeAccess> {
        Importer::new(DirAssetStore::new(self.assets.path()), access, config)
    }

    fn font_dir(&self) -> std::path::PathBuf {
        self.storage.path().join("PCEngine").join(".fonts")
    }
}

fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

fn granted() -> FakeAccess {
    FakeAccess::new(PermissionModel::AllFilesAccess, true)
}

#[test]
fn every_group_is_copied_byte_for_byte() {
    let fixture = Fixture::new();
    for group in LanguageGroup::ALL {
        let folder = group.asset_folder();
        fixture.add_asset(folder, &format!("{folder}-regular.ttf"), folder.repeat(300).as_bytes());
    }
    let importer = fixture.importer(granted());

    for group in LanguageGroup::ALL {
        let outcome = importer.import(group);
        assert_eq!(outcome.state(), ImportState::Done);
        assert_eq!(outcome.notice(), Notice::Success);
    }

    for group in LanguageGroup::ALL {
        let folder = group.asset_folder();
        let copied = fs::read(fixture.font_dir().join(format!("{folder}-regular.ttf"))).unwrap();
        assert_eq!(copied, folder.repeat(300).as_bytes());
    }
}

#[test]
fn thai_scenario_has_no_deletion_sync() {
    let fixture = Fixture::new();
    fixture.add_asset("thai", "a.ttf", b"font a");
    fixture.add_asset("thai", "b.ttf", b"font b");
    let importer = fixture.importer(granted());

    let ImportOutcome::Done(report) = importer.import(LanguageGroup::Thai) else {
        panic!("thai import should succeed");
    };
    assert!(report.is_complete());
    assert_eq!(dir_names(&fixture.font_dir()), ["a.ttf", "b.ttf"]);
    assert_eq!(fs::read(fixture.font_dir().join("a.ttf")).unwrap(), b"font a");
    assert_eq!(fs::read(fixture.font_dir().join("b.ttf")).unwrap(), b"font b");

    fixture.remove_asset("thai", "a.ttf");
    fixture.add_asset("thai", "b.ttf", b"font b, second edition");
    let outcome = importer.import(LanguageGroup::Thai);

    assert_eq!(outcome.notice(), Notice::Success);
    assert_eq!(dir_names(&fixture.font_dir()), ["a.ttf", "b.ttf"]);
    assert_eq!(fs::read(fixture.font_dir().join("a.ttf")).unwrap(), b"font a");
    assert_eq!(
        fs::read(fixture.font_dir().join("b.ttf")).unwrap(),
        b"font b, second edition"
    );
}

#[test]
fn denied_access_writes_nothing() {
    let fixture = Fixture::new();
    fixture.add_asset("khmer", "k.ttf", b"k");
    let importer = fixture.importer(FakeAccess::new(PermissionModel::Legacy, false));

    let outcome = importer.import(LanguageGroup::Khmer);

    assert!(matches!(
        outcome,
        ImportOutcome::Aborted(ImportError::PermissionDenied)
    ));
    assert_eq!(outcome.notice(), Notice::NoPermission);
    assert!(dir_names(fixture.storage.path()).is_empty());
}

#[test]
fn missing_group_fails_after_ensuring_directories() {
    let fixture = Fixture::new();
    fixture.add_asset("thai", "a.ttf", b"a");
    let importer = fixture.importer(granted());

    let outcome = importer.import(LanguageGroup::Vietnamese);

    assert!(matches!(
        outcome,
        ImportOutcome::Aborted(ImportError::GroupListingFailed { .. })
    ));
    assert_eq!(outcome.notice(), Notice::UnknownFailure);
    assert!(fixture.font_dir().is_dir());
    assert!(dir_names(&fixture.font_dir()).is_empty());
}

#[test]
fn blocked_destination_is_a_generic_failure() {
    let fixture = Fixture::new();
    fixture.add_asset("thai", "a.ttf", b"a");
    fs::write(fixture.storage.path().join("PCEngine"), b"in the way").unwrap();
    let importer = fixture.importer(granted());

    let outcome = importer.import(LanguageGroup::Thai);

    assert!(matches!(
        outcome,
        ImportOutcome::Aborted(ImportError::DirectoryCreateFailed { .. })
    ));
    assert_eq!(outcome.state(), ImportState::Failed);
    assert_eq!(outcome.notice(), Notice::UnknownFailure);
}

#[test]
fn per_language_layout() {
    let fixture = Fixture::new();
    fixture.add_asset("viet", "v.ttf", b"v");
    let config =
        ImportConfig::new(fixture.storage.path()).with_layout(DestinationLayout::PerLanguage);
    let importer = fixture.importer_with(granted(), config);

    assert_eq!(importer.import(LanguageGroup::Vietnamese).notice(), Notice::Success);
    assert_eq!(fs::read(fixture.font_dir().join("viet").join("v.ttf")).unwrap(), b"v");
}

#[test]
fn import_command_without_language() {
    let fixture = Fixture::new();
    let importer = fixture.importer(granted());
    let notifier = RecordingNotifier::default();

    importer.handle(Command::ImportRequested { position: 0 }, &notifier);

    assert_eq!(notifier.take(), [Notice::ChooseLanguage]);
    assert!(dir_names(fixture.storage.path()).is_empty());
}

#[test]
fn import_command_reports_the_outcome() {
    let fixture = Fixture::new();
    fixture.add_asset("khmer", "k.ttf", b"k");
    let access = FakeAccess::new(PermissionModel::AllFilesAccess, false);
    let importer = fixture.importer(access);
    let notifier = RecordingNotifier::default();

    importer.handle(Command::ImportRequested { position: 1 }, &notifier);
    assert_eq!(notifier.take(), [Notice::NoPermission]);

    // No automatic retry once access shows up, the user triggers it again
    importer.access().granted.set(true);
    importer.handle(Command::ImportRequested { position: 1 }, &notifier);
    assert_eq!(notifier.take(), [Notice::Success]);
    assert!(fixture.font_dir().join("k.ttf").is_file());
}

#[test]
fn start_check_requests_missing_access() {
    let fixture = Fixture::new();
    let notifier = RecordingNotifier::default();

    let legacy = fixture.importer(FakeAccess::new(PermissionModel::Legacy, false));
    legacy.check_access(&notifier);
    assert_eq!(legacy.access().requests.get(), 1);
    assert!(notifier.take().is_empty());

    let modern = fixture.importer(FakeAccess::new(PermissionModel::AllFilesAccess, false));
    modern.check_access(&notifier);
    assert_eq!(modern.access().requests.get(), 1);
    assert_eq!(notifier.take(), [Notice::NoPermission]);

    let allowed = fixture.importer(granted());
    allowed.check_access(&notifier);
    assert_eq!(allowed.access().requests.get(), 0);
    assert!(notifier.take().is_empty());
}

#[test]
fn permissions_result_rechecks_access() {
    let fixture = Fixture::new();
    let importer = fixture.importer(FakeAccess::new(PermissionModel::Legacy, false));
    let notifier = RecordingNotifier::default();

    importer.handle(
        Command::PermissionsResult {
            request_code: STORAGE_REQUEST_CODE,
            granted: false,
        },
        &notifier,
    );
    assert_eq!(notifier.take(), [Notice::NoPermission]);

    importer.handle(
        Command::PermissionsResult {
            request_code: 42,
            granted: false,
        },
        &notifier,
    );
    assert!(notifier.take().is_empty());

    importer.access().granted.set(true);
    importer.handle(
        Command::PermissionsResult {
            request_code: STORAGE_REQUEST_CODE,
            granted: true,
        },
        &notifier,
    );
    assert!(notifier.take().is_empty());
}
