//! `NativeActivity` entry points: the `android_main` loop and the native
//! methods of the Java activity shell.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;
use std::time::Duration;

use android_activity::{AndroidApp, AndroidAppWaker, MainEvent, PollEvent};
use jni::objects::JObject;
use jni::sys::{jboolean, jint, JNI_FALSE};
use jni::JNIEnv;
use log::{error, info, trace, warn, LevelFilter};

use crate::config::ImportConfig;
use crate::error::{ImportError, InternalResult};
use crate::importer::{Command, Importer};
use crate::jni_utils::{external_storage_directory, show_notice, JavaContext};
use crate::notice::{Notice, Notifier};
use crate::util::sdk_version;
use crate::ALL_FILES_ACCESS_SDK;

mod access;
mod assets;

use assets::ApkAssetStore;

const LOG_TAG: &str = "Fonts";

struct CommandSender {
    tx: Sender<Command>,
    waker: AndroidAppWaker,
}

// Only set while `android_main` is running
static COMMANDS: Mutex<Option<CommandSender>> = Mutex::new(None);

fn install_command_channel(app: &AndroidApp) -> Receiver<Command> {
    let (tx, rx) = mpsc::channel();
    let sender = CommandSender {
        tx,
        waker: app.create_waker(),
    };
    match COMMANDS.lock() {
        Ok(mut commands) => *commands = Some(sender),
        Err(poisoned) => *poisoned.into_inner() = Some(sender),
    }
    rx
}

fn uninstall_command_channel() {
    match COMMANDS.lock() {
        Ok(mut commands) => *commands = None,
        Err(poisoned) => *poisoned.into_inner() = None,
    }
}

/// Queues `command` for the main loop and wakes it up.
fn dispatch(command: Command) {
    let commands = match COMMANDS.lock() {
        Ok(commands) => commands,
        Err(poisoned) => poisoned.into_inner(),
    };
    match commands.as_ref() {
        Some(sender) => {
            if sender.tx.send(command).is_ok() {
                sender.waker.wake();
            } else {
                warn!("Main loop is gone, dropping {command:?}");
            }
        }
        None => warn!("Main loop not running, dropping {command:?}"),
    }
}

/// Shows notices as toasts via the activity's `showNotice(String)`.
struct ToastNotifier {
    java: JavaContext,
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        info!("Notice: {notice:?}");
        let text = notice.text();
        if let Err(err) = self
            .java
            .with_activity(|env, activity| show_notice(env, activity, text))
        {
            error!("Failed to show notice {notice:?}: {err}");
        }
    }
}

type AndroidImporter = Importer<ApkAssetStore, Box<dyn crate::StorageAccess>>;

fn build_importer(app: &AndroidApp, java: &JavaContext) -> InternalResult<AndroidImporter> {
    let external_root = java.with_activity(|env, _| external_storage_directory(env))?;
    let config = ImportConfig::new(PathBuf::from(external_root));

    let sdk = sdk_version().unwrap_or_else(|| {
        warn!("Couldn't read ro.build.version.sdk, assuming {ALL_FILES_ACCESS_SDK}");
        ALL_FILES_ACCESS_SDK
    });
    info!(
        "SDK {sdk}, importing into {}",
        config.destination(crate::LanguageGroup::Khmer).path().display()
    );

    Ok(Importer::new(
        ApkAssetStore::new(app.asset_manager()),
        access::for_sdk_version(java.clone(), sdk),
        config,
    ))
}

#[no_mangle]
fn android_main(app: AndroidApp) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(LevelFilter::Info)
            .with_tag(LOG_TAG),
    );

    let setup = JavaContext::from_android_context()
        .and_then(|java| Ok((build_importer(&app, &java)?, java)));
    let (importer, java) = match setup {
        Ok(setup) => setup,
        Err(err) => {
            error!("Failed to set up the importer: {}", ImportError::from(err));
            return;
        }
    };
    let notifier = ToastNotifier { java };
    let commands = install_command_channel(&app);

    let mut quit = false;
    while !quit {
        app.poll_events(Some(Duration::from_millis(500)), |event| match event {
            PollEvent::Wake => trace!("Early wake up"),
            PollEvent::Main(main_event) => {
                info!("Main event: {main_event:?}");
                match main_event {
                    MainEvent::Start => importer.check_access(&notifier),
                    MainEvent::Destroy => quit = true,
                    _ => {}
                }
            }
            _ => {}
        });

        // One at a time, in the order the user triggered them
        for command in commands.try_iter() {
            importer.handle(command, &notifier);
        }
    }

    uninstall_command_channel();
}

#[allow(non_snake_case)]
#[no_mangle]
pub extern "C" fn Java_com_example_fonts_MainActivity_notifyImportRequested(
    _env: JNIEnv,
    _activity: JObject,
    position: jint,
) {
    dispatch(Command::ImportRequested { position });
}

#[allow(non_snake_case)]
#[no_mangle]
pub extern "C" fn Java_com_example_fonts_MainActivity_notifyPermissionsResult(
    _env: JNIEnv,
    _activity: JObject,
    request_code: jint,
    granted: jboolean,
) {
    dispatch(Command::PermissionsResult {
        request_code,
        granted: granted != JNI_FALSE,
    });
}
