use crate::core::state::{StateChange, Tracker};
use crate::db::KvStore;
use crate::errors::{AppError, AppResult};
use crate::models::settings::DEFAULT_TARGET;
use crate::ui::prompt::ask_confirmation;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use std::env;
use std::fs;
use std::path::Path;

/// Largest avatar file accepted for embedding (2 MiB).
pub const MAX_AVATAR_BYTES: u64 = 2 * 1024 * 1024;

/// Something able to deliver desktop reminders.
pub trait ReminderCapability {
    /// Name of the notification tool, `None` when unsupported.
    fn backend(&self) -> Option<String>;

    /// Ask the user for permission; `false` means denied.
    fn request_permission(&self) -> bool;
}

/// Looks for the platform's notification command on `PATH` and asks for
/// permission on the terminal.
pub struct DesktopReminders;

impl DesktopReminders {
    fn candidates() -> &'static [&'static str] {
        if cfg!(target_os = "windows") {
            &["powershell.exe", "powershell"]
        } else if cfg!(target_os = "macos") {
            &["osascript"]
        } else {
            &["notify-send"]
        }
    }
}

impl ReminderCapability for DesktopReminders {
    fn backend(&self) -> Option<String> {
        let paths = env::var_os("PATH")?;
        env::split_paths(&paths)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| {
                Self::candidates()
                    .iter()
                    .map(move |name| (name, dir.join(name)))
            })
            .find(|(_, candidate)| candidate.is_file())
            .map(|(name, _)| (*name).to_string())
    }

    fn request_permission(&self) -> bool {
        ask_confirmation("lightlog would like to send you daily reminders.")
    }
}

/// Parse target text as typed by the user: anything that is not a non-zero
/// integer falls back to the default.
pub fn parse_target_input(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(0) | Err(_) => DEFAULT_TARGET,
        Ok(v) => v,
    }
}

/// `data:` URI for an image file, guessing the MIME type from the extension.
pub fn avatar_data_uri(path: &Path, bytes: &[u8]) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    };

    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

pub struct SettingsLogic;

impl SettingsLogic {
    pub fn set_target<S: KvStore>(tracker: &mut Tracker<S>, target: i64) -> AppResult<()> {
        tracker.commit(StateChange::TargetChanged(target), |state| {
            state.target = target;
        })
    }

    /// Store an avatar reference (URL or data URI) verbatim.
    pub fn set_avatar<S: KvStore>(tracker: &mut Tracker<S>, reference: &str) -> AppResult<()> {
        let reference = reference.trim().to_string();
        tracker.commit(StateChange::AvatarChanged, |state| {
            state.settings.avatar = reference;
        })
    }

    /// Embed an image file as the avatar. Files over [`MAX_AVATAR_BYTES`]
    /// are rejected and nothing changes.
    pub fn import_avatar<S: KvStore>(tracker: &mut Tracker<S>, path: &Path) -> AppResult<()> {
        let size = fs::metadata(path)?.len();
        if size > MAX_AVATAR_BYTES {
            return Err(AppError::AvatarTooLarge {
                size,
                limit: MAX_AVATAR_BYTES,
            });
        }

        let bytes = fs::read(path)?;
        let uri = avatar_data_uri(path, &bytes);
        tracker.commit(StateChange::AvatarChanged, |state| {
            state.settings.avatar = uri;
        })
    }

    /// Turn reminders on or off. Turning them on needs a notification
    /// backend and the user's permission; otherwise the flag stays as it was.
    pub fn set_reminders<S: KvStore>(
        tracker: &mut Tracker<S>,
        enabled: bool,
        capability: &dyn ReminderCapability,
    ) -> AppResult<()> {
        if enabled {
            let backend = capability.backend().ok_or(AppError::RemindersUnsupported)?;
            tracing::debug!(backend = %backend, "notification backend found");

            if !capability.request_permission() {
                return Err(AppError::RemindersDenied);
            }
        }

        tracker.commit(StateChange::RemindersChanged(enabled), |state| {
            state.settings.reminders_enabled = enabled;
        })
    }
}
