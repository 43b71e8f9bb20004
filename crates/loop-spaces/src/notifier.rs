use crate::AppError;

use notify_rust::Notification;
use tracing::warn;

const APP_NAME: &str = "LoopSpaces";

/// Tell the user the switcher hotkey could not be set up.
pub fn hotkey_unavailable(shortcut: &str, error: &AppError) {
    let body = format!(
        "{} could not be registered ({}). Pick another shortcut in config.toml and choose Reload Settings.",
        shortcut,
        short_reason(error)
    );

    if let Err(e) = Notification::new()
        .appname(APP_NAME)
        .summary("Hotkey unavailable")
        .body(&body)
        .show()
    {
        warn!(error = %e, "Failed to show notification");
    }
}

fn short_reason(error: &AppError) -> String {
    match error {
        AppError::Hotkey { source, .. } => source.to_string(),
        AppError::ConfigError { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}
