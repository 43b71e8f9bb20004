use loop_spaces_core::{HotkeyError, OverlayError, SpaceError};

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the loop-spaces binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Global hotkey error from loop-spaces-core.
    #[error("Hotkey error: {source} {location}")]
    Hotkey {
        /// The underlying hotkey error.
        #[source]
        source: HotkeyError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Overlay presentation error from loop-spaces-core.
    #[error("Overlay error: {source} {location}")]
    Overlay {
        /// The underlying overlay error.
        #[source]
        source: OverlayError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Space provider error from loop-spaces-core.
    #[error("Space error: {source} {location}")]
    Space {
        /// The underlying space error.
        #[source]
        source: SpaceError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Tray icon or menu setup error.
    #[error("Tray error: {reason} {location}")]
    TrayError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From impls with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<HotkeyError> for AppError {
    #[track_caller]
    fn from(source: HotkeyError) -> Self {
        AppError::Hotkey {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<OverlayError> for AppError {
    #[track_caller]
    fn from(source: OverlayError) -> Self {
        AppError::Overlay {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SpaceError> for AppError {
    #[track_caller]
    fn from(source: SpaceError) -> Self {
        AppError::Space {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
