use error_location::ErrorLocation;
use thiserror::Error;

/// Global hotkey registration errors with source location tracking.
#[derive(Error, Debug)]
pub enum HotkeyError {
    /// The OS refused to install the low-level hotkey event handler.
    #[error("Hotkey handler install failed: {reason} {location}")]
    HandlerInstallFailed {
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The key combination itself was refused, e.g. owned by another process.
    #[error("Hotkey registration failed: {reason} {location}")]
    HotkeyRegisterFailed {
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Overlay presentation errors with source location tracking.
#[derive(Error, Debug)]
pub enum OverlayError {
    /// No presentation surface could be created, e.g. no display available.
    #[error("Overlay surface creation failed: {reason} {location}")]
    SurfaceCreationFailed {
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Space-data provider errors with source location tracking.
#[derive(Error, Debug)]
pub enum SpaceError {
    /// The provider has no space with this id.
    #[error("Unknown space id: {id} {location}")]
    UnknownSpace {
        /// The requested space id.
        id: u32,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`HotkeyError`].
pub type HotkeyResult<T> = std::result::Result<T, HotkeyError>;

/// Result type alias using [`OverlayError`].
pub type OverlayResult<T> = std::result::Result<T, OverlayError>;

/// Result type alias using [`SpaceError`].
pub type SpaceResult<T> = std::result::Result<T, SpaceError>;
