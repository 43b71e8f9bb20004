//! LoopSpaces Core Library
//!
//! Global hotkey capture and the space switcher's overlay lifecycle and
//! selection state machine, independent of any windowing toolkit.
//!
//! # Example
//!
//! ```no_run
//! use loop_spaces_core::{
//!     GlobalHotkeyBackend, HotkeyBinding, HotkeyRegistry, HotkeyResult, HotkeyTrigger,
//! };
//!
//! use std::sync::{Arc, mpsc};
//!
//! fn main() -> HotkeyResult<()> {
//!     let (trigger_tx, trigger_rx) = mpsc::channel::<HotkeyTrigger>();
//!     let mut registry = HotkeyRegistry::new(GlobalHotkeyBackend::new(), Arc::new(trigger_tx));
//!
//!     registry.register(HotkeyBinding::default(), || println!("Switcher requested"))?;
//!
//!     while let Ok(trigger) = trigger_rx.recv() {
//!         registry.dispatch(trigger);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod hotkey;
mod overlay;
mod selection;
mod space;

pub use {
    error::{
        HotkeyError, HotkeyResult, OverlayError, OverlayResult, SpaceError, SpaceResult,
    },
    hotkey::{
        GlobalHotkeyBackend, HotkeyBackend, HotkeyBinding, HotkeyBridge, HotkeyRegistration,
        HotkeyRegistry, HotkeyTrigger, ModifierMask, TriggerSink,
    },
    overlay::{
        DisplayBounds, OverlayController, OverlayState, PresentationSurface, SWITCHER_HINTS,
        SWITCHER_TITLE, SurfaceFactory, SurfaceOrigin, SurfaceSize, SwitcherFrame, SwitcherTile,
        render,
    },
    selection::{CancelCallback, CommitCallback, KeyDisposition, SelectionKey, SelectionSession},
    space::{InMemorySpaceProvider, SelectableItem, SpaceProvider},
};

/// Re-exported so callers can name keys without depending on `global-hotkey`.
pub use global_hotkey::hotkey::Code;

#[cfg(test)]
mod tests;
