//! tao window backing the switcher overlay.
//!
//! The window is created hidden, borderless and always on top, and joins
//! every workspace so it appears over whichever space is current.

use crate::{UserEvent, config::SwitcherConfig};

use loop_spaces_core::{
    DisplayBounds, PresentationSurface, SWITCHER_TITLE, SurfaceFactory, SurfaceOrigin, SurfaceSize,
    SwitcherFrame,
};
use tao::{
    dpi::{LogicalSize, PhysicalPosition},
    event_loop::EventLoopWindowTarget,
    window::{Window, WindowBuilder, WindowId},
};
use tracing::debug;

/// Switcher panel as a tao window.
pub struct OverlayWindow {
    window: Window,
}

impl OverlayWindow {
    /// Window id, used to route window events to the switcher.
    pub fn id(&self) -> WindowId {
        self.window.id()
    }
}

impl PresentationSurface for OverlayWindow {
    fn primary_display(&self) -> Option<DisplayBounds> {
        self.window.primary_monitor().map(|monitor| {
            let position = monitor.position();
            let size = monitor.size();
            DisplayBounds {
                x: position.x,
                y: position.y,
                width: size.width,
                height: size.height,
            }
        })
    }

    fn size(&self) -> SurfaceSize {
        let size = self.window.outer_size();
        SurfaceSize {
            width: size.width,
            height: size.height,
        }
    }

    fn move_to(&mut self, origin: SurfaceOrigin) {
        self.window
            .set_outer_position(PhysicalPosition::new(origin.x, origin.y));
    }

    fn present(&mut self, frame: &SwitcherFrame) {
        let summary = frame.summary();
        debug!(frame = %summary, hints = frame.hints, "Presenting switcher frame");
        self.window.set_title(&summary);
    }

    /// On macOS `set_focus` activates the whole app. tao has no
    /// non-activating panel that only becomes key, so this is as close as
    /// it gets.
    fn show(&mut self) {
        self.window.set_visible(true);
        self.window.set_focus();
    }

    fn hide(&mut self) {
        self.window.set_visible(false);
    }
}

/// Creates the overlay window on the event loop that is currently running.
pub struct OverlayWindowFactory<'a> {
    target: &'a EventLoopWindowTarget<UserEvent>,
    config: &'a SwitcherConfig,
}

impl<'a> OverlayWindowFactory<'a> {
    /// Factory bound to `target`, sized from `config`.
    pub fn new(target: &'a EventLoopWindowTarget<UserEvent>, config: &'a SwitcherConfig) -> Self {
        Self { target, config }
    }
}

impl SurfaceFactory for OverlayWindowFactory<'_> {
    type Surface = OverlayWindow;

    fn create_surface(&self) -> Result<OverlayWindow, String> {
        let window = WindowBuilder::new()
            .with_title(SWITCHER_TITLE)
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.width),
                f64::from(self.config.height),
            ))
            .with_decorations(false)
            .with_resizable(false)
            .with_always_on_top(true)
            .with_visible_on_all_workspaces(true)
            .with_visible(false)
            .with_focused(false)
            .build(self.target)
            .map_err(|e| format!("Failed to build overlay window: {}", e))?;

        debug!(
            width = self.config.width,
            height = self.config.height,
            "Overlay window created"
        );

        Ok(OverlayWindow { window })
    }
}
