//! Presentation surface seam.
//!
//! The controller drives a surface through these traits so the lifecycle
//! logic stays independent of the windowing toolkit.

use crate::SwitcherFrame;

/// Bounds of a display in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayBounds {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

/// Outer size of a surface in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

/// Top-left position of a surface in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceOrigin {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
}

impl DisplayBounds {
    /// Origin that places a surface of `size` in the middle of this display.
    ///
    /// A surface larger than the display overhangs it equally on both sides.
    pub fn centered_origin(&self, size: SurfaceSize) -> SurfaceOrigin {
        let dx = (i64::from(self.width) - i64::from(size.width)) / 2;
        let dy = (i64::from(self.height) - i64::from(size.height)) / 2;

        SurfaceOrigin {
            x: clamp_i32(i64::from(self.x) + dx),
            y: clamp_i32(i64::from(self.y) + dy),
        }
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// A transient, non-activating window that can show the switcher.
pub trait PresentationSurface {
    /// Bounds of the primary display, `None` when no display is available.
    fn primary_display(&self) -> Option<DisplayBounds>;

    /// Current outer size.
    fn size(&self) -> SurfaceSize;

    /// Move the top-left corner to `origin`.
    fn move_to(&mut self, origin: SurfaceOrigin);

    /// Draw `frame`.
    fn present(&mut self, frame: &SwitcherFrame);

    /// Make visible and take key input without activating the application.
    fn show(&mut self);

    /// Hide without destroying.
    fn hide(&mut self);
}

/// Builds the presentation surface on first use.
pub trait SurfaceFactory {
    /// The surface type produced.
    type Surface: PresentationSurface;

    /// Create a hidden surface, or explain why none could be made.
    fn create_surface(&self) -> Result<Self::Surface, String>;
}
