mod controller;
mod render;
mod state;
mod surface;

pub use {
    controller::OverlayController,
    render::{SWITCHER_HINTS, SWITCHER_TITLE, SwitcherFrame, SwitcherTile, render},
    state::OverlayState,
    surface::{DisplayBounds, PresentationSurface, SurfaceFactory, SurfaceOrigin, SurfaceSize},
};
