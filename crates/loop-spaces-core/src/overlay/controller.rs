//! Overlay lifecycle: one lazily created surface, shown and hidden on demand.
//!
//! The controller is either fully Hidden (no session, surface hidden) or
//! fully Visible (session live, surface centered and shown). Every failure
//! path leaves it Hidden.

use crate::{
    KeyDisposition, OverlayError, OverlayResult, OverlayState, PresentationSurface, SelectableItem,
    SelectionKey, SelectionSession, SurfaceFactory, render,
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Owns the switcher surface and the session shown on it.
pub struct OverlayController<S: PresentationSurface> {
    surface: Option<S>,
    session: Option<SelectionSession>,
    state: OverlayState,
}

impl<S: PresentationSurface> OverlayController<S> {
    /// Create a hidden controller. No surface exists until the first show.
    pub fn new() -> Self {
        Self {
            surface: None,
            session: None,
            state: OverlayState::Hidden,
        }
    }

    /// Show the switcher if hidden, hide it if visible.
    ///
    /// When showing, `factory` is used only if the surface has not been
    /// created yet. Returns the state reached.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::SurfaceCreationFailed`] if no surface could be
    /// created or no display is available. The controller stays Hidden.
    #[track_caller]
    #[instrument(skip_all, fields(item_count = items.len()))]
    pub fn toggle<F, C, X>(
        &mut self,
        factory: &F,
        items: Vec<SelectableItem>,
        on_commit: C,
        on_cancel: X,
    ) -> OverlayResult<OverlayState>
    where
        F: SurfaceFactory<Surface = S>,
        C: FnMut(SelectableItem) + 'static,
        X: FnMut() + 'static,
    {
        match self.state {
            OverlayState::Visible => {
                self.hide();
                Ok(OverlayState::Hidden)
            }
            OverlayState::Hidden => {
                self.show(factory, items, Box::new(on_commit), Box::new(on_cancel))?;
                Ok(OverlayState::Visible)
            }
        }
    }

    /// Force Hidden. Safe to call in any state.
    pub fn hide(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(session_id = %session.session_id(), "Selection session discarded");
        }

        if self.state == OverlayState::Visible {
            if let Some(surface) = self.surface.as_mut() {
                surface.hide();
            }
            info!("Overlay hidden");
        }

        self.state = OverlayState::Hidden;
    }

    /// Route a key from the surface to the live session and redraw.
    ///
    /// Ignored while Hidden.
    pub fn handle_key(&mut self, key: SelectionKey) -> KeyDisposition {
        let (Some(session), Some(surface)) = (self.session.as_mut(), self.surface.as_mut()) else {
            return KeyDisposition::Ignored;
        };

        let disposition = session.handle_key(key);
        if disposition == KeyDisposition::Handled && !session.is_finished() {
            surface.present(&render(session));
        }

        disposition
    }

    /// Current visibility.
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// The live session, present only while Visible.
    pub fn session(&self) -> Option<&SelectionSession> {
        self.session.as_ref()
    }

    /// The surface, once it has been created.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    #[track_caller]
    fn show<F>(
        &mut self,
        factory: &F,
        items: Vec<SelectableItem>,
        on_commit: Box<dyn FnMut(SelectableItem)>,
        on_cancel: Box<dyn FnMut()>,
    ) -> OverlayResult<()>
    where
        F: SurfaceFactory<Surface = S>,
    {
        let location = Location::caller();

        if self.surface.is_none() {
            let surface =
                factory
                    .create_surface()
                    .map_err(|reason| OverlayError::SurfaceCreationFailed {
                        reason,
                        location: ErrorLocation::from(location),
                    })?;
            info!("Overlay surface created");
            self.surface = Some(surface);
        }

        let Some(surface) = self.surface.as_mut() else {
            return Err(OverlayError::SurfaceCreationFailed {
                reason: "Surface missing after creation".to_string(),
                location: ErrorLocation::from(location),
            });
        };

        let Some(display) = surface.primary_display() else {
            warn!("No primary display, overlay stays hidden");
            return Err(OverlayError::SurfaceCreationFailed {
                reason: "No display available".to_string(),
                location: ErrorLocation::from(location),
            });
        };

        let session = SelectionSession::initialize(items, on_commit, on_cancel);

        let origin = display.centered_origin(surface.size());
        surface.move_to(origin);
        surface.present(&render(&session));
        surface.show();

        info!(
            session_id = %session.session_id(),
            x = origin.x,
            y = origin.y,
            "Overlay shown"
        );

        self.session = Some(session);
        self.state = OverlayState::Visible;

        Ok(())
    }
}

impl<S: PresentationSurface> Default for OverlayController<S> {
    fn default() -> Self {
        Self::new()
    }
}
