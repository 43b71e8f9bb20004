//! Ownership of the single global hotkey registration.
//!
//! The registry installs the OS handler and key combination through a
//! [`HotkeyBackend`], arms the [`HotkeyBridge`] slot, and runs its callback
//! only for triggers whose generation matches the live registration. A
//! trigger posted before `unregister` is therefore harmless when it is
//! delivered afterwards.

use crate::{
    HotkeyBackend, HotkeyBinding, HotkeyBridge, HotkeyError, HotkeyRegistration, HotkeyResult,
    HotkeyTrigger, TriggerSink,
};

use std::{
    panic::Location,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(1);

struct ActiveHotkey<B: HotkeyBackend> {
    registration: HotkeyRegistration<B::Handler, B::Hotkey>,
    binding: HotkeyBinding,
    generation: u64,
    on_trigger: Box<dyn FnMut()>,
}

/// Owns at most one live global hotkey and its callback.
///
/// Lives on the main thread. Triggers reach it through the [`TriggerSink`]
/// and are handed back via [`HotkeyRegistry::dispatch`].
pub struct HotkeyRegistry<B: HotkeyBackend> {
    id: u64,
    backend: B,
    bridge: Arc<HotkeyBridge>,
    sink: Arc<dyn TriggerSink>,
    active: Option<ActiveHotkey<B>>,
}

impl<B: HotkeyBackend> HotkeyRegistry<B> {
    /// Create a registry bound to the process-wide bridge.
    pub fn new(backend: B, sink: Arc<dyn TriggerSink>) -> Self {
        Self::with_bridge(backend, sink, HotkeyBridge::global())
    }

    /// Create a registry bound to a specific bridge.
    pub fn with_bridge(backend: B, sink: Arc<dyn TriggerSink>, bridge: Arc<HotkeyBridge>) -> Self {
        Self {
            id: NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed),
            backend,
            bridge,
            sink,
            active: None,
        }
    }

    /// Register `binding`, replacing any binding this registry holds.
    ///
    /// The previous binding is fully released before the new one is
    /// installed. `on_trigger` runs on the main context each time the
    /// combination is pressed, never inside the OS callback.
    ///
    /// # Errors
    ///
    /// - [`HotkeyError::HandlerInstallFailed`] if the event handler could not
    ///   be installed. Nothing is retained.
    /// - [`HotkeyError::HotkeyRegisterFailed`] if the combination was refused
    ///   or another registry holds the global slot. The handler installed in
    ///   this attempt is removed again.
    #[track_caller]
    #[instrument(skip(self, on_trigger))]
    pub fn register<F>(&mut self, binding: HotkeyBinding, on_trigger: F) -> HotkeyResult<()>
    where
        F: FnMut() + 'static,
    {
        let location = Location::caller();

        self.unregister();

        if self.bridge.is_held_by_other(self.id) {
            return Err(HotkeyError::HotkeyRegisterFailed {
                reason: "Global hotkey slot is held by another registry".to_string(),
                location: ErrorLocation::from(location),
            });
        }

        let handler =
            self.backend
                .install_handler()
                .map_err(|reason| HotkeyError::HandlerInstallFailed {
                    reason,
                    location: ErrorLocation::from(location),
                })?;

        let hotkey = match self.backend.register_hotkey(&handler, &binding) {
            Ok(hotkey) => hotkey,
            Err(reason) => {
                self.backend.remove_handler(handler);
                warn!(%binding, "Hotkey refused, event handler rolled back");
                return Err(HotkeyError::HotkeyRegisterFailed {
                    reason: format!("Failed to register {}: {}", binding, reason),
                    location: ErrorLocation::from(location),
                });
            }
        };
        let hotkey_id = self.backend.hotkey_id(&hotkey);

        let generation = match self.bridge.arm(self.id, hotkey_id, Arc::clone(&self.sink)) {
            Ok(generation) => generation,
            Err(holder) => {
                self.release(handler, hotkey);
                return Err(HotkeyError::HotkeyRegisterFailed {
                    reason: format!("Global hotkey slot is held by registry {}", holder),
                    location: ErrorLocation::from(location),
                });
            }
        };

        info!(hotkey = %binding, hotkey_id, generation, "Global hotkey registered");

        self.active = Some(ActiveHotkey {
            registration: HotkeyRegistration {
                handler,
                hotkey,
                hotkey_id,
            },
            binding,
            generation,
            on_trigger: Box::new(on_trigger),
        });

        Ok(())
    }

    /// Release the live binding, if any.
    ///
    /// Idempotent. After this returns the callback has been dropped and no
    /// trigger, queued or future, can reach it.
    #[instrument(skip(self))]
    pub fn unregister(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        // Waits for any delivery holding the bridge lock.
        self.bridge.disarm(self.id);

        let ActiveHotkey {
            registration,
            binding,
            generation,
            on_trigger,
        } = active;
        drop(on_trigger);

        let hotkey_id = registration.hotkey_id;
        self.release(registration.handler, registration.hotkey);

        info!(hotkey = %binding, hotkey_id, generation, "Global hotkey unregistered");
    }

    /// Run the callback for a trigger posted by the bridge.
    ///
    /// Returns false, without running anything, for a trigger from a
    /// registration that has since been replaced or released.
    pub fn dispatch(&mut self, trigger: HotkeyTrigger) -> bool {
        match self.active.as_mut() {
            Some(active) if active.generation == trigger.generation() => {
                debug!(generation = active.generation, "Hotkey triggered");
                (active.on_trigger)();
                true
            }
            _ => {
                debug!(generation = trigger.generation(), "Stale hotkey trigger discarded");
                false
            }
        }
    }

    /// The live binding, if any.
    pub fn binding(&self) -> Option<HotkeyBinding> {
        self.active.as_ref().map(|active| active.binding)
    }

    /// Whether a binding is live.
    pub fn is_registered(&self) -> bool {
        self.active.is_some()
    }

    /// OS id of the live hotkey, if any.
    pub fn hotkey_id(&self) -> Option<u32> {
        self.active
            .as_ref()
            .map(|active| active.registration.hotkey_id)
    }

    /// The backend this registry drives.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn release(&mut self, handler: B::Handler, hotkey: B::Hotkey) {
        if let Err(reason) = self.backend.unregister_hotkey(&handler, hotkey) {
            warn!(reason = %reason, "Failed to unregister hotkey, removing handler anyway");
        }
        self.backend.remove_handler(handler);
    }
}

impl<B: HotkeyBackend> Drop for HotkeyRegistry<B> {
    fn drop(&mut self) {
        self.unregister();
    }
}
