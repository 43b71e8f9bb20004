//! Process-wide bridge from the context-free OS hotkey callback to the
//! registry that owns the live binding.
//!
//! The bridge holds at most one armed slot. The OS callback reads the slot
//! under the lock and posts a [`HotkeyTrigger`] to the main context while
//! still holding it, so disarming the slot waits out any in-flight delivery.
//! The callback never sees the registry itself, only the generation number
//! the registry checks again before running its callback.

use std::sync::{
    Arc, LazyLock, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicU64, Ordering},
    mpsc,
};

use tracing::{trace, warn};

static GLOBAL_BRIDGE: LazyLock<Arc<HotkeyBridge>> = LazyLock::new(|| Arc::new(HotkeyBridge::new()));

/// A hotkey press posted to the main context, tagged with the generation
/// of the registration that was armed when the OS reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyTrigger {
    generation: u64,
}

impl HotkeyTrigger {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    /// Registration generation this press belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Posts triggers to the application's main execution context.
///
/// Called from the OS callback context with the bridge locked, so it must
/// return promptly and must not block on the main context.
pub trait TriggerSink: Send + Sync {
    /// Enqueue `trigger` for the main context.
    fn post(&self, trigger: HotkeyTrigger);
}

impl TriggerSink for mpsc::Sender<HotkeyTrigger> {
    fn post(&self, trigger: HotkeyTrigger) {
        if self.send(trigger).is_err() {
            warn!(generation = trigger.generation, "Trigger receiver dropped");
        }
    }
}

struct ArmedSlot {
    owner: u64,
    generation: u64,
    hotkey_id: u32,
    sink: Arc<dyn TriggerSink>,
}

/// Single global slot naming the registration the OS callback should reach.
pub struct HotkeyBridge {
    slot: Mutex<Option<ArmedSlot>>,
    next_generation: AtomicU64,
}

impl HotkeyBridge {
    /// Create an empty bridge.
    ///
    /// Production code uses [`HotkeyBridge::global`]; separate instances
    /// keep tests independent of each other.
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            next_generation: AtomicU64::new(1),
        }
    }

    /// The process-wide bridge.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL_BRIDGE)
    }

    /// Report a key-down for `hotkey_id` from the OS callback.
    ///
    /// Returns true if the press matched the armed registration and a
    /// trigger was posted.
    pub fn deliver(&self, hotkey_id: u32) -> bool {
        let slot = self.lock();
        match slot.as_ref() {
            Some(armed) if armed.hotkey_id == hotkey_id => {
                trace!(hotkey_id, generation = armed.generation, "Hotkey trigger posted");
                armed.sink.post(HotkeyTrigger::new(armed.generation));
                true
            }
            _ => {
                trace!(hotkey_id, "Hotkey press with no matching registration");
                false
            }
        }
    }

    /// Whether any registry currently holds the slot.
    pub fn is_armed(&self) -> bool {
        self.lock().is_some()
    }

    pub(crate) fn is_held_by_other(&self, owner: u64) -> bool {
        self.lock().as_ref().is_some_and(|armed| armed.owner != owner)
    }

    /// Claim the slot for `owner`. Returns the new generation, or the
    /// current holder if another registry owns the slot.
    pub(crate) fn arm(
        &self,
        owner: u64,
        hotkey_id: u32,
        sink: Arc<dyn TriggerSink>,
    ) -> Result<u64, u64> {
        let mut slot = self.lock();
        if let Some(armed) = slot.as_ref().filter(|armed| armed.owner != owner) {
            return Err(armed.owner);
        }

        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        *slot = Some(ArmedSlot {
            owner,
            generation,
            hotkey_id,
            sink,
        });

        Ok(generation)
    }

    /// Clear the slot if `owner` holds it. Blocks until no delivery is in
    /// flight.
    pub(crate) fn disarm(&self, owner: u64) -> bool {
        let mut slot = self.lock();
        if slot.as_ref().is_some_and(|armed| armed.owner == owner) {
            *slot = None;
            true
        } else {
            false
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<ArmedSlot>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HotkeyBridge {
    fn default() -> Self {
        Self::new()
    }
}
