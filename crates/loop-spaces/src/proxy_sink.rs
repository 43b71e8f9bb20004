use crate::UserEvent;

use std::sync::{Mutex, PoisonError};

use loop_spaces_core::{HotkeyTrigger, TriggerSink};
use tao::event_loop::EventLoopProxy;
use tracing::warn;

/// Posts hotkey triggers onto the tao event loop.
pub struct ProxyTriggerSink {
    proxy: Mutex<EventLoopProxy<UserEvent>>,
}

impl ProxyTriggerSink {
    /// Wrap an event loop proxy.
    pub fn new(proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
        }
    }
}

impl TriggerSink for ProxyTriggerSink {
    fn post(&self, trigger: HotkeyTrigger) {
        let proxy = self.proxy.lock().unwrap_or_else(PoisonError::into_inner);

        if proxy.send_event(UserEvent::Hotkey(trigger)).is_err() {
            warn!("Event loop closed, hotkey trigger dropped");
        }
    }
}
