use crate::{
    Code, HotkeyBinding, HotkeyError, ModifierMask,
    tests::support::{RegistryHarness, counter},
};

use std::sync::Arc;

fn binding_a() -> HotkeyBinding {
    HotkeyBinding::new(Code::Backquote, ModifierMask::COMMAND)
}

fn binding_b() -> HotkeyBinding {
    HotkeyBinding::new(Code::Space, ModifierMask::CONTROL | ModifierMask::OPTION)
}

/// WHAT: Register then unregister releases every OS resource
/// WHY: A leaked registration would block the same combination next time
#[test]
#[allow(clippy::unwrap_used)]
fn given_registered_binding_when_unregistered_then_same_binding_registers_again() {
    // Given: A registry holding binding A
    let mut h = RegistryHarness::new();
    let (_count, on_trigger) = counter();
    h.registry.register(binding_a(), on_trigger).unwrap();
    assert_eq!(h.os.borrow().live_handlers, 1);
    assert_eq!(h.os.borrow().live_hotkeys.len(), 1);

    // When: Unregistering
    h.registry.unregister();

    // Then: Nothing is live and the same binding can be registered again
    assert_eq!(h.os.borrow().live_handlers, 0);
    assert!(h.os.borrow().live_hotkeys.is_empty());
    assert!(!h.bridge.is_armed());

    let (_count, on_trigger) = counter();
    assert!(h.registry.register(binding_a(), on_trigger).is_ok());
}

/// WHAT: Unregister is a no-op when nothing is registered
/// WHY: Teardown paths call it unconditionally
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_registration_when_unregistering_twice_then_nothing_happens() {
    // Given: A fresh registry
    let mut h = RegistryHarness::new();

    // When: Unregistering before any register, then after one, twice
    h.registry.unregister();
    let (_count, on_trigger) = counter();
    h.registry.register(binding_a(), on_trigger).unwrap();
    h.registry.unregister();
    h.registry.unregister();

    // Then: State stays clean
    assert!(!h.registry.is_registered());
    assert_eq!(h.os.borrow().live_handlers, 0);
}

/// WHAT: A refused combination rolls back the handler installed with it
/// WHY: An orphaned handler would outlive the failed registration
#[test]
fn given_foreign_binding_when_registering_then_handler_rolled_back() {
    // Given: Binding A is owned by another process
    let mut h = RegistryHarness::new();
    h.os.borrow_mut().foreign.insert(binding_a());

    // When: Registering binding A
    let (_count, on_trigger) = counter();
    let result = h.registry.register(binding_a(), on_trigger);

    // Then: HotkeyRegisterFailed, no handler left, bridge empty
    assert!(matches!(result, Err(HotkeyError::HotkeyRegisterFailed { .. })));
    assert_eq!(h.os.borrow().live_handlers, 0);
    assert!(!h.registry.is_registered());
    assert!(!h.bridge.is_armed());
}

/// WHAT: Handler installation failure is reported as HandlerInstallFailed
/// WHY: Callers distinguish a broken event target from a taken combination
#[test]
fn given_handler_install_refused_when_registering_then_handler_install_failed() {
    // Given: The OS refuses event handlers
    let mut h = RegistryHarness::new();
    h.os.borrow_mut().fail_install = true;

    // When: Registering
    let (_count, on_trigger) = counter();
    let result = h.registry.register(binding_a(), on_trigger);

    // Then: HandlerInstallFailed and nothing retained
    assert!(matches!(result, Err(HotkeyError::HandlerInstallFailed { .. })));
    assert!(h.os.borrow().live_hotkeys.is_empty());
    assert!(!h.bridge.is_armed());
}

/// WHAT: Registering B over A leaves only B live and triggering
/// WHY: At most one binding may be live process-wide
#[test]
#[allow(clippy::unwrap_used)]
fn given_binding_a_when_registering_b_without_unregister_then_only_b_triggers() {
    // Given: Binding A registered
    let mut h = RegistryHarness::new();
    let (count_a, on_a) = counter();
    h.registry.register(binding_a(), on_a).unwrap();
    let id_a = h.registry.hotkey_id().unwrap();

    // When: Registering B directly
    let (count_b, on_b) = counter();
    h.registry.register(binding_b(), on_b).unwrap();
    let id_b = h.registry.hotkey_id().unwrap();

    // Then: Only B is live, pressing A does nothing, pressing B fires B
    assert_eq!(h.os.borrow().live_handlers, 1);
    assert_eq!(h.os.borrow().live_hotkeys.len(), 1);
    assert_eq!(h.registry.binding(), Some(binding_b()));

    assert_eq!(h.press(id_a), 0);
    assert_eq!(h.press(id_b), 1);
    assert_eq!(count_a.get(), 0);
    assert_eq!(count_b.get(), 1);
}

/// WHAT: A trigger queued before unregister is discarded when dispatched
/// WHY: The callback must never run after unregister returns
#[test]
#[allow(clippy::unwrap_used)]
fn given_queued_trigger_when_unregistered_before_dispatch_then_callback_not_run() {
    // Given: A press delivered by the OS but not yet dispatched
    let mut h = RegistryHarness::new();
    let (count, on_trigger) = counter();
    h.registry.register(binding_a(), on_trigger).unwrap();
    let id = h.registry.hotkey_id().unwrap();
    assert!(h.bridge.deliver(id));
    let trigger = h.triggers.try_recv().unwrap();

    // When: Unregistering, then dispatching the queued trigger
    h.registry.unregister();
    let ran = h.registry.dispatch(trigger);

    // Then: Nothing runs
    assert!(!ran);
    assert_eq!(count.get(), 0);
}

/// WHAT: A trigger from a replaced registration does not fire the new callback
/// WHY: Generations separate old presses from the live binding
#[test]
#[allow(clippy::unwrap_used)]
fn given_queued_trigger_when_binding_replaced_then_trigger_is_stale() {
    // Given: A queued trigger for binding A
    let mut h = RegistryHarness::new();
    let (_count_a, on_a) = counter();
    h.registry.register(binding_a(), on_a).unwrap();
    let id_a = h.registry.hotkey_id().unwrap();
    h.bridge.deliver(id_a);
    let stale = h.triggers.try_recv().unwrap();

    // When: Replacing A with B and dispatching the old trigger
    let (count_b, on_b) = counter();
    h.registry.register(binding_b(), on_b).unwrap();

    // Then: B's callback is not run
    assert!(!h.registry.dispatch(stale));
    assert_eq!(count_b.get(), 0);
}

/// WHAT: Each press is dispatched exactly once
/// WHY: The bridge posts one trigger per key-down
#[test]
#[allow(clippy::unwrap_used)]
fn given_registered_binding_when_pressed_three_times_then_callback_runs_three_times() {
    // Given: A registered binding
    let mut h = RegistryHarness::new();
    let (count, on_trigger) = counter();
    h.registry.register(binding_a(), on_trigger).unwrap();
    let id = h.registry.hotkey_id().unwrap();

    // When: Pressing three times
    for _ in 0..3 {
        h.press(id);
    }

    // Then: Three invocations
    assert_eq!(count.get(), 3);
}

/// WHAT: Dropping the registry releases its registration
/// WHY: Destruction implies unregister
#[test]
#[allow(clippy::unwrap_used)]
fn given_registered_binding_when_registry_dropped_then_resources_released() {
    // Given: A registered binding
    let h = RegistryHarness::new();
    let RegistryHarness {
        mut registry,
        os,
        bridge,
        triggers: _triggers,
    } = h;
    let (_count, on_trigger) = counter();
    registry.register(binding_a(), on_trigger).unwrap();

    // When: Dropping the registry
    drop(registry);

    // Then: OS resources and the bridge slot are released
    assert_eq!(os.borrow().live_handlers, 0);
    assert!(os.borrow().live_hotkeys.is_empty());
    assert!(!bridge.is_armed());
}

/// WHAT: A second registry cannot arm a bridge another registry holds
/// WHY: The global slot rejects rather than duplicates registrations
#[test]
#[allow(clippy::unwrap_used)]
fn given_bridge_held_when_second_registry_registers_then_rejected_without_leak() {
    // Given: Registry one holds the shared bridge
    let mut first = RegistryHarness::new();
    let (count_first, on_first) = counter();
    first.registry.register(binding_a(), on_first).unwrap();
    let mut second = RegistryHarness::on_bridge(Arc::clone(&first.bridge));

    // When: Registry two registers another binding on the same bridge
    let (_count_second, on_second) = counter();
    let result = second.registry.register(binding_b(), on_second);

    // Then: Rejected, registry two holds nothing, registry one still fires
    assert!(matches!(result, Err(HotkeyError::HotkeyRegisterFailed { .. })));
    assert_eq!(second.os.borrow().live_handlers, 0);
    assert!(!second.registry.is_registered());

    let id = first.registry.hotkey_id().unwrap();
    assert_eq!(first.press(id), 1);
    assert_eq!(count_first.get(), 1);
}

/// WHAT: A released bridge can be claimed by another registry
/// WHY: Ownership is exclusive only while registered
#[test]
#[allow(clippy::unwrap_used)]
fn given_first_registry_unregistered_when_second_registers_then_succeeds() {
    // Given: Registry one registered and then released
    let mut first = RegistryHarness::new();
    let (_count, on_first) = counter();
    first.registry.register(binding_a(), on_first).unwrap();
    first.registry.unregister();
    let mut second = RegistryHarness::on_bridge(Arc::clone(&first.bridge));

    // When: Registry two registers
    let (_count, on_second) = counter();
    let result = second.registry.register(binding_b(), on_second);

    // Then: Succeeds and owns the bridge
    assert!(result.is_ok());
    assert!(second.bridge.is_armed());
}

/// WHAT: A refused replacement leaves neither the old nor the new binding live
/// WHY: Callers can rely on a failed register having released everything
#[test]
#[allow(clippy::unwrap_used)]
fn given_live_binding_when_replacement_refused_then_nothing_left_registered() {
    // Given: Binding A live, binding B owned by another process
    let mut h = RegistryHarness::new();
    let (_count, on_trigger) = counter();
    h.registry.register(binding_a(), on_trigger).unwrap();
    h.os.borrow_mut().foreign.insert(binding_b());

    // When: Replacing A with B
    let (_count_b, on_trigger_b) = counter();
    let result = h.registry.register(binding_b(), on_trigger_b);

    // Then: Error, and no handler, hotkey or armed slot survives
    assert!(matches!(result, Err(HotkeyError::HotkeyRegisterFailed { .. })));
    assert!(!h.registry.is_registered());
    assert_eq!(h.registry.binding(), None);
    assert!(h.os.borrow().live_hotkeys.is_empty());
    assert_eq!(h.os.borrow().live_handlers, 0);
    assert!(!h.bridge.is_armed());
}
