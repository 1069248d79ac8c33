//! Hotkey registration rebuild behavior against a mock OS backend.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use switchkey::config::Settings;
use switchkey::input::{HotkeyOs, HotkeyRegistrar};
use switchkey::model::constants::{CARBON_CMD_KEY, CARBON_OPTION_KEY, HKID_SETTINGS};
use switchkey::model::{HotkeyBinding, ModifierSet};

#[derive(Default)]
struct MockState {
    next_handle: u64,
    live: BTreeMap<u64, (u16, u32, u32)>,
    refuse_ids: Vec<u32>,
}

/// Records every register/unregister call; optionally refuses ids.
/// Shared state so tests can inspect it while the registrar owns the
/// backend.
#[derive(Clone, Default)]
struct MockOs {
    state: Rc<RefCell<MockState>>,
}

impl MockOs {
    fn refusing(ids: &[u32]) -> Self {
        let os = MockOs::default();
        os.state.borrow_mut().refuse_ids = ids.to_vec();
        os
    }

    fn live_len(&self) -> usize {
        self.state.borrow().live.len()
    }

    fn flags_for_ids(&self, range: std::ops::Range<u32>) -> Vec<u32> {
        self.state
            .borrow()
            .live
            .values()
            .filter(|(_, _, id)| range.contains(id))
            .map(|(_, flags, _)| *flags)
            .collect()
    }
}

impl HotkeyOs for MockOs {
    type Handle = u64;

    fn register(&mut self, keycode: u16, modifier_flags: u32, id: u32) -> Option<u64> {
        let mut state = self.state.borrow_mut();
        if state.refuse_ids.contains(&id) {
            return None;
        }
        state.next_handle += 1;
        let handle = state.next_handle;
        state.live.insert(handle, (keycode, modifier_flags, id));
        Some(handle)
    }

    fn unregister(&mut self, handle: u64) {
        let removed = self.state.borrow_mut().live.remove(&handle);
        assert!(removed.is_some(), "double unregister of handle {handle}");
    }
}

#[test]
fn rebuild_registers_digits_and_settings_hotkey() {
    let os = MockOs::default();
    let mut registrar = HotkeyRegistrar::new(os.clone());

    registrar.update_global_keybindings(&Settings::default());
    // 10 digits + settings (previous-app hotkey is unset by default).
    assert_eq!(registrar.active_count(), 11);
    assert_eq!(os.live_len(), 11);

    registrar.unregister_all();
    assert_eq!(os.live_len(), 0);
}

#[test]
fn empty_modifier_set_falls_back_to_command() {
    let os = MockOs::default();
    let mut registrar = HotkeyRegistrar::new(os.clone());

    let settings = Settings {
        switch_modifiers: ModifierSet::EMPTY,
        ..Settings::default()
    };
    registrar.update_global_keybindings(&settings);

    // Every digit registration used the Command fallback, never a bare
    // unmodified digit.
    let digit_flags = os.flags_for_ids(1000..1010);
    assert_eq!(digit_flags.len(), 10);
    assert!(digit_flags.iter().all(|&f| f == CARBON_CMD_KEY));
}

#[test]
fn reregistration_is_idempotent() {
    let os = MockOs::default();
    let mut registrar = HotkeyRegistrar::new(os.clone());
    let settings = Settings::default();

    registrar.update_global_keybindings(&settings);
    let first = registrar.active_count();
    registrar.update_global_keybindings(&settings);
    assert_eq!(registrar.active_count(), first);
    registrar.update_global_keybindings(&settings);
    assert_eq!(registrar.active_count(), first);

    // No stale handles accumulate in the backend either.
    assert_eq!(os.live_len(), first);
}

#[test]
fn refused_registration_skips_only_that_hotkey() {
    let os = MockOs::refusing(&[1003]);
    let mut registrar = HotkeyRegistrar::new(os.clone());

    registrar.update_global_keybindings(&Settings::default());
    assert_eq!(registrar.active_count(), 10); // 9 digits + settings
    assert!(os
        .state
        .borrow()
        .live
        .values()
        .all(|(_, _, id)| *id != 1003));
}

#[test]
fn unset_and_unmappable_bindings_are_skipped() {
    let os = MockOs::default();
    let mut registrar = HotkeyRegistrar::new(os);

    let settings = Settings {
        settings_hotkey: HotkeyBinding::UNSET,
        previous_hotkey: HotkeyBinding::new(
            'É',
            ModifierSet {
                command: true,
                ..ModifierSet::EMPTY
            },
        ),
        ..Settings::default()
    };
    registrar.update_global_keybindings(&settings);
    // Only the ten digits made it through.
    assert_eq!(registrar.active_count(), 10);
}

#[test]
fn digit_registrations_use_configured_modifiers() {
    let os = MockOs::default();
    let mut registrar = HotkeyRegistrar::new(os.clone());

    registrar.update_global_keybindings(&Settings::default());

    // Default switch modifier is Option.
    let digit_flags = os.flags_for_ids(1000..1010);
    assert!(digit_flags.iter().all(|&f| f == CARBON_OPTION_KEY));

    // The settings hotkey keeps its own modifier mask.
    let settings_flags = os.flags_for_ids(HKID_SETTINGS..HKID_SETTINGS + 1);
    assert_eq!(settings_flags.len(), 1);
    assert_ne!(settings_flags[0], 0);
}
