//! Hotkey dispatch behavior, including the pause gate.

use std::collections::BTreeMap;

use switchkey::input::{Capabilities, HotkeyRouter};
use switchkey::model::constants::{HKID_PREVIOUS, HKID_SETTINGS};

/// Records every capability invocation.
#[derive(Default)]
struct Recorder {
    settings_opened: usize,
    switched_to: Vec<String>,
    previous_switches: usize,
    fail_activation: bool,
}

impl Recorder {
    fn total_calls(&self) -> usize {
        self.settings_opened + self.switched_to.len() + self.previous_switches
    }
}

impl Capabilities for Recorder {
    fn open_settings(&mut self) {
        self.settings_opened += 1;
    }

    fn switch_to_application(&mut self, name: &str) -> bool {
        self.switched_to.push(name.to_string());
        !self.fail_activation
    }

    fn switch_to_previous_application(&mut self) -> bool {
        self.previous_switches += 1;
        true
    }
}

fn bindings(entries: &[(char, &str)]) -> BTreeMap<char, String> {
    entries
        .iter()
        .map(|(d, app)| (*d, app.to_string()))
        .collect()
}

#[test]
fn digit_hotkey_activates_bound_application() {
    let router = HotkeyRouter::new();
    let mut caps = Recorder::default();
    let bindings = bindings(&[('3', "Terminal"), ('7', "Safari")]);

    assert!(router.dispatch(1003, &bindings, &mut caps));
    assert_eq!(caps.switched_to, vec!["Terminal"]);

    assert!(router.dispatch(1007, &bindings, &mut caps));
    assert_eq!(caps.switched_to, vec!["Terminal", "Safari"]);
}

#[test]
fn unbound_digit_is_a_no_op() {
    let router = HotkeyRouter::new();
    let mut caps = Recorder::default();
    let bindings = bindings(&[('3', "Terminal")]);

    assert!(!router.dispatch(1005, &bindings, &mut caps));
    assert_eq!(caps.total_calls(), 0);
}

#[test]
fn failed_activation_is_reported_unhandled() {
    let router = HotkeyRouter::new();
    let mut caps = Recorder {
        fail_activation: true,
        ..Recorder::default()
    };
    let bindings = bindings(&[('1', "Mail")]);

    assert!(!router.dispatch(1001, &bindings, &mut caps));
    // The attempt was still made.
    assert_eq!(caps.switched_to, vec!["Mail"]);
}

#[test]
fn settings_and_previous_hotkeys_route_to_their_actions() {
    let router = HotkeyRouter::new();
    let mut caps = Recorder::default();
    let bindings = BTreeMap::new();

    assert!(router.dispatch(HKID_SETTINGS, &bindings, &mut caps));
    assert_eq!(caps.settings_opened, 1);

    assert!(router.dispatch(HKID_PREVIOUS, &bindings, &mut caps));
    assert_eq!(caps.previous_switches, 1);
}

#[test]
fn unknown_hotkey_id_is_unhandled() {
    let router = HotkeyRouter::new();
    let mut caps = Recorder::default();

    assert!(!router.dispatch(9999, &BTreeMap::new(), &mut caps));
    assert_eq!(caps.total_calls(), 0);
}

/// While paused, every id is swallowed as handled without touching any
/// capability. Resuming restores normal dispatch.
#[test]
fn pause_swallows_everything_without_side_effects() {
    let mut router = HotkeyRouter::new();
    let mut caps = Recorder::default();
    let bindings = bindings(&[('3', "Terminal")]);

    assert!(router.toggle_paused());
    assert!(router.is_paused());

    for id in [1003, 1005, HKID_SETTINGS, HKID_PREVIOUS, 9999] {
        assert!(router.dispatch(id, &bindings, &mut caps), "id {id}");
    }
    assert_eq!(caps.total_calls(), 0);

    assert!(!router.toggle_paused());
    assert!(router.dispatch(1003, &bindings, &mut caps));
    assert_eq!(caps.switched_to, vec!["Terminal"]);
}
