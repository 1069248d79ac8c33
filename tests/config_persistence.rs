//! Config file round-trips through a real temporary directory.

use std::fs;

use switchkey::config::{ConfigStore, Settings};
use switchkey::model::{HotkeyBinding, ModifierSet};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> ConfigStore {
    ConfigStore::new(dir.path().join("switchkey.conf"))
}

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.load().unwrap();
    assert_eq!(*store.settings(), Settings::default());
}

#[test]
fn save_and_reload_reproduces_every_field() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    store.set_switch_modifiers(ModifierSet {
        command: true,
        shift: true,
        ..ModifierSet::EMPTY
    });
    store.set_switch_key(Some('j'));
    store.set_settings_hotkey(HotkeyBinding::new(
        'p',
        ModifierSet {
            control: true,
            ..ModifierSet::EMPTY
        },
    ));
    store.set_previous_hotkey(HotkeyBinding::new(
        '`',
        ModifierSet {
            command: true,
            ..ModifierSet::EMPTY
        },
    ));
    store.set_word_movement(true);
    store.set_workspace_switch(true);
    store.set_binding('1', Some("Safari".into()));
    store.set_binding('2', Some("Mail".into()));

    let mut reloaded = ConfigStore::new(store.path().to_path_buf());
    reloaded.load().unwrap();
    assert_eq!(reloaded.settings(), store.settings());
    assert_eq!(reloaded.settings().bindings.get(&'1').unwrap(), "Safari");
    assert_eq!(reloaded.settings().bindings.get(&'2').unwrap(), "Mail");
}

#[test]
fn every_mutation_rewrites_the_file() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    store.set_binding('5', Some("Music".into()));
    let first = fs::read_to_string(store.path()).unwrap();
    assert!(first.contains("keybinding.5=Music"));

    store.set_binding('5', Some("Podcasts".into()));
    let second = fs::read_to_string(store.path()).unwrap();
    assert!(second.contains("keybinding.5=Podcasts"));
    assert!(!second.contains("Music"));
}

#[test]
fn comments_and_unknown_keys_survive_a_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("switchkey.conf");
    fs::write(
        &path,
        "# hand-edited\n\
         switch.modifiers=cmd\n\
         some.future.key=whatever\n\
         keybinding.4=Notes\n\n",
    )
    .unwrap();

    let mut store = ConfigStore::new(path);
    store.load().unwrap();
    assert!(store.settings().switch_modifiers.command);
    assert!(!store.settings().switch_modifiers.option);
    assert_eq!(store.settings().bindings.get(&'4').unwrap(), "Notes");
}

#[test]
fn invalid_toggle_values_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("switchkey.conf");
    fs::write(&path, "remap.word_movement=maybe\n").unwrap();

    let mut store = ConfigStore::new(path);
    store.load().unwrap();
    assert!(!store.settings().word_movement);
}

#[test]
fn reload_replaces_stale_in_memory_state() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.set_binding('9', Some("Calendar".into()));

    // The file loses the binding behind the store's back.
    fs::write(store.path(), "").unwrap();
    store.load().unwrap();
    assert!(store.settings().bindings.is_empty());
}
