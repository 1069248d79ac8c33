//! The live configuration store.
//!
//! Holds the single in-memory [`Settings`] snapshot, loads it from the
//! flat config file at startup, and rewrites the whole file on every
//! mutation. All reads and writes happen on the main run-loop thread;
//! the store is the only writer, readers receive `&Settings`.
//!
//! Change notification is explicit: after every mutation outside the
//! initial load the store publishes [`AppEvent::ConfigChanged`] on the
//! event bus, and the dispatcher re-registers hotkeys and rebuilds the
//! event tap from the new snapshot.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::events::{AppEvent, EventPublisher};
use crate::model::constants::*;
use crate::model::{HotkeyBinding, ModifierSet};

use super::file;

/// Errors from loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write config file: {0}")]
    Write(#[source] io::Error),
}

/// Complete configuration snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Modifier set applied to the ten digit hotkeys.
    pub switch_modifiers: ModifierSet,
    /// Optional extra app-switch key character. Empty means disabled;
    /// the digit shortcuts stay active either way.
    pub switch_key: Option<char>,
    /// Hotkey that opens the settings surface.
    pub settings_hotkey: HotkeyBinding,
    /// Optional hotkey that switches back to the previous app.
    pub previous_hotkey: HotkeyBinding,
    /// Rewrite Control+Arrow into Option+Arrow (word movement).
    pub word_movement: bool,
    /// Rewrite Cmd+[ / Cmd+] into Control+Arrow chords.
    pub workspace_switch: bool,
    /// Digit character → application display name.
    pub bindings: BTreeMap<char, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            switch_modifiers: ModifierSet {
                option: true,
                ..ModifierSet::EMPTY
            },
            switch_key: None,
            settings_hotkey: HotkeyBinding::new(
                ',',
                ModifierSet {
                    command: true,
                    shift: true,
                    ..ModifierSet::EMPTY
                },
            ),
            previous_hotkey: HotkeyBinding::UNSET,
            word_movement: false,
            workspace_switch: false,
            bindings: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// True if either remap toggle is on, i.e. the event tap is needed.
    pub fn needs_event_tap(&self) -> bool {
        self.word_movement || self.workspace_switch
    }
}

/// Owns the settings snapshot and its on-disk representation.
pub struct ConfigStore {
    settings: Settings,
    path: PathBuf,
    /// Set during the initial load to suppress redundant writes and
    /// change notifications.
    loading: bool,
    publisher: Option<EventPublisher>,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            settings: Settings::default(),
            path,
            loading: false,
            publisher: None,
        }
    }

    /// Default config file location: `<config dir>/switchkey/switchkey.conf`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("switchkey")
            .join("switchkey.conf")
    }

    /// Attach the event bus publisher used for change notification.
    pub fn set_publisher(&mut self, publisher: EventPublisher) {
        self.publisher = Some(publisher);
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config file, applying defaults for anything missing or
    /// invalid. A missing file is not an error (first launch).
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no config file yet, using defaults");
                return Ok(());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };

        self.loading = true;
        self.settings = Settings::default();
        for (key, value) in file::parse(&text) {
            self.apply_pair(&key, &value);
        }
        self.loading = false;
        Ok(())
    }

    fn apply_pair(&mut self, key: &str, value: &str) {
        match key {
            CFG_SWITCH_MODIFIERS => {
                self.settings.switch_modifiers = ModifierSet::parse(value);
            }
            CFG_SWITCH_KEY => {
                self.settings.switch_key = single_char(value);
            }
            CFG_SETTINGS_HOTKEY => {
                self.settings.settings_hotkey = HotkeyBinding::deserialize(value);
            }
            CFG_PREVIOUS_HOTKEY => {
                self.settings.previous_hotkey = HotkeyBinding::deserialize(value);
            }
            CFG_WORD_MOVEMENT => {
                self.settings.word_movement =
                    file::parse_bool(key, value, Settings::default().word_movement);
            }
            CFG_WORKSPACE_SWITCH => {
                self.settings.workspace_switch =
                    file::parse_bool(key, value, Settings::default().workspace_switch);
            }
            _ if key.starts_with(CFG_KEYBINDING_PREFIX) => {
                let suffix = &key[CFG_KEYBINDING_PREFIX.len()..];
                match single_char(suffix).filter(|c| c.is_ascii_digit()) {
                    Some(digit) if !value.is_empty() => {
                        self.settings.bindings.insert(digit, value.to_string());
                    }
                    Some(_) => {}
                    None => warn!(key, "invalid keybinding digit, ignoring"),
                }
            }
            _ => warn!(key, "unknown config key, ignoring"),
        }
    }

    /// Rewrite the whole file from the in-memory snapshot. Scalars come
    /// first in fixed order, then the `keybinding.*` lines sorted by
    /// digit, so the file is deterministic.
    pub fn save(&self) -> Result<(), ConfigError> {
        let s = &self.settings;
        let mut pairs: Vec<(String, String)> = vec![
            (CFG_SWITCH_MODIFIERS.into(), s.switch_modifiers.serialize()),
            (
                CFG_SWITCH_KEY.into(),
                s.switch_key.map(String::from).unwrap_or_default(),
            ),
            (CFG_SETTINGS_HOTKEY.into(), s.settings_hotkey.serialize()),
            (CFG_PREVIOUS_HOTKEY.into(), s.previous_hotkey.serialize()),
            (CFG_WORD_MOVEMENT.into(), s.word_movement.to_string()),
            (CFG_WORKSPACE_SWITCH.into(), s.workspace_switch.to_string()),
        ];
        for (digit, app) in &s.bindings {
            pairs.push((format!("{CFG_KEYBINDING_PREFIX}{digit}"), app.clone()));
        }

        file::atomic_write(&self.path, &file::render(&pairs)).map_err(ConfigError::Write)
    }

    /// Persist and notify after a mutation; skipped during the initial
    /// load.
    fn changed(&self) {
        if self.loading {
            return;
        }
        if let Err(e) = self.save() {
            warn!(error = %e, "failed to persist config");
        }
        if let Some(publisher) = &self.publisher {
            publisher.publish(AppEvent::ConfigChanged);
        }
    }

    // === Mutators (the only write path into the snapshot) ===

    pub fn set_switch_modifiers(&mut self, modifiers: ModifierSet) {
        self.settings.switch_modifiers = modifiers;
        self.changed();
    }

    pub fn set_switch_key(&mut self, key: Option<char>) {
        self.settings.switch_key = key;
        self.changed();
    }

    pub fn set_settings_hotkey(&mut self, binding: HotkeyBinding) {
        self.settings.settings_hotkey = binding;
        self.changed();
    }

    pub fn set_previous_hotkey(&mut self, binding: HotkeyBinding) {
        self.settings.previous_hotkey = binding;
        self.changed();
    }

    pub fn set_word_movement(&mut self, enabled: bool) {
        self.settings.word_movement = enabled;
        self.changed();
    }

    pub fn set_workspace_switch(&mut self, enabled: bool) {
        self.settings.workspace_switch = enabled;
        self.changed();
    }

    /// Bind a digit to an app name, or clear the binding with `None`.
    pub fn set_binding(&mut self, digit: char, app: Option<String>) {
        if !digit.is_ascii_digit() {
            warn!(%digit, "refusing non-digit keybinding");
            return;
        }
        match app.filter(|a| !a.is_empty()) {
            Some(app) => {
                self.settings.bindings.insert(digit, app);
            }
            None => {
                self.settings.bindings.remove(&digit);
            }
        }
        self.changed();
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
