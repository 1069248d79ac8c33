//! macOS platform layer.
//!
//! Owns the run loop, wires the pure input logic to the OS:
//!
//! - [`hotkeys`]: Carbon registration backend + hotkey callback
//! - [`event_tap`]: CGEventTap for the key remaps
//! - [`chord`]: synthetic chord posting
//! - [`workspace`]: app activation and previous-app tracking
//! - [`status_bar`]: menu bar item and the dispatch timer target
//! - [`observers`]: keep-alive and termination observers
//!
//! All state lives in a thread-local [`App`] on the main thread; the
//! Carbon callback and menu actions only publish bus events, and the
//! dispatch timer applies them.

pub mod ffi;

mod chord;
mod event_tap;
mod hotkeys;
mod observers;
mod status_bar;
mod workspace;

use std::cell::RefCell;

use tracing::{info, warn};

use crate::config::ConfigStore;
use crate::events::{drain_events, publisher, AppEvent};
use crate::input::{Cooldown, HotkeyRegistrar, HotkeyRouter};
use crate::model::constants::CHORD_COOLDOWN_WINDOW;

use event_tap::EventTap;
use ffi::bridge::{autoreleasepool, get_class, id, msg_send, nil, nsstring_id, sel, NSApp, YES};
use hotkeys::CarbonHotkeys;
use workspace::WorkspaceCapabilities;

/// Everything the dispatcher and callbacks operate on.
struct App {
    store: ConfigStore,
    registrar: HotkeyRegistrar<CarbonHotkeys>,
    router: HotkeyRouter,
    caps: WorkspaceCapabilities,
    cooldown: Cooldown,
    tap: Option<EventTap>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Run a closure against the app state, if initialized. Main thread
/// only; borrows never overlap because everything runs on the one run
/// loop and callbacks release the borrow before re-entering the loop.
fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Main entry point for macOS. Blocks in the AppKit run loop.
pub fn run() {
    autoreleasepool(|| unsafe {
        // Remaps need accessibility access; hotkeys work without it.
        if !ffi::ensure_accessibility_prompt() {
            warn!("accessibility access not granted, key remaps stay inactive");
        }

        let app: id = NSApp();
        // NSApplicationActivationPolicyAccessory = 1 (menu bar only)
        let _: bool = msg_send![app, setActivationPolicy: 1i64];

        let mut store = ConfigStore::new(ConfigStore::default_path());
        if let Err(e) = store.load() {
            warn!(error = %e, "could not load config, continuing with defaults");
        }
        store.set_publisher(publisher());

        let mut registrar = HotkeyRegistrar::new(CarbonHotkeys::install());
        registrar.update_global_keybindings(store.settings());

        workspace::install_activation_observer();

        let tap = if store.settings().needs_event_tap() {
            EventTap::install()
        } else {
            None
        };

        let caps = WorkspaceCapabilities::new(store.path().to_path_buf());

        APP.with(|cell| {
            *cell.borrow_mut() = Some(App {
                store,
                registrar,
                router: HotkeyRouter::new(),
                caps,
                cooldown: Cooldown::new(CHORD_COOLDOWN_WINDOW),
                tap,
            });
        });

        observers::install_wakeup_space_observers();
        observers::install_termination_observer();

        let target = status_bar::install_status_bar();
        create_dispatch_timer(target, 0.05);

        info!("entering run loop");
        let _: () = msg_send![app, run];
    });
}

/// Drain the event bus and act on each event. Called from the status
/// bar target's timer selector.
pub(crate) fn dispatch_pending() {
    for event in drain_events() {
        dispatch_one(event);
    }
}

fn dispatch_one(event: AppEvent) {
    match event {
        AppEvent::HotkeyPressed(id) => {
            with_app(|app| {
                app.router
                    .dispatch(id, &app.store.settings().bindings, &mut app.caps);
            });
        }

        AppEvent::TogglePause => {
            with_app(|app| {
                let paused = app.router.toggle_paused();
                info!(paused, "pause toggled");
                unsafe { status_bar::set_pause_title(paused) };
            });
        }

        AppEvent::OpenSettings => {
            with_app(|app| {
                use crate::input::Capabilities;
                app.caps.open_settings();
            });
        }

        AppEvent::ConfigChanged => {
            with_app(|app| {
                if let Err(e) = app.store.load() {
                    warn!(error = %e, "config reload failed, keeping current settings");
                }
                app.registrar.update_global_keybindings(app.store.settings());
                sync_event_tap(app);
            });
        }

        AppEvent::ReinstallHotkeys => {
            with_app(|app| app.registrar.update_global_keybindings(app.store.settings()));
        }

        AppEvent::Quit => {
            with_app(|app| {
                app.registrar.unregister_all();
                app.tap = None;
            });
            unsafe {
                let _: () = msg_send![NSApp(), terminate: nil];
            }
        }
    }
}

/// Rebuild the tap to match the remap toggles. The old tap is always
/// torn down first; a needed tap is recreated from scratch, never
/// re-enabled in place.
fn sync_event_tap(app: &mut App) {
    app.tap = None;
    if app.store.settings().needs_event_tap() {
        app.tap = unsafe { EventTap::install() };
    }
}

/// AppKit timer on CommonModes so dispatch keeps running while menus
/// are open.
unsafe fn create_dispatch_timer(target: id, interval: f64) {
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: interval,
        target: target,
        selector: sel!(dispatchTick:),
        userInfo: nil,
        repeats: YES
    ];
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let common_modes = nsstring_id("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: common_modes];
}
