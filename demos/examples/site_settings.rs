// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enablement driven by stored preferences.
//!
//! Wires a [`MemoryStore`] change subscription to an [`EnablementGate`] and checks the
//! gate before every keystroke, the way a content script re-reads the flag on each
//! keydown.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p keyhint_demos --example site_settings`

use std::cell::RefCell;
use std::rc::Rc;

use keyhint_demos::{ConsoleOverlay, DemoPage, init_logging};
use keyhint_engine::machine::HintMachine;
use keyhint_engine::types::{ElementKind, KeyInput, Viewport};
use keyhint_settings::{
    EnablementGate, GLOBAL_KEY, MemoryStore, SettingsStore, set_globally_enabled,
    set_site_enabled,
};
use kurbo::Rect;

fn main() {
    init_logging();

    let mut page = DemoPage::new(Viewport::new(800.0, 600.0));
    page.push(
        "next",
        Rect::new(350.0, 280.0, 450.0, 320.0),
        ElementKind::Anchor,
        None,
    );

    let mut store = MemoryStore::new();
    let gate = Rc::new(RefCell::new(EnablementGate::load(&store, "example.com")));
    let sink = gate.clone();
    store.subscribe(move |change| {
        sink.borrow_mut().apply_change(change);
    });

    let mut machine = HintMachine::new(ConsoleOverlay::default());
    let mut press_f = |label: &str| {
        machine.set_enabled(gate.borrow().is_enabled());
        let d = machine.handle_key(&page, KeyInput::char('f'));
        println!("  {label:<28} f -> {d:?}");
        machine.cancel();
    };

    press_f("defaults");

    if let Err(e) = set_site_enabled(&mut store, "example.com", false) {
        log::warn!("could not save site toggle: {e}");
    }
    press_f("disabled on example.com");

    if let Err(e) = set_site_enabled(&mut store, "example.com", true) {
        log::warn!("could not save site toggle: {e}");
    }
    press_f("re-enabled on example.com");

    if let Err(e) = set_globally_enabled(&mut store, false) {
        log::warn!("could not save global toggle: {e}");
    }
    press_f("disabled globally");

    // A corrupted value fails open.
    if let Err(e) = store.set(GLOBAL_KEY, "garbage".into()) {
        log::warn!("could not write {GLOBAL_KEY:?}: {e}");
    }
    press_f("corrupted global flag");
}
