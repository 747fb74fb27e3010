// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alternate-context activation, erasing, absorbed keys, and cancel.
//!
//! Shift+f opens hints flagged for a new tab; the chosen link receives a click with
//! Ctrl and Meta held. Keys that lead to no label are swallowed without effect.
//!
//! Run:
//! - `cargo run -p keyhint_demos --example alternate_context`

use keyhint_demos::{ConsoleOverlay, DemoPage, init_logging};
use keyhint_engine::machine::HintMachine;
use keyhint_engine::types::{ElementKind, Key, KeyInput, Landmark, Viewport};
use kurbo::Rect;

fn main() {
    init_logging();

    let mut page = DemoPage::new(Viewport::new(800.0, 600.0));
    page.push(
        "logo",
        Rect::new(10.0, 10.0, 90.0, 40.0),
        ElementKind::Anchor,
        Some(Landmark::Header),
    );
    page.push(
        "search",
        Rect::new(300.0, 10.0, 500.0, 40.0),
        ElementKind::Input,
        Some(Landmark::Header),
    );
    page.push(
        "article",
        Rect::new(200.0, 200.0, 600.0, 260.0),
        ElementKind::Anchor,
        None,
    );
    page.push(
        "related",
        Rect::new(620.0, 100.0, 780.0, 120.0),
        ElementKind::Anchor,
        Some(Landmark::Aside),
    );
    page.push(
        "popup",
        Rect::new(350.0, 280.0, 450.0, 320.0),
        ElementKind::Button,
        None,
    );
    page.hide("popup");

    let mut machine = HintMachine::new(ConsoleOverlay::default());

    println!("== shift+f: open in new tab ==");
    machine.handle_key(&page, KeyInput::char('F'));
    print!("{}", machine.overlay().host().render());

    println!("== z is not a label prefix: absorbed ==");
    machine.handle_key(&page, KeyInput::char('z'));
    println!("  typed: {:?}", machine.session().map(|s| s.typed()));

    println!("== escape ==");
    machine.handle_key(&page, KeyInput::new(Key::Escape));
    println!("  hinting: {}", machine.is_hinting());

    println!("== f, then the search box's label ==");
    machine.handle_key(&page, KeyInput::char('f'));
    let label = machine
        .overlay()
        .hints()
        .iter()
        .find(|h| h.target().name == "search")
        .map(|h| h.label().to_owned())
        .unwrap_or_default();
    for c in label.chars() {
        machine.handle_key(&page, KeyInput::char(c));
    }
    for line in page.take_journal() {
        println!("  {line}");
    }

    println!("== shift+f, then the article's label ==");
    machine.handle_key(&page, KeyInput::char('F'));
    let label = machine
        .overlay()
        .hints()
        .iter()
        .find(|h| h.target().name == "article")
        .map(|h| h.label().to_owned())
        .unwrap_or_default();
    for c in label.chars() {
        machine.handle_key(&page, KeyInput::char(c));
    }
    for line in page.take_journal() {
        println!("  {line}");
    }
}
