// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full hint session.
//!
//! Builds a page of 25 links, three of them inside a `<nav>`, enters hint mode, and
//! types `ff`. With 25 candidates the labels are two characters long; the navigation
//! links outrank everything else and get `FF`, `FJ`, and `FD`, closest to the center
//! first.
//!
//! Run:
//! - `cargo run -p keyhint_demos --example hint_session`
//! - `RUST_LOG=trace cargo run -p keyhint_demos --example hint_session`

use keyhint_demos::{ConsoleOverlay, DemoPage, init_logging};
use keyhint_engine::machine::HintMachine;
use keyhint_engine::types::{ElementKind, KeyInput, Landmark, Viewport};
use kurbo::{Rect, Vec2};

const NAMES: [&str; 25] = [
    "home", "docs", "blog", "intro", "install", "usage", "config", "faq", "api", "guide",
    "tutorial", "changelog", "license", "issues", "pulls", "wiki", "forum", "chat", "news",
    "status", "privacy", "terms", "about", "contact", "search",
];

fn main() {
    init_logging();

    let viewport = Viewport::new(1280.0, 800.0).with_scroll(Vec2::new(0.0, 400.0));
    let mut page = DemoPage::new(viewport);
    for (i, name) in NAMES.iter().enumerate() {
        let (rect, landmark) = if i < 3 {
            // Top navigation bar.
            let x = 20.0 + i as f64 * 90.0;
            (Rect::new(x, 10.0, x + 80.0, 30.0), Some(Landmark::Navigation))
        } else {
            let y = 60.0 + (i - 3) as f64 * 32.0;
            (Rect::new(300.0, y, 600.0, y + 24.0), None)
        };
        page.push(name, rect, ElementKind::Anchor, landmark);
    }

    let mut machine = HintMachine::new(ConsoleOverlay::default());

    println!("== press f ==");
    let d = machine.handle_key(&page, KeyInput::char('f'));
    println!("  {d:?}");
    print!("{}", machine.overlay().host().render());

    println!("== press f ==");
    machine.handle_key(&page, KeyInput::char('f'));
    print!("{}", machine.overlay().host().render());

    println!("== press f ==");
    machine.handle_key(&page, KeyInput::char('f'));
    for line in page.take_journal() {
        println!("  {line}");
    }
    println!(
        "  hinting: {}, overlay attached: {}",
        machine.is_hinting(),
        machine.overlay().host().is_attached()
    );
}
