// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input state machine.
//!
//! ## States
//!
//! [`HintMachine`] is either [`Mode::Idle`] or [`Mode::Hinting`]. Hinting carries a
//! [`Session`] record: the typed prefix and whether activation opens in an alternate
//! context. Every transition replaces the record instead of editing it in place.
//!
//! ## Transitions
//!
//! - Idle + trigger letter (no Ctrl/Alt/Meta, target not editable, engine enabled):
//!   open the overlay and start hinting. A shifted trigger selects the alternate
//!   context.
//! - Hinting + ASCII letter: extend the prefix. An exact label match activates its
//!   element and returns to idle. A prefix no label starts with is dropped. Otherwise
//!   the overlay is re-filtered.
//! - Hinting + Escape: close without activating.
//! - Hinting + Backspace: drop the last typed character.
//!
//! While hinting, every keystroke is consumed, including the trigger letter, which is
//! just another letter then. While idle, keystrokes aimed at editable targets always
//! pass through.
//!
//! ## Enablement
//!
//! [`HintMachine::set_enabled`] gates entering hint mode only. Disabling the engine
//! mid-session leaves that session running until it ends.

use alloc::string::String;

use keyhint_label::Alphabet;

use crate::discover::discover;
use crate::overlay::HintOverlay;
use crate::types::{Disposition, HintTarget, Key, KeyInput, Modifiers, OverlayHost, Page};

/// Key bindings and label alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintConfig {
    /// Letter that enters hint mode; its shifted form selects the alternate context.
    /// Compared case-insensitively.
    pub trigger: char,
    /// Label alphabet.
    pub alphabet: Alphabet,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            trigger: 'f',
            alphabet: Alphabet::DEFAULT,
        }
    }
}

/// State of one hint session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    typed: String,
    alternate: bool,
}

impl Session {
    /// A fresh session with nothing typed.
    pub fn new(alternate: bool) -> Self {
        Self {
            typed: String::new(),
            alternate,
        }
    }

    /// Lower-case prefix typed so far.
    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// Whether activation opens in an alternate context.
    pub fn alternate(&self) -> bool {
        self.alternate
    }

    fn pushed(&self, c: char) -> Self {
        let mut typed = self.typed.clone();
        typed.push(c);
        Self { typed, ..*self }
    }

    fn popped(&self) -> Self {
        let mut typed = self.typed.clone();
        typed.pop();
        Self { typed, ..*self }
    }
}

/// Hint mode on or off.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Keys reach the page unless they trigger hint mode.
    #[default]
    Idle,
    /// Hints are shown and every key is consumed.
    Hinting(Session),
}

/// Keystroke-driven hint session controller.
///
/// ## Usage
///
/// - Construct with [`HintMachine::new`] (default bindings) or
///   [`HintMachine::with_config`].
/// - Feed every keydown through [`HintMachine::handle_key`] together with the current
///   [`Page`], and suppress the key when the result is
///   [`Disposition::Consumed`].
/// - Keep [`HintMachine::set_enabled`] in sync with user settings.
pub struct HintMachine<H, O: OverlayHost> {
    trigger: char,
    overlay: HintOverlay<H, O>,
    mode: Mode,
    enabled: bool,
}

impl<H, O: OverlayHost> core::fmt::Debug for HintMachine<H, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HintMachine")
            .field("trigger", &self.trigger)
            .field("mode", &self.mode)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl<H: HintTarget, O: OverlayHost> HintMachine<H, O> {
    /// Create an idle, enabled machine with default bindings.
    pub fn new(host: O) -> Self {
        Self::with_config(host, HintConfig::default())
    }

    /// Create an idle, enabled machine.
    pub fn with_config(host: O, config: HintConfig) -> Self {
        Self {
            trigger: config.trigger.to_ascii_lowercase(),
            overlay: HintOverlay::with_alphabet(host, config.alphabet),
            mode: Mode::Idle,
            enabled: true,
        }
    }

    /// Process one keystroke.
    pub fn handle_key<P>(&mut self, page: &P, input: KeyInput) -> Disposition
    where
        P: Page<Target = H>,
    {
        match core::mem::take(&mut self.mode) {
            Mode::Idle => self.handle_idle(page, input),
            Mode::Hinting(session) => {
                self.mode = self.handle_hinting(session, input);
                Disposition::Consumed
            }
        }
    }

    /// End the current session without activating anything. No-op when idle.
    pub fn cancel(&mut self) {
        self.overlay.close();
        self.mode = Mode::Idle;
    }

    /// Allow or forbid entering hint mode. Takes effect on the next trigger.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("hinting {}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
    }

    /// Whether the trigger may enter hint mode.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The running session, if hinting.
    pub fn session(&self) -> Option<&Session> {
        match &self.mode {
            Mode::Hinting(s) => Some(s),
            Mode::Idle => None,
        }
    }

    /// Whether a session is running.
    pub fn is_hinting(&self) -> bool {
        matches!(self.mode, Mode::Hinting(_))
    }

    /// The overlay manager.
    pub fn overlay(&self) -> &HintOverlay<H, O> {
        &self.overlay
    }

    fn handle_idle<P>(&mut self, page: &P, input: KeyInput) -> Disposition
    where
        P: Page<Target = H>,
    {
        if !self.enabled || input.editable_target || input.modifiers.intersects(Modifiers::COMMAND)
        {
            return Disposition::Ignored;
        }
        let Key::Char(c) = input.key else {
            return Disposition::Ignored;
        };
        if c.to_ascii_lowercase() != self.trigger {
            return Disposition::Ignored;
        }

        let alternate = c.is_ascii_uppercase();
        let viewport = page.viewport();
        let candidates = discover(page.elements());
        self.overlay.open(candidates, viewport, alternate);
        self.mode = Mode::Hinting(Session::new(alternate));
        Disposition::Consumed
    }

    fn handle_hinting(&mut self, session: Session, input: KeyInput) -> Mode {
        match input.key {
            Key::Escape => {
                self.overlay.close();
                log::debug!("hint session cancelled");
                Mode::Idle
            }
            Key::Backspace => {
                let next = session.popped();
                self.overlay.apply_prefix_filter(next.typed());
                Mode::Hinting(next)
            }
            Key::Char(c) if c.is_ascii_alphabetic() => self.type_letter(session, c),
            _ => Mode::Hinting(session),
        }
    }

    fn type_letter(&mut self, session: Session, c: char) -> Mode {
        let next = session.pushed(c.to_ascii_lowercase());

        if let Some(hint) = self.overlay.find_exact(next.typed()) {
            log::debug!("activating hint {:?}", hint.label());
            activate(hint.target(), next.alternate());
            self.overlay.close();
            return Mode::Idle;
        }

        if self.overlay.any_starts_with(next.typed()) {
            self.overlay.apply_prefix_filter(next.typed());
            Mode::Hinting(next)
        } else {
            log::trace!("no hint starts with {:?}; key absorbed", next.typed());
            Mode::Hinting(session)
        }
    }
}

/// Activate `target`: a modified click for the alternate context, otherwise a plain
/// click followed by focus for text-entry elements.
pub fn activate<H: HintTarget + ?Sized>(target: &H, alternate: bool) {
    if alternate {
        target.click_with(Modifiers::OPEN_ALTERNATE);
        return;
    }
    target.click();
    if target.traits().kind.is_text_entry() {
        target.focus();
    }
}
