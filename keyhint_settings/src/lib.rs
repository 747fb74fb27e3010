// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyhint Settings: the user's on/off preferences and the enablement they imply.
//!
//! ## Overview
//!
//! Two values are persisted in a key-value [`SettingsStore`]:
//!
//! - `isDisabledGlobal`: a boolean that turns hinting off everywhere.
//! - `disabledSites`: an array of hostnames hinting is off on.
//!
//! Hinting is enabled on a page iff neither applies to its hostname. An
//! [`EnablementGate`] caches that answer and is updated from the store's change
//! notifications, so the key handler only reads a flag.
//!
//! Reads fail open. A missing key, an unreachable store, or a malformed value counts as
//! "not disabled" and is logged with `log::warn!`; absent settings must not break page
//! interaction.
//!
//! ## Example
//!
//! ```
//! use keyhint_settings::{EnablementGate, MemoryStore, set_site_enabled};
//!
//! let mut store = MemoryStore::new();
//! let mut gate = EnablementGate::load(&store, "example.com");
//! assert!(gate.is_enabled());
//!
//! // The settings UI unticks "enabled on this site".
//! set_site_enabled(&mut store, "example.com", false).unwrap();
//! assert!(!gate.refresh(&store));
//! ```

mod gate;
mod site;
mod store;

pub use gate::EnablementGate;
pub use site::{GLOBAL_KEY, SITES_KEY, SiteSettings, set_globally_enabled, set_site_enabled};
pub use store::{MemoryStore, SettingsChange, SettingsStore, StoreError};
