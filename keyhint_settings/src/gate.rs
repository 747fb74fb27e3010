// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cached enablement for the current page.

use crate::site::SiteSettings;
use crate::store::{SettingsChange, SettingsStore};

/// Whether hinting is enabled on one hostname, kept current from store changes.
///
/// Load it once with [`EnablementGate::load`], then feed it every
/// [`SettingsChange`] the store reports (or call [`EnablementGate::refresh`]). The key
/// handler reads [`EnablementGate::is_enabled`] on each keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnablementGate {
    hostname: String,
    settings: SiteSettings,
    enabled: bool,
}

impl EnablementGate {
    /// A gate for `hostname` with default (enabled) settings.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self::with_settings(hostname, SiteSettings::default())
    }

    /// A gate for `hostname` initialized from `store`.
    pub fn load(store: &impl SettingsStore, hostname: impl Into<String>) -> Self {
        Self::with_settings(hostname, SiteSettings::load(store))
    }

    fn with_settings(hostname: impl Into<String>, settings: SiteSettings) -> Self {
        let hostname = hostname.into();
        let enabled = settings.is_enabled_for(&hostname);
        Self {
            hostname,
            settings,
            enabled,
        }
    }

    /// Re-read both keys from `store`. Returns the new flag.
    pub fn refresh(&mut self, store: &impl SettingsStore) -> bool {
        self.settings = SiteSettings::load(store);
        self.recompute()
    }

    /// Apply one change notification. Returns the new flag.
    pub fn apply_change(&mut self, change: &SettingsChange) -> bool {
        if self.settings.apply(&change.key, change.value.as_ref()) {
            self.recompute()
        } else {
            self.enabled
        }
    }

    /// Whether hinting is enabled on this gate's hostname.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The hostname this gate answers for.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Cached settings.
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    fn recompute(&mut self) -> bool {
        let enabled = self.settings.is_enabled_for(&self.hostname);
        if enabled != self.enabled {
            log::info!(
                "hinting {} on {}",
                if enabled { "enabled" } else { "disabled" },
                self.hostname
            );
        }
        self.enabled = enabled;
        enabled
    }
}
