// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two stored preferences and the operations the settings UI performs on them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::{SettingsStore, StoreError};

/// Key of the global disable flag.
pub const GLOBAL_KEY: &str = "isDisabledGlobal";
/// Key of the list of hostnames hinting is disabled on.
pub const SITES_KEY: &str = "disabledSites";

/// Stored preferences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Hinting is off everywhere.
    pub is_disabled_global: bool,
    /// Hostnames hinting is off on.
    pub disabled_sites: Vec<String>,
}

impl SiteSettings {
    /// Read both keys from `store`.
    ///
    /// Fails open: a missing key, an unreachable store, or a malformed value yields the
    /// default for that key, so hinting stays enabled. Non-string entries of the site
    /// list are skipped; the remaining hostnames still apply.
    pub fn load(store: &impl SettingsStore) -> Self {
        Self {
            is_disabled_global: read_or_default(store, GLOBAL_KEY, |v| {
                decode_or_default(GLOBAL_KEY, v)
            }),
            disabled_sites: read_or_default(store, SITES_KEY, decode_sites),
        }
    }

    /// Whether hinting is enabled on `hostname`.
    pub fn is_enabled_for(&self, hostname: &str) -> bool {
        !(self.is_disabled_global || self.disabled_sites.iter().any(|s| s == hostname))
    }

    /// Replace the field stored under `key` with `value` (`None` for a removed key).
    ///
    /// Unknown keys are ignored. A malformed flag resets to its default; a malformed
    /// site list keeps its string entries.
    /// Returns whether `key` is one of the two preference keys.
    pub fn apply(&mut self, key: &str, value: Option<&Value>) -> bool {
        match key {
            GLOBAL_KEY => self.is_disabled_global = decode_or_default(key, value),
            SITES_KEY => self.disabled_sites = decode_sites(value),
            _ => return false,
        }
        true
    }
}

/// Store the global toggle. `enabled` is the checkbox state; the stored flag is its
/// inverse.
pub fn set_globally_enabled(
    store: &mut impl SettingsStore,
    enabled: bool,
) -> Result<(), StoreError> {
    store.set(GLOBAL_KEY, Value::Bool(!enabled))
}

/// Store the per-site toggle for `hostname`.
///
/// Disabling adds the hostname once; enabling removes every occurrence. Other hostnames
/// keep their order.
///
/// This is a read-modify-write: a failed read is returned as is and nothing is written,
/// so the other hostnames are never replaced by an empty list.
pub fn set_site_enabled(
    store: &mut impl SettingsStore,
    hostname: &str,
    enabled: bool,
) -> Result<(), StoreError> {
    let mut sites = decode_sites(store.get(SITES_KEY)?.as_ref());
    if enabled {
        sites.retain(|s| s != hostname);
    } else if !sites.iter().any(|s| s == hostname) {
        sites.push(hostname.to_owned());
    }
    store.set(SITES_KEY, Value::from(sites))
}

fn read_or_default<T: Default>(
    store: &impl SettingsStore,
    key: &str,
    decode: impl FnOnce(Option<&Value>) -> T,
) -> T {
    match store.get(key) {
        Ok(value) => decode(value.as_ref()),
        Err(e) => {
            log::warn!("reading {key:?} failed, using default: {e}");
            T::default()
        }
    }
}

/// Hostnames from a stored site list. Non-string entries are dropped one by one.
fn decode_sites(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let sites: Vec<String> = items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_owned))
                .collect();
            if sites.len() != items.len() {
                log::warn!(
                    "skipping {} non-string entries in {SITES_KEY:?}",
                    items.len() - sites.len()
                );
            }
            sites
        }
        Some(v) => {
            log::warn!("malformed {SITES_KEY:?} ({v}), using default");
            Vec::new()
        }
    }
}

fn decode_or_default<T: DeserializeOwned + Default>(key: &str, value: Option<&Value>) -> T {
    match value {
        None | Some(Value::Null) => T::default(),
        Some(v) => T::deserialize(v).unwrap_or_else(|e| {
            log::warn!("malformed {key:?} ({v}), using default: {e}");
            T::default()
        }),
    }
}
