//! Sync configuration: where the preference lives, which elements to use,
//! and how long to wait before each sync.
//!
//! [`SyncConfig::default`] matches the site's markup and is what the wasm
//! entry points use. Rust consumers linking the `rlib` can build their own
//! config from a partial JSON object via [`SyncConfig::from_json`] and pass
//! it to `browser::install_with`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::error::SyncError;
use crate::message::UTTERANCES_ORIGIN;

pub const DEFAULT_STORAGE_KEY: &str = "colorMode";
pub const DEFAULT_LIT_VALUE: &str = "lit";
pub const DEFAULT_FRAME_SELECTOR: &str = ".utterances-frame";
pub const DEFAULT_TOGGLE_SELECTOR: &str = ".color_choice";
pub const DEFAULT_LOAD_DELAY_MS: u32 = 1000;
pub const DEFAULT_CLICK_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncConfig {
    /// `localStorage` key holding the color-mode preference.
    pub storage_key: String,
    /// Stored value that means light mode.
    pub lit_value: String,
    /// Selector for the widget iframe.
    pub frame_selector: String,
    /// Selector for the color-mode toggle control.
    pub toggle_selector: String,
    /// Origin the message is restricted to.
    pub target_origin: String,
    /// Delay before the one-shot sync after page load.
    pub load_delay_ms: u32,
    /// Delay before the sync scheduled by each toggle click.
    pub click_delay_ms: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            lit_value: DEFAULT_LIT_VALUE.to_owned(),
            frame_selector: DEFAULT_FRAME_SELECTOR.to_owned(),
            toggle_selector: DEFAULT_TOGGLE_SELECTOR.to_owned(),
            target_origin: UTTERANCES_ORIGIN.to_owned(),
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            click_delay_ms: DEFAULT_CLICK_DELAY_MS,
        }
    }
}

impl SyncConfig {
    /// Build a config from a JSON object. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::ConfigParse`] for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, SyncError> {
        serde_json::from_str(raw).map_err(|e| SyncError::ConfigParse(e.to_string()))
    }

    #[must_use]
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.load_delay_ms))
    }

    #[must_use]
    pub fn click_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.click_delay_ms))
    }
}
