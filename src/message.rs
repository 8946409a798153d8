//! The `set-theme` message the utterances widget listens for.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::Serialize;

use crate::error::SyncError;
use crate::theme::WidgetTheme;

/// Discriminator the widget checks before re-theming.
pub const SET_THEME_KIND: &str = "set-theme";

/// The only origin the message may be delivered to.
pub const UTTERANCES_ORIGIN: &str = "https://utteranc.es";

/// Payload posted into the widget frame: `{"type":"set-theme","theme":...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeMessage {
    #[serde(rename = "type")]
    kind: &'static str,
    theme: WidgetTheme,
}

impl ThemeMessage {
    #[must_use]
    pub fn set_theme(theme: WidgetTheme) -> Self {
        Self { kind: SET_THEME_KIND, theme }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    #[must_use]
    pub fn theme(&self) -> WidgetTheme {
        self.theme
    }

    /// Encode as the JSON object the widget expects.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SyncError> {
        serde_json::to_string(self).map_err(|e| SyncError::Encode(e.to_string()))
    }
}
