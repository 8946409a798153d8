//! Site color mode and the widget theme it selects.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use serde::Serialize;

/// The site's display preference as written by its color-mode toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Lit,
    Dark,
}

impl ColorMode {
    /// Interpret a stored preference value.
    ///
    /// Only an exact match of `lit_value` means light mode. An absent key,
    /// an empty string, or any other value means dark mode.
    #[must_use]
    pub fn from_stored(stored: Option<&str>, lit_value: &str) -> Self {
        match stored {
            Some(value) if value == lit_value => Self::Lit,
            _ => Self::Dark,
        }
    }
}

/// Theme names understood by the utterances widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WidgetTheme {
    #[serde(rename = "github-light")]
    GithubLight,
    #[serde(rename = "icy-dark")]
    IcyDark,
}

impl WidgetTheme {
    #[must_use]
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Lit => Self::GithubLight,
            ColorMode::Dark => Self::IcyDark,
        }
    }

    /// Wire name sent to the widget.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GithubLight => "github-light",
            Self::IcyDark => "icy-dark",
        }
    }
}

impl fmt::Display for WidgetTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
