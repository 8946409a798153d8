//! One theme sync pass: read the preference, pick the theme, post it.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::message::ThemeMessage;
use crate::ports::{FrameLocator, MessageTarget, PreferenceStore};
use crate::theme::{ColorMode, WidgetTheme};

pub struct ThemeSynchronizer<S, L> {
    store: S,
    locator: L,
    storage_key: String,
    lit_value: String,
    target_origin: String,
}

impl<S: PreferenceStore, L: FrameLocator> ThemeSynchronizer<S, L> {
    #[must_use]
    pub fn new(store: S, locator: L, config: &SyncConfig) -> Self {
        Self {
            store,
            locator,
            storage_key: config.storage_key.clone(),
            lit_value: config.lit_value.clone(),
            target_origin: config.target_origin.clone(),
        }
    }

    /// Theme selected by the preference as stored right now.
    #[must_use]
    pub fn current_theme(&self) -> WidgetTheme {
        let stored = self.store.read(&self.storage_key);
        WidgetTheme::for_mode(ColorMode::from_stored(stored.as_deref(), &self.lit_value))
    }

    /// Run one pass and report what happened.
    ///
    /// The preference is read before the message is built, and the message
    /// is built before the frame is looked up and posted to.
    ///
    /// # Errors
    ///
    /// [`SyncError::FrameMissing`] when no frame matches, otherwise whatever
    /// the frame's [`MessageTarget::post_message`] returns.
    pub fn try_synchronize(&self) -> Result<WidgetTheme, SyncError> {
        let message = ThemeMessage::set_theme(self.current_theme());
        let frame = self.locator.find_frame().ok_or(SyncError::FrameMissing)?;
        frame.post_message(&message, &self.target_origin)?;
        Ok(message.theme())
    }

    /// Run one pass without ever failing. Returns the theme that was sent.
    ///
    /// Failures never reach the host page; they are only logged at debug.
    pub fn synchronize(&self) -> Option<WidgetTheme> {
        match self.try_synchronize() {
            Ok(theme) => {
                log::debug!("utterances theme set to {theme}");
                Some(theme)
            }
            Err(SyncError::FrameMissing) => {
                log::debug!("utterances frame absent; theme sync skipped");
                None
            }
            Err(e) => {
                log::debug!("utterances theme sync failed: {e}");
                None
            }
        }
    }
}
