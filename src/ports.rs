//! Seams between the sync logic and the page.
//!
//! The browser implementations live in `browser`; tests substitute
//! in-memory fakes.

use std::time::Duration;

use crate::error::SyncError;
use crate::message::ThemeMessage;

/// Read-only view of the page's persistent key-value storage.
pub trait PreferenceStore {
    /// Current value under `key`, or `None` when unset or unreadable.
    fn read(&self, key: &str) -> Option<String>;
}

/// Something that can receive a cross-origin theme message.
pub trait MessageTarget {
    /// Deliver `message`, restricted to `target_origin`.
    ///
    /// # Errors
    ///
    /// Returns a [`SyncError`] when the message cannot be delivered.
    fn post_message(&self, message: &ThemeMessage, target_origin: &str) -> Result<(), SyncError>;
}

/// Finds the widget frame. Looked up fresh on every sync.
pub trait FrameLocator {
    type Frame: MessageTarget;

    fn find_frame(&self) -> Option<Self::Frame>;
}

/// The color-mode toggle control.
pub trait ClickSource {
    /// Attach `handler` for every future click. Listeners are never removed.
    fn on_click(&self, handler: Box<dyn FnMut()>);
}

/// One-shot delayed tasks.
///
/// No cancellation handle is returned: every scheduled task runs. A later
/// schedule never supersedes an earlier one.
pub trait Scheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>);
}
