//! Errors raised while pushing a theme into the widget frame.
//!
//! None of these reach the host page. [`crate::sync::ThemeSynchronizer::synchronize`]
//! logs and swallows them.

/// Failure modes of a single theme sync pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// No element matched the frame selector.
    #[error("embedded frame not found")]
    FrameMissing,

    /// The frame element exists but has no browsing context yet.
    #[error("embedded frame has no content window")]
    NoContentWindow,

    /// The theme message could not be encoded.
    #[error("theme message encode failed: {0}")]
    Encode(String),

    /// `postMessage` rejected the payload.
    #[error("postMessage failed: {0}")]
    Post(String),

    /// A configuration override could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}
