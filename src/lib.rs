//! Keeps the embedded utterances comment widget in step with the site's
//! light/dark color mode.
//!
//! The site's color-mode toggle writes a preference to `localStorage`. This
//! crate reads that preference, maps it to one of the two widget themes, and
//! posts a `set-theme` message into the widget's iframe. It runs once shortly
//! after page load and again after every click on the toggle control.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Color mode and widget theme enums |
//! | [`message`] | The `set-theme` wire message |
//! | [`config`] | Storage key, selectors, origin and delays |
//! | [`ports`] | Traits for storage, frame lookup, clicks and timers |
//! | [`sync`] | [`sync::ThemeSynchronizer`], one read-map-post pass |
//! | [`triggers`] | Load-time and click-time scheduling |
//! | `browser` | `web-sys` adapters and the wasm entry point (feature `browser`) |
//!
//! Everything except `browser` is plain Rust and is tested natively with
//! in-memory fakes.

pub mod config;
pub mod error;
pub mod message;
pub mod ports;
pub mod sync;
pub mod theme;
pub mod triggers;

#[cfg(feature = "browser")]
pub mod browser;

#[cfg(test)]
mod test_support;

pub use config::SyncConfig;
pub use error::SyncError;
pub use message::ThemeMessage;
pub use sync::ThemeSynchronizer;
pub use theme::{ColorMode, WidgetTheme};
