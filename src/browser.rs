//! `web-sys` implementations of the page seams and the wasm entry point.
//!
//! Lookups go through `web_sys::window()` on every call. A page without a
//! window, storage, frame, or toggle degrades to a no-op rather than an
//! exception in the host page.

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::message::ThemeMessage;
use crate::ports::{ClickSource, FrameLocator, MessageTarget, PreferenceStore, Scheduler};
use crate::sync::ThemeSynchronizer;
use crate::triggers;

/// `window.localStorage`. Blocked or missing storage reads as unset.
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().unwrap_or_default()?;
        storage.get_item(key).unwrap_or_default()
    }
}

/// First element matching a selector, accepted only if it is an iframe.
pub struct DocumentFrameLocator {
    selector: String,
}

impl DocumentFrameLocator {
    #[must_use]
    pub fn new(selector: &str) -> Self {
        Self { selector: selector.to_owned() }
    }
}

impl FrameLocator for DocumentFrameLocator {
    type Frame = IframeTarget;

    fn find_frame(&self) -> Option<IframeTarget> {
        let element = query_first(&self.selector)?;
        match element.dyn_into::<web_sys::HtmlIFrameElement>() {
            Ok(frame) => Some(IframeTarget { frame }),
            Err(_) => {
                log::debug!("{} does not match an iframe", self.selector);
                None
            }
        }
    }
}

pub struct IframeTarget {
    frame: web_sys::HtmlIFrameElement,
}

impl MessageTarget for IframeTarget {
    fn post_message(&self, message: &ThemeMessage, target_origin: &str) -> Result<(), SyncError> {
        let window = self.frame.content_window().ok_or(SyncError::NoContentWindow)?;
        // The widget expects a structured-clone object, not a JSON string.
        let payload = js_sys::JSON::parse(&message.to_json()?).map_err(|e| SyncError::Encode(describe(&e)))?;
        window
            .post_message(&payload, target_origin)
            .map_err(|e| SyncError::Post(describe(&e)))
    }
}

/// Click listener target for the color-mode toggle.
pub struct ElementClickSource {
    element: web_sys::Element,
}

impl ElementClickSource {
    /// `None` when nothing matches `selector` at call time.
    #[must_use]
    pub fn find(selector: &str) -> Option<Self> {
        query_first(selector).map(|element| Self { element })
    }
}

impl ClickSource for ElementClickSource {
    fn on_click(&self, mut handler: Box<dyn FnMut()>) {
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| handler());
        if let Err(e) = self
            .element
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        {
            log::debug!("failed to attach color-mode click listener: {}", describe(&e));
            return;
        }
        // Lives as long as the page.
        listener.forget();
    }
}

/// `setTimeout`-backed scheduler. Handles are leaked so timers cannot be
/// cleared.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}

fn query_first(selector: &str) -> Option<web_sys::Element> {
    let document = web_sys::window()?.document()?;
    match document.query_selector(selector) {
        Ok(element) => element,
        Err(e) => {
            log::debug!("invalid selector {selector}: {}", describe(&e));
            None
        }
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn browser_synchronizer(config: &SyncConfig) -> ThemeSynchronizer<LocalStorage, DocumentFrameLocator> {
    ThemeSynchronizer::new(LocalStorage, DocumentFrameLocator::new(&config.frame_selector), config)
}

/// Runs when the module is instantiated: wire up both triggers.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Warn).is_err() {
        log::debug!("logger already installed by host page");
    }

    install_with(&SyncConfig::default());
}

/// Wire both triggers against the live page using `config`.
pub fn install_with(config: &SyncConfig) {
    let toggle = ElementClickSource::find(&config.toggle_selector);
    triggers::install(
        Rc::new(browser_synchronizer(config)),
        toggle.as_ref(),
        Rc::new(TimeoutScheduler),
        config,
    );
}

/// Push the current theme immediately. Returns the theme name sent, or
/// `undefined` when nothing was sent.
#[wasm_bindgen(js_name = syncUtterancesTheme)]
#[must_use]
pub fn sync_now() -> Option<String> {
    browser_synchronizer(&SyncConfig::default())
        .synchronize()
        .map(|theme| theme.as_str().to_owned())
}
