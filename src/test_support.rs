//! In-memory fakes for the page seams.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::error::SyncError;
use crate::message::ThemeMessage;
use crate::ports::{ClickSource, FrameLocator, MessageTarget, PreferenceStore, Scheduler};

#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Posted {
    pub json: serde_json::Value,
    pub origin: String,
}

impl Posted {
    pub fn theme(&self) -> Option<&str> {
        self.json["theme"].as_str()
    }
}

#[derive(Clone, Default)]
pub struct RecordingFrame {
    posts: Rc<RefCell<Vec<Posted>>>,
    reject: bool,
}

impl RecordingFrame {
    pub fn rejecting() -> Self {
        Self { reject: true, ..Self::default() }
    }

    pub fn posts(&self) -> Vec<Posted> {
        self.posts.borrow().clone()
    }
}

impl MessageTarget for RecordingFrame {
    fn post_message(&self, message: &ThemeMessage, target_origin: &str) -> Result<(), SyncError> {
        if self.reject {
            return Err(SyncError::Post("target origin mismatch".into()));
        }
        let json = serde_json::from_str(&message.to_json()?).map_err(|e| SyncError::Encode(e.to_string()))?;
        self.posts.borrow_mut().push(Posted { json, origin: target_origin.to_owned() });
        Ok(())
    }
}

/// Locator over a frame slot that tests can fill or empty between syncs.
#[derive(Clone, Default)]
pub struct SlotLocator {
    frame: Rc<RefCell<Option<RecordingFrame>>>,
}

impl SlotLocator {
    pub fn with_frame(frame: &RecordingFrame) -> Self {
        let locator = Self::default();
        locator.mount(frame);
        locator
    }

    pub fn mount(&self, frame: &RecordingFrame) {
        *self.frame.borrow_mut() = Some(frame.clone());
    }
}

impl FrameLocator for SlotLocator {
    type Frame = RecordingFrame;

    fn find_frame(&self) -> Option<RecordingFrame> {
        self.frame.borrow().clone()
    }
}

#[derive(Clone, Default)]
pub struct FakeToggle {
    handlers: Rc<RefCell<Vec<Box<dyn FnMut()>>>>,
}

impl FakeToggle {
    pub fn click(&self) {
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl ClickSource for FakeToggle {
    fn on_click(&self, handler: Box<dyn FnMut()>) {
        self.handlers.borrow_mut().push(handler);
    }
}

struct PendingTask {
    due_ms: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

/// Scheduler driven by a virtual clock. Tasks fire in due-time order, ties
/// broken by scheduling order, as browser timers do.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    state: Rc<RefCell<ClockState>>,
}

impl VirtualScheduler {
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now_ms + ms;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due_ms <= target)
                    .min_by_key(|(_, p)| (p.due_ms, p.seq))
                    .map(|(i, _)| i);
                if let Some(i) = due {
                    let pending = state.pending.remove(i);
                    state.now_ms = pending.due_ms;
                    Some(pending.task)
                } else {
                    state.now_ms = target;
                    None
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut state = self.state.borrow_mut();
        let due_ms = state.now_ms + u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        let seq = state.next_seq;
        state.next_seq += 1;
        state.pending.push(PendingTask { due_ms, seq, task });
    }
}

/// Process-wide logger that keeps every record for inspection.
pub struct CaptureLogger {
    records: Mutex<Vec<(log::Level, String)>>,
}

static CAPTURE: CaptureLogger = CaptureLogger { records: Mutex::new(Vec::new()) };

impl CaptureLogger {
    /// Install the capture logger (once per test binary) and return it.
    pub fn install() -> &'static Self {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
        &CAPTURE
    }

    /// Levels of every record whose message contains `needle`.
    pub fn levels_of(&self, needle: &str) -> Vec<log::Level> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(_, message)| message.contains(needle))
            .map(|(level, _)| *level)
            .collect()
    }
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}
