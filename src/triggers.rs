//! The two sync triggers: once after page load, and after every toggle click.
//!
//! Both go through [`Scheduler::schedule_once`] and are never cancelled.
//! Rapid clicks each schedule their own sync; none is debounced away.

#[cfg(test)]
#[path = "triggers_test.rs"]
mod triggers_test;

use std::rc::Rc;

use crate::config::SyncConfig;
use crate::ports::{ClickSource, FrameLocator, PreferenceStore, Scheduler};
use crate::sync::ThemeSynchronizer;

/// Schedule the load-time sync and, when a toggle control exists, hook its
/// clicks. Without a toggle only the load-time sync runs.
pub fn install<S, L, C, T>(
    synchronizer: Rc<ThemeSynchronizer<S, L>>,
    toggle: Option<&C>,
    scheduler: Rc<T>,
    config: &SyncConfig,
) where
    S: PreferenceStore + 'static,
    L: FrameLocator + 'static,
    C: ClickSource,
    T: Scheduler + 'static,
{
    let on_load = Rc::clone(&synchronizer);
    scheduler.schedule_once(
        config.load_delay(),
        Box::new(move || {
            on_load.synchronize();
        }),
    );

    let Some(toggle) = toggle else {
        log::debug!("color-mode toggle absent; click re-sync disabled");
        return;
    };

    let click_delay = config.click_delay();
    toggle.on_click(Box::new(move || {
        let on_click = Rc::clone(&synchronizer);
        scheduler.schedule_once(
            click_delay,
            Box::new(move || {
                on_click.synchronize();
            }),
        );
    }));
}
