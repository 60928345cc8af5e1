//! Custom hooks shared by components.
//!
//! Provides owned, cancellable timers for component-driven animation.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// A single pending `setTimeout`, owned by the component that created it.
///
/// Scheduling replaces (and thereby cancels) whatever was pending. The
/// slot is cleared when the owning component is unmounted, so no callback
/// fires into a disposed component.
#[derive(Clone, Copy)]
pub struct TimerSlot(StoredValue<Option<Timeout>, LocalStorage>);

impl TimerSlot {
    /// Create an empty slot and register its cleanup with the current owner.
    pub fn new() -> Self {
        let slot = Self(StoredValue::new_local(None));
        on_cleanup(move || slot.cancel());
        slot
    }

    /// Run `callback` after `delay_ms`, cancelling the previous timer.
    pub fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(delay_ms, callback);
        self.0.try_set_value(Some(timeout));
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&self) {
        self.0.try_update_value(|slot| slot.take());
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let log = fired.clone();
        let make = move |name: &'static str| -> Box<dyn FnOnce()> {
            let log = log.clone();
            Box::new(move || log.borrow_mut().push(name))
        };
        (fired, make)
    }

    #[wasm_bindgen_test]
    async fn test_schedule_replaces_pending() {
        let owner = Owner::new();
        owner.set();
        let (fired, make) = recorder();

        let slot = TimerSlot::new();
        slot.schedule(20, make("first"));
        slot.schedule(40, make("second"));

        TimeoutFuture::new(100).await;
        assert_eq!(*fired.borrow(), vec!["second"]);
    }

    #[wasm_bindgen_test]
    async fn test_cancel_drops_pending() {
        let owner = Owner::new();
        owner.set();
        let (fired, make) = recorder();

        let slot = TimerSlot::new();
        slot.schedule(20, make("cancelled"));
        slot.cancel();

        TimeoutFuture::new(60).await;
        assert!(fired.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_owner_cleanup_cancels_slots() {
        let owner = Owner::new();
        owner.set();
        let (fired, make) = recorder();

        let typing = TimerSlot::new();
        let transition = TimerSlot::new();
        typing.schedule(20, make("typing"));
        transition.schedule(20, make("transition"));
        owner.cleanup();

        TimeoutFuture::new(60).await;
        assert!(fired.borrow().is_empty());

        // A disposed slot drops new timers instead of running them.
        typing.schedule(10, make("late"));
        TimeoutFuture::new(40).await;
        assert!(fired.borrow().is_empty());
    }
}
