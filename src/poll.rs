//! Fixed-interval Polling
//!
//! Each view that needs fresh data owns one timer. The timer starts when the
//! view mounts and is cleared when its owner is cleaned up; responses that
//! land afterwards are dropped.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Shared "owner still mounted" flag
#[derive(Debug, Clone)]
pub struct PollGuard(Arc<AtomicBool>);

impl PollGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn deactivate(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Hand `value` to `apply` only while the owner is mounted
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_active() {
            apply(value);
            true
        } else {
            false
        }
    }
}

impl Default for PollGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch once now, then every `interval`, until the current owner is
/// cleaned up.
pub fn use_poll<T, F, Fut, A>(name: &'static str, interval: Duration, fetch: F, apply: A)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = T> + 'static,
    A: Fn(T) + Clone + 'static,
{
    let guard = PollGuard::new();

    let tick = {
        let guard = guard.clone();
        move || {
            let guard = guard.clone();
            let apply = apply.clone();
            let pending = fetch();
            spawn_local(async move {
                let value = pending.await;
                if !guard.deliver(value, apply) {
                    tracing::debug!(poll = name, "discarding response for unmounted view");
                }
            });
        }
    };

    tick();
    let handle = match set_interval_with_handle(tick, interval) {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::warn!(poll = name, ?err, "failed to start poll timer");
            None
        }
    };

    on_cleanup(move || {
        guard.deactivate();
        if let Some(handle) = handle {
            handle.clear();
        }
        tracing::debug!(poll = name, "poll stopped");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_guard_delivers_while_active() {
        let guard = PollGuard::new();
        let state = RefCell::new(Vec::new());
        assert!(guard.deliver(vec![1, 2], |v| *state.borrow_mut() = v));
        assert_eq!(*state.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_late_response_is_discarded() {
        let guard = PollGuard::new();
        let observer = guard.clone();
        let state = RefCell::new(vec![1]);

        guard.deactivate();
        assert!(!observer.deliver(vec![9, 9], |v| *state.borrow_mut() = v));
        assert_eq!(*state.borrow(), vec![1]);
    }
}
