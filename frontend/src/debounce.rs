//! Collapses bursts of calls into a single execution.
//!
//! Every call cancels the pending timer and arms a new one for `wait`.
//! With `leading` set, the first call of a burst runs the callback right
//! away and the timer only marks the end of the burst; nothing runs on the
//! trailing edge. Without `leading`, the callback runs once when the timer
//! fires, with the argument of the last call.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::timers::{BrowserTimers, Timers};

pub const DEFAULT_WAIT: Duration = Duration::from_millis(10);
pub const DEFAULT_LEADING: bool = true;

struct Pending<H> {
    handle: Option<H>,
    // Cleared by the timer body. The handle itself is kept until the next
    // call replaces it so a timer is never dropped from inside its own run.
    armed: bool,
}

pub struct Debounced<A, T: Timers = BrowserTimers> {
    callback: Rc<dyn Fn(A)>,
    wait: Duration,
    leading: bool,
    timers: T,
    pending: Rc<RefCell<Pending<T::Handle>>>,
}

/// Debounces `callback` on the browser's `setTimeout`.
pub fn debounce<A, F>(callback: F, wait: Duration, leading: bool) -> Debounced<A>
where
    A: 'static,
    F: Fn(A) + 'static,
{
    debounce_with(BrowserTimers, callback, wait, leading)
}

pub fn debounce_with<A, F, T>(
    timers: T,
    callback: F,
    wait: Duration,
    leading: bool,
) -> Debounced<A, T>
where
    A: 'static,
    F: Fn(A) + 'static,
    T: Timers,
{
    Debounced {
        callback: Rc::new(callback),
        wait,
        leading,
        timers,
        pending: Rc::new(RefCell::new(Pending {
            handle: None,
            armed: false,
        })),
    }
}

impl<A: 'static, T: Timers> Debounced<A, T> {
    /// Leading-edge wrapper with the [`DEFAULT_WAIT`] quiet period.
    pub fn with_defaults<F>(timers: T, callback: F) -> Self
    where
        F: Fn(A) + 'static,
    {
        debounce_with(timers, callback, DEFAULT_WAIT, DEFAULT_LEADING)
    }

    pub fn call(&self, arg: A) {
        let call_now = self.leading && !self.pending.borrow().armed;

        let (now_arg, trailing) = if self.leading {
            (Some(arg), None)
        } else {
            (None, Some((self.callback.clone(), arg)))
        };

        let pending = Rc::downgrade(&self.pending);
        let handle = self.timers.schedule(self.wait, move || {
            // The wrapper is gone; its timer should have been cancelled with it.
            let Some(pending) = pending.upgrade() else {
                return;
            };
            pending.borrow_mut().armed = false;
            drop(pending);

            if let Some((callback, arg)) = trailing {
                callback(arg);
            }
        });

        let previous = {
            let mut pending = self.pending.borrow_mut();
            pending.armed = true;
            pending.handle.replace(handle)
        };
        // Cancels the previous timer if it has not fired.
        drop(previous);

        if call_now {
            if let Some(arg) = now_arg {
                (self.callback)(arg);
            }
        }
    }

    /// Whether a burst is in progress, i.e. a timer is armed.
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().armed
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn leading(&self) -> bool {
        self.leading
    }

    /// Turns the wrapper into a plain closure, e.g. for an event listener.
    pub fn into_fn(self) -> impl Fn(A) {
        move |arg| self.call(arg)
    }
}

impl<A, T: Timers> fmt::Debug for Debounced<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.wait)
            .field("leading", &self.leading)
            .field("armed", &self.pending.borrow().armed)
            .finish()
    }
}
