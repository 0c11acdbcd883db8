//! Deferred execution used by [`crate::debounce`].
//!
//! A [`Timers`] implementation hands back a handle per scheduled task and
//! dropping that handle cancels the task if it has not run yet, the same
//! contract `gloo_timers::callback::Timeout` has with `clearTimeout`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::callback::Timeout;

pub trait Timers {
    /// Cancels the scheduled task when dropped.
    type Handle: 'static;

    fn schedule<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + 'static;
}

/// `setTimeout` on the page's event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
    type Handle = Timeout;

    fn schedule<F>(&self, delay: Duration, task: F) -> Timeout
    where
        F: FnOnce() + 'static,
    {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
struct Queue {
    now: Duration,
    next_seq: u64,
    // Keyed by (due, seq) so equal deadlines run in scheduling order.
    tasks: BTreeMap<(Duration, u64), Task>,
}

/// A manually driven clock. Nothing runs until [`VirtualTimers::advance`]
/// or [`VirtualTimers::run_until_idle`] is called, which makes it suitable
/// for hosts that pump their own loop and for deterministic tests.
#[derive(Clone, Default)]
pub struct VirtualTimers {
    queue: Rc<RefCell<Queue>>,
}

pub struct VirtualTimeout {
    key: (Duration, u64),
    queue: Weak<RefCell<Queue>>,
}

impl Drop for VirtualTimeout {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            let task = queue.borrow_mut().tasks.remove(&self.key);
            // Dropped after the borrow ends; the task may own other handles.
            drop(task);
        }
    }
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of tasks scheduled and not yet run or cancelled.
    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    /// Moves the clock forward, running every task that falls due on the
    /// way in deadline order. Tasks scheduled by a running task are picked
    /// up if they are due inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.queue.borrow_mut().now = target;
    }

    /// Runs tasks until none are left, jumping the clock to each deadline.
    pub fn run_until_idle(&self) {
        loop {
            let next_due = self
                .queue
                .borrow()
                .tasks
                .keys()
                .next()
                .map(|(due, _)| *due);
            match next_due {
                Some(due) => {
                    let now = self.now();
                    self.advance(due.saturating_sub(now));
                }
                None => break,
            }
        }
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut queue = self.queue.borrow_mut();
        let key = *queue.tasks.keys().next()?;
        if key.0 > target {
            return None;
        }
        queue.now = key.0;
        queue.tasks.remove(&key)
    }
}

impl Timers for VirtualTimers {
    type Handle = VirtualTimeout;

    fn schedule<F>(&self, delay: Duration, task: F) -> VirtualTimeout
    where
        F: FnOnce() + 'static,
    {
        let mut queue = self.queue.borrow_mut();
        let key = (queue.now + delay, queue.next_seq);
        queue.next_seq += 1;
        queue.tasks.insert(key, Box::new(task));

        VirtualTimeout {
            key,
            queue: Rc::downgrade(&self.queue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn nothing_runs_before_the_deadline() {
        let timers = VirtualTimers::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        let log = fired.clone();
        let _handle = timers.schedule(ms(10), move || log.borrow_mut().push("a"));

        timers.advance(ms(9));
        assert!(fired.borrow().is_empty());
        assert_eq!(timers.pending(), 1);

        timers.advance(ms(1));
        assert_eq!(*fired.borrow(), vec!["a"]);
        assert_eq!(timers.now(), ms(10));
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let timers = VirtualTimers::new();
        let fired = Rc::new(RefCell::new(0));

        let count = fired.clone();
        let handle = timers.schedule(ms(5), move || *count.borrow_mut() += 1);
        drop(handle);

        timers.run_until_idle();
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn zero_delay_waits_for_the_next_turn() {
        let timers = VirtualTimers::new();
        let fired = Rc::new(RefCell::new(false));

        let flag = fired.clone();
        let _handle = timers.schedule(Duration::ZERO, move || *flag.borrow_mut() = true);
        assert!(!*fired.borrow());

        timers.advance(Duration::ZERO);
        assert!(*fired.borrow());
    }

    #[test]
    fn equal_deadlines_keep_scheduling_order() {
        let timers = VirtualTimers::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        let handles: Vec<_> = ["first", "second", "third"]
            .into_iter()
            .map(|name| {
                let log = fired.clone();
                timers.schedule(ms(3), move || log.borrow_mut().push(name))
            })
            .collect();

        timers.advance(ms(3));
        assert_eq!(*fired.borrow(), vec!["first", "second", "third"]);
        drop(handles);
    }

    #[test]
    fn tasks_scheduled_while_advancing_run_inside_the_window() {
        let timers = VirtualTimers::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let chained = Rc::new(RefCell::new(None));

        let inner_timers = timers.clone();
        let log = fired.clone();
        let slot = chained.clone();
        let _outer = timers.schedule(ms(2), move || {
            log.borrow_mut().push(("outer", inner_timers.now()));
            let log = log.clone();
            let clock = inner_timers.clone();
            let inner = inner_timers.schedule(ms(3), move || {
                log.borrow_mut().push(("inner", clock.now()));
            });
            *slot.borrow_mut() = Some(inner);
        });

        timers.advance(ms(10));
        assert_eq!(*fired.borrow(), vec![("outer", ms(2)), ("inner", ms(5))]);
        assert_eq!(timers.now(), ms(10));
    }
}
