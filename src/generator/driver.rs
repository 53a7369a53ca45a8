//! Blocking wakeups for producer bodies that await other futures.
//!
//! When a synchronous generator's body is pending without having yielded,
//! the driver parks the consumer's thread until the awaited future wakes
//! it, then polls again. Resumption therefore still returns only at a
//! suspend point.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, Thread};

use futures::task::ArcWake;

#[derive(Debug)]
pub(crate) struct Parker {
    thread: Thread,
    notified: AtomicBool,
}

impl Parker {
    /// A parker bound to the calling thread.
    pub(crate) fn current() -> Arc<Self> {
        Arc::new(Self {
            thread: thread::current(),
            notified: AtomicBool::new(false),
        })
    }

    /// Block until woken. Returns immediately if a wakeup already arrived.
    pub(crate) fn park(&self) {
        while !self.notified.swap(false, Ordering::Acquire) {
            thread::park();
        }
    }
}

impl ArcWake for Parker {
    fn wake_by_ref(arc_self: &Arc<Self>) {
        arc_self.notified.store(true, Ordering::Release);
        arc_self.thread.unpark();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_wake_before_park_returns_immediately() {
        let parker = Parker::current();
        futures::task::waker(parker.clone()).wake();
        parker.park();
    }

    #[test]
    fn test_wake_from_other_thread() {
        let parker = Parker::current();
        let waker = futures::task::waker(parker.clone());

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            waker.wake();
        });

        parker.park();
        handle.join().unwrap();
    }
}
