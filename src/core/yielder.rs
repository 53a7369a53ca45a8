//! The yield side of a producer body.
//!
//! A producer body receives a [`Co`] and hands values out with
//! `co.yield_(value).await`. The returned [`Yield`] future parks the value in
//! a one-slot handoff cell and reports `Pending` exactly once, which is what
//! suspends the body. The driver picks the value up from the cell, records
//! it, and the next poll lets the body continue past the `.await`.

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

/// One-value handoff between a suspended producer body and its driver.
pub(crate) type Airlock<T> = Rc<Cell<Option<T>>>;

pub(crate) fn airlock<T>() -> Airlock<T> {
    Rc::new(Cell::new(None))
}

/// Handle a producer body uses to yield values to its consumer.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut greetings: Generator<'_, &str> = Generator::new(|co| async move {
///     co.yield_("ping").await;
///     co.yield_("pong").await;
///     Ok(())
/// });
///
/// let items: Vec<_> = greetings.by_ref().map(|r| r.unwrap()).collect();
/// assert_eq!(items, vec!["ping", "pong"]);
/// ```
pub struct Co<T> {
    airlock: Airlock<T>,
}

impl<T> Co<T> {
    pub(crate) fn new(airlock: Airlock<T>) -> Self {
        Self { airlock }
    }

    /// Hand `value` to the consumer and suspend until it asks for more.
    ///
    /// The returned future must be awaited for the value to be delivered.
    pub fn yield_(&self, value: T) -> Yield<'_, T> {
        Yield {
            airlock: &self.airlock,
            value: Some(value),
        }
    }

    /// Like [`yield_`](Co::yield_), converting `value` into the item type.
    pub fn yield_into<V: Into<T>>(&self, value: V) -> Yield<'_, T> {
        self.yield_(value.into())
    }
}

impl<T> fmt::Debug for Co<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Co").finish_non_exhaustive()
    }
}

/// Future returned by [`Co::yield_`].
#[must_use = "yielded values are only delivered when the future is awaited"]
pub struct Yield<'c, T> {
    airlock: &'c Cell<Option<T>>,
    value: Option<T>,
}

// `value` is never pinned structurally.
impl<T> Unpin for Yield<'_, T> {}

impl<T> Future for Yield<'_, T> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match this.value.take() {
            Some(value) => {
                this.airlock.set(Some(value));
                Poll::Pending
            }
            None => Poll::Ready(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::task::noop_waker_ref;

    #[test]
    fn test_yield_suspends_once() {
        let cell = airlock::<u8>();
        let co = Co::new(cell.clone());
        let mut cx = Context::from_waker(noop_waker_ref());

        let mut fut = co.yield_(9u8);
        assert!(Pin::new(&mut fut).poll(&mut cx).is_pending());
        assert_eq!(cell.take(), Some(9));

        assert!(Pin::new(&mut fut).poll(&mut cx).is_ready());
        assert_eq!(cell.take(), None);
    }

    #[test]
    fn test_yield_converts_into_item_type() {
        let cell = airlock::<String>();
        let co = Co::new(cell.clone());
        let mut cx = Context::from_waker(noop_waker_ref());

        let mut fut = co.yield_into("converted");
        assert!(Pin::new(&mut fut).poll(&mut cx).is_pending());
        assert_eq!(cell.take().as_deref(), Some("converted"));
    }
}
