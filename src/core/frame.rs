//! The suspended producer computation.
//!
//! A [`Frame`] owns the boxed future produced by a producer body together
//! with the handoff cell its [`Co`] writes into. Polling the frame runs the
//! body up to its next suspend point.

use std::future::Future;
use std::task::{Context, Poll};

use futures::future::{FutureExt, LocalBoxFuture};

use crate::core::yielder::{airlock, Airlock, Co};

/// What a single resumption of the producer body ended with.
#[derive(Debug)]
pub(crate) enum Step<T, E> {
    /// The body yielded a value and is suspended after it
    Yielded(T),
    /// The body returned normally
    Returned,
    /// The body returned an error
    Failed(E),
}

pub(crate) struct Frame<'a, T, E> {
    future: LocalBoxFuture<'a, Result<(), E>>,
    airlock: Airlock<T>,
    complete: bool,
}

impl<'a, T, E> Frame<'a, T, E> {
    /// Instantiate a producer body without running any of it.
    ///
    /// The closure itself is called here; only the future it returns is
    /// deferred.
    pub(crate) fn new<P, F>(producer: P) -> Self
    where
        P: FnOnce(Co<T>) -> F,
        F: Future<Output = Result<(), E>> + 'a,
    {
        let airlock = airlock();
        let future = producer(Co::new(airlock.clone())).boxed_local();
        Self {
            future,
            airlock,
            complete: false,
        }
    }

    /// True once the body has returned or failed. A complete frame is never
    /// polled again.
    pub(crate) fn is_complete(&self) -> bool {
        self.complete
    }

    /// Run the body until its next suspend point.
    ///
    /// `Pending` means the body is waiting on some other future, which has
    /// registered `cx`'s waker; the body has not yielded.
    pub(crate) fn poll_step(&mut self, cx: &mut Context<'_>) -> Poll<Step<T, E>> {
        if self.complete {
            return Poll::Ready(Step::Returned);
        }

        match self.future.as_mut().poll(cx) {
            Poll::Pending => match self.airlock.take() {
                Some(value) => Poll::Ready(Step::Yielded(value)),
                None => Poll::Pending,
            },
            Poll::Ready(Ok(())) => {
                self.complete = true;
                Poll::Ready(Step::Returned)
            }
            Poll::Ready(Err(error)) => {
                self.complete = true;
                Poll::Ready(Step::Failed(error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::task::noop_waker_ref;

    #[test]
    fn test_body_does_not_run_until_polled() {
        let ran = std::cell::Cell::new(false);
        let mut frame: Frame<'_, u8, ()> = Frame::new(|_co| async {
            ran.set(true);
            Ok(())
        });
        assert!(!ran.get());

        let mut cx = Context::from_waker(noop_waker_ref());
        assert!(matches!(frame.poll_step(&mut cx), Poll::Ready(Step::Returned)));
        assert!(ran.get());
        assert!(frame.is_complete());
    }

    #[test]
    fn test_steps_follow_body() {
        let mut frame: Frame<'_, u8, &str> = Frame::new(|co| async move {
            co.yield_(1).await;
            co.yield_(2).await;
            Err("late failure")
        });
        let mut cx = Context::from_waker(noop_waker_ref());

        assert!(matches!(frame.poll_step(&mut cx), Poll::Ready(Step::Yielded(1))));
        assert!(matches!(frame.poll_step(&mut cx), Poll::Ready(Step::Yielded(2))));
        assert!(matches!(
            frame.poll_step(&mut cx),
            Poll::Ready(Step::Failed("late failure"))
        ));
        // absorbing once complete
        assert!(matches!(frame.poll_step(&mut cx), Poll::Ready(Step::Returned)));
    }

    #[test]
    fn test_foreign_pending_is_not_a_yield() {
        let mut frame: Frame<'_, u8, ()> = Frame::new(|co| async move {
            futures::future::pending::<()>().await;
            co.yield_(1).await;
            Ok(())
        });
        let mut cx = Context::from_waker(noop_waker_ref());

        assert!(frame.poll_step(&mut cx).is_pending());
        assert!(!frame.is_complete());
    }
}
