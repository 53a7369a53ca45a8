//! Synchronous generators.
//!
//! A [`Generator`] owns a suspended producer body and resumes it on demand,
//! one suspend point at a time, on the consumer's own thread. Values are
//! read through a [`Cursor`] obtained from [`Generator::begin`], or by using
//! the generator as an [`Iterator`].
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut evens: Generator<'_, u32> = Generator::new(|co| async move {
//!     for i in 0..4 {
//!         co.yield_(i * 2).await;
//!     }
//!     Ok(())
//! });
//!
//! let mut seen = Vec::new();
//! let mut cursor = evens.begin();
//! while cursor != Generator::end() {
//!     seen.push(*cursor.get().unwrap());
//!     cursor.advance();
//! }
//! assert_eq!(seen, vec![0, 2, 4, 6]);
//! ```

pub mod cursor;
mod driver;

use std::fmt;
use std::future::Future;
use std::iter::FusedIterator;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::task::waker_ref;

use crate::config::{GeneratorBuilder, GeneratorConfig};
use crate::core::frame::Frame;
use crate::core::state::Slot;
use crate::core::{Co, ProducerState, Status};
use crate::error::Error;
use crate::tracing_support::trace_event;

pub use cursor::Cursor;
use driver::Parker;

/// A lazily evaluated sequence driven by pulling.
///
/// Creating a generator instantiates the producer body without running
/// it. Each resumption runs the body until it yields, returns, or fails.
/// A failure is captured and handed to the consumer when it reads the
/// current item, never at the resumption itself.
///
/// Dropping the generator drops the suspended body on the spot, releasing
/// everything it holds, whether or not the sequence was exhausted.
///
/// # Blocking
///
/// A producer body may await other futures. While such a future is pending
/// the consumer's thread is parked until the future's waker fires, so that
/// wakeup must come from another thread: a channel fed by a spawned thread,
/// or a task on a multi-threaded runtime. Awaiting a future that only the
/// consumer's own thread can drive, such as a `tokio::time::sleep` inside a
/// current-thread runtime, parks the thread forever. Use an
/// [`AsyncGenerator`](crate::AsyncGenerator) for bodies that await
/// runtime-bound I/O.
pub struct Generator<'a, T, E = Error> {
    frame: Frame<'a, T, E>,
    state: ProducerState<T, E>,
    parker: Arc<Parker>,
    config: GeneratorConfig,
}

// `build` picks the item and failure types.
impl Generator<'static, (), Error> {
    /// Start building a configured generator.
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }
}

impl<'a, T, E> Generator<'a, T, E> {
    /// Instantiate a producer body with the default configuration.
    ///
    /// The closure is called immediately and receives the [`Co`] handle;
    /// the future it returns is not polled until the first resumption.
    pub fn new<P, F>(producer: P) -> Self
    where
        P: FnOnce(Co<T>) -> F,
        F: Future<Output = Result<(), E>> + 'a,
    {
        Self::with_config(GeneratorConfig::default(), producer)
    }

    pub(crate) fn with_config<P, F>(config: GeneratorConfig, producer: P) -> Self
    where
        P: FnOnce(Co<T>) -> F,
        F: Future<Output = Result<(), E>> + 'a,
    {
        trace_event!(generator = %config.name, "generator created");
        Self {
            frame: Frame::new(producer),
            state: ProducerState::new(),
            parker: Parker::current(),
            config,
        }
    }

    /// Resume the producer to its first suspend point and return a cursor
    /// over the current item.
    ///
    /// Returns the end cursor if the producer finished without yielding.
    /// Calling this again resumes from where the previous cursor left off;
    /// a generator never rewinds.
    pub fn begin(&mut self) -> Cursor<'_, 'a, T, E> {
        self.resume();
        Cursor::new(self)
    }

    /// The end cursor. Equal to every exhausted cursor.
    pub fn end<'g>() -> Cursor<'g, 'a, T, E>
    where
        'a: 'g,
        T: 'g,
        E: 'g,
    {
        Cursor::end()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The producer's bookkeeping: current value, captured failure, phase.
    pub fn state(&self) -> &ProducerState<T, E> {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Run the producer body until its next suspend point.
    ///
    /// Once the body has completed this only marks the state finished, so a
    /// pending failure that nobody read is dropped here.
    pub(crate) fn resume(&mut self) {
        if self.frame.is_complete() {
            self.state.on_finish();
            return;
        }
        if self.state.on_start() {
            trace_event!(generator = %self.config.name, "producer started");
        }

        let step = loop {
            let waker = waker_ref(&self.parker);
            let mut cx = Context::from_waker(&waker);
            match self.frame.poll_step(&mut cx) {
                Poll::Ready(step) => break step,
                Poll::Pending => {
                    trace_event!(generator = %self.config.name, "producer awaiting, parking");
                    self.parker.park();
                }
            }
        };
        self.state.record(step, &self.config.name);
    }
}

impl<T, E> Iterator for Generator<'_, T, E> {
    type Item = Result<T, E>;

    /// Resume the producer and move its outcome out.
    ///
    /// A failure left pending by a cursor is delivered before resuming.
    fn next(&mut self) -> Option<Self::Item> {
        if self.state.failure().is_none() {
            self.resume();
        }
        match self.state.take() {
            Slot::Value(value) => Some(Ok(value)),
            Slot::Failed(error) => Some(Err(error)),
            Slot::Empty | Slot::FailureTaken | Slot::Finished => None,
        }
    }
}

impl<T, E> FusedIterator for Generator<'_, T, E> {}

impl<T, E> Drop for Generator<'_, T, E> {
    fn drop(&mut self) {
        trace_event!(
            generator = %self.config.name,
            status = ?self.state.status(),
            "generator dropped, tearing down producer"
        );
    }
}

impl<T, E> fmt::Debug for Generator<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("name", &self.config.name)
            .field("status", &self.state.status())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Guard(Rc<Cell<u32>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_body_is_lazy() {
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let mut lazy: Generator<'_, u8> = Generator::new(move |co| async move {
            flag.set(true);
            co.yield_(1).await;
            Ok(())
        });

        assert!(!ran.get());
        assert_eq!(lazy.status(), Status::NotStarted);

        let _ = lazy.begin();
        assert!(ran.get());
        assert_eq!(lazy.status(), Status::Yielded);
    }

    #[test]
    fn test_iterator_yields_in_order() {
        let numbers: Generator<'_, i32> = Generator::new(|co| async move {
            for i in [3, 1, 4, 1, 5] {
                co.yield_(i).await;
            }
            Ok(())
        });

        let items: Vec<i32> = numbers.map(|r| r.unwrap()).collect();
        assert_eq!(items, vec![3, 1, 4, 1, 5]);
    }

    #[test]
    fn test_iterator_delivers_failure_once() {
        let mut failing: Generator<'_, i32, String> = Generator::new(|co| async move {
            co.yield_(1).await;
            Err("broken".to_string())
        });

        assert_eq!(failing.next(), Some(Ok(1)));
        assert_eq!(failing.next(), Some(Err("broken".to_string())));
        assert_eq!(failing.next(), None);
        assert_eq!(failing.next(), None);
        assert!(failing.is_finished());
    }

    #[test]
    fn test_drop_releases_frame_exactly_once() {
        let drops = Rc::new(Cell::new(0));
        let counter = drops.clone();
        let mut held: Generator<'_, u32> = Generator::new(move |co| async move {
            let _guard = Guard(counter);
            for i in 0.. {
                co.yield_(i).await;
            }
            Ok(())
        });

        assert_eq!(held.next().unwrap().unwrap(), 0);
        assert_eq!(held.next().unwrap().unwrap(), 1);
        assert_eq!(drops.get(), 0);

        drop(held);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_drop_without_driving_releases_captures() {
        let drops = Rc::new(Cell::new(0));
        let guard = Guard(drops.clone());
        let untouched: Generator<'_, u32> = Generator::new(move |co| async move {
            let _guard = guard;
            co.yield_(1).await;
            Ok(())
        });

        assert_eq!(drops.get(), 0);
        drop(untouched);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_foreign_await_blocks_until_woken() {
        let mut delayed: Generator<'_, &str> = Generator::new(|co| async move {
            let (tx, rx) = futures::channel::oneshot::channel();
            std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_millis(10));
                let _ = tx.send("from another thread");
            });
            match rx.await {
                Ok(message) => co.yield_(message).await,
                Err(_) => return Err(Error::custom("sender dropped")),
            }
            Ok(())
        });

        assert_eq!(delayed.next().unwrap().unwrap(), "from another thread");
        assert!(delayed.next().is_none());
    }

    #[test]
    fn test_runtime_task_wakes_parked_generator() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .unwrap();
        let (tx, rx) = futures::channel::oneshot::channel();
        runtime.spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            let _ = tx.send(5u64);
        });

        let mut timed: Generator<'_, u64> = Generator::new(|co| async move {
            match rx.await {
                Ok(ms) => co.yield_(ms).await,
                Err(_) => return Err(Error::custom("timer task dropped")),
            }
            Ok(())
        });

        assert_eq!(timed.next().unwrap().unwrap(), 5);
        assert!(timed.next().is_none());
    }

    #[test]
    fn test_builder_infers_item_and_failure_types() {
        let mut labelled = Generator::builder()
            .name("labelled")
            .build(|co| async move {
                co.yield_(7u64).await;
                Err::<(), String>("stopped early".to_string())
            });

        assert_eq!(labelled.config().name, "labelled");
        assert_eq!(labelled.next(), Some(Ok(7)));
        assert_eq!(labelled.next(), Some(Err("stopped early".to_string())));
        assert_eq!(labelled.next(), None);
    }

    #[test]
    fn test_builder_sets_name() {
        let named: Generator<'_, ()> = Generator::builder()
            .name("named")
            .build(|_co| async { Ok(()) });
        assert_eq!(named.config().name, "named");
        assert!(format!("{:?}", named).contains("named"));
    }
}
