//! Asynchronous generators.
//!
//! An [`AsyncGenerator`] takes the same kind of producer body as a
//! [`Generator`](crate::generator::Generator), but is driven from the
//! consumer's task instead of blocking its thread. When the body awaits
//! something that is not ready, the consumer's poll returns `Pending` and
//! the awaited future is responsible for waking the consumer's task.
//!
//! ```rust
//! use futures::StreamExt;
//! use lazyseq::prelude::*;
//!
//! # futures::executor::block_on(async {
//! let ticks: AsyncGenerator<'_, u32> = AsyncGenerator::new(|co| async move {
//!     for tick in 1..=3 {
//!         co.yield_(tick).await;
//!     }
//!     Ok(())
//! });
//!
//! let collected: Vec<u32> = ticks.map(|r| r.unwrap()).collect().await;
//! assert_eq!(collected, vec![1, 2, 3]);
//! # });
//! ```

pub mod cursor;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

use async_trait::async_trait;
use futures::future::poll_fn;
use futures_core::stream::{FusedStream, Stream};

use crate::config::{GeneratorBuilder, GeneratorConfig};
use crate::core::frame::Frame;
use crate::core::state::Slot;
use crate::core::{Co, ProducerState, Source, Status};
use crate::error::{Error, Result};
use crate::tracing_support::trace_event;

pub use cursor::AsyncCursor;

/// A lazily evaluated sequence whose producer may await other futures.
///
/// Implements [`Stream`]; also traversable with an [`AsyncCursor`].
pub struct AsyncGenerator<'a, T, E = Error> {
    frame: Frame<'a, T, E>,
    state: ProducerState<T, E>,
    config: GeneratorConfig,
}

// The frame is boxed; nothing here is pinned structurally.
impl<T, E> Unpin for AsyncGenerator<'_, T, E> {}

// `build` picks the item and failure types.
impl AsyncGenerator<'static, (), Error> {
    /// Start building a configured generator.
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }
}

impl<'a, T, E> AsyncGenerator<'a, T, E> {
    /// Instantiate a producer body with the default configuration.
    pub fn new<P, F>(producer: P) -> Self
    where
        P: FnOnce(Co<T>) -> F,
        F: Future<Output = std::result::Result<(), E>> + 'a,
    {
        Self::with_config(GeneratorConfig::default(), producer)
    }

    pub(crate) fn with_config<P, F>(config: GeneratorConfig, producer: P) -> Self
    where
        P: FnOnce(Co<T>) -> F,
        F: Future<Output = std::result::Result<(), E>> + 'a,
    {
        trace_event!(generator = %config.name, "async generator created");
        Self {
            frame: Frame::new(producer),
            state: ProducerState::new(),
            config,
        }
    }

    /// Resume the producer to its first suspend point and return a cursor
    /// over the current item, or the end cursor if it yielded nothing.
    pub async fn begin(&mut self) -> AsyncCursor<'_, 'a, T, E> {
        poll_fn(|cx| self.poll_resume(cx)).await;
        AsyncCursor::new(self)
    }

    /// The end cursor. Equal to every exhausted cursor.
    pub fn end<'g>() -> AsyncCursor<'g, 'a, T, E>
    where
        'a: 'g,
        T: 'g,
        E: 'g,
    {
        AsyncCursor::end()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn state(&self) -> &ProducerState<T, E> {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Poll the producer body towards its next suspend point.
    pub(crate) fn poll_resume(&mut self, cx: &mut Context<'_>) -> Poll<()> {
        if self.frame.is_complete() {
            self.state.on_finish();
            return Poll::Ready(());
        }
        if self.state.on_start() {
            trace_event!(generator = %self.config.name, "producer started");
        }

        let step = ready!(self.frame.poll_step(cx));
        self.state.record(step, &self.config.name);
        Poll::Ready(())
    }
}

impl<T, E> Stream for AsyncGenerator<'_, T, E> {
    type Item = std::result::Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.state.failure().is_none() {
            ready!(this.poll_resume(cx));
        }
        Poll::Ready(match this.state.take() {
            Slot::Value(value) => Some(Ok(value)),
            Slot::Failed(error) => Some(Err(error)),
            Slot::Empty | Slot::FailureTaken | Slot::Finished => None,
        })
    }
}

impl<T, E> FusedStream for AsyncGenerator<'_, T, E> {
    fn is_terminated(&self) -> bool {
        self.state.is_finished()
    }
}

#[async_trait(?Send)]
impl<'a, T, E> Source for AsyncGenerator<'a, T, E>
where
    E: Into<Error>,
{
    type Item = T;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        match futures::StreamExt::next(self).await {
            Some(Ok(item)) => Ok(Some(item)),
            Some(Err(error)) => Err(error.into()),
            None => Ok(None),
        }
    }
}

impl<T, E> Drop for AsyncGenerator<'_, T, E> {
    fn drop(&mut self) {
        trace_event!(
            generator = %self.config.name,
            status = ?self.state.status(),
            "async generator dropped, tearing down producer"
        );
    }
}

impl<T, E> fmt::Debug for AsyncGenerator<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncGenerator")
            .field("name", &self.config.name)
            .field("status", &self.state.status())
            .finish_non_exhaustive()
    }
}
