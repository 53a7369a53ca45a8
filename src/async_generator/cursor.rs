//! Forward-only traversal over an [`AsyncGenerator`].

use std::fmt;
use std::ptr;

use futures::future::poll_fn;

use crate::async_generator::AsyncGenerator;

/// A single-pass cursor over the items of an [`AsyncGenerator`].
///
/// Same contract as [`Cursor`](crate::generator::Cursor), except that
/// advancing is awaited.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// # futures::executor::block_on(async {
/// let mut words: AsyncGenerator<'_, &str> = AsyncGenerator::new(|co| async move {
///     co.yield_("lazy").await;
///     co.yield_("seq").await;
///     Ok(())
/// });
///
/// let mut joined = String::new();
/// let mut cursor = words.begin().await;
/// while cursor != AsyncGenerator::end() {
///     joined.push_str(cursor.get().unwrap());
///     cursor.advance().await;
/// }
/// assert_eq!(joined, "lazyseq");
/// # });
/// ```
///
/// As with [`Cursor`](crate::generator::Cursor), only one cursor can be
/// alive per generator:
///
/// ```compile_fail,E0499
/// use lazyseq::prelude::*;
///
/// # futures::executor::block_on(async {
/// let mut words: AsyncGenerator<'_, &str> = AsyncGenerator::new(|co| async move {
///     co.yield_("once").await;
///     Ok(())
/// });
/// let first = words.begin().await;
/// let second = words.begin().await;
/// assert!(first != second);
/// # });
/// ```
pub struct AsyncCursor<'g, 'a, T, E> {
    generator: Option<&'g mut AsyncGenerator<'a, T, E>>,
}

impl<'g, 'a, T, E> AsyncCursor<'g, 'a, T, E> {
    pub(crate) fn new(generator: &'g mut AsyncGenerator<'a, T, E>) -> Self {
        if generator.state.is_finished() {
            Self::end()
        } else {
            Self {
                generator: Some(generator),
            }
        }
    }

    /// The end cursor.
    pub fn end() -> Self {
        Self { generator: None }
    }

    pub fn is_end(&self) -> bool {
        self.generator.is_none()
    }

    /// Resume the producer until its next suspend point.
    ///
    /// Does nothing on the end cursor. If the producer finishes, this
    /// cursor becomes the end cursor.
    pub async fn advance(&mut self) -> &mut Self {
        if let Some(generator) = self.generator.as_deref_mut() {
            poll_fn(|cx| generator.poll_resume(cx)).await;
            let finished = generator.state.is_finished();
            if finished {
                self.generator = None;
            }
        }
        self
    }

    /// Read the current item, or take the captured failure (exactly once).
    ///
    /// # Panics
    ///
    /// Panics when called on the end cursor, or again after the failure
    /// was already returned.
    pub fn get(&mut self) -> Result<&mut T, E> {
        match self.generator.as_deref_mut() {
            Some(generator) => generator.state.read_current(),
            None => panic!("read through the end cursor of a generator"),
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.generator.as_deref()?.state.value()
    }

    /// The captured failure, if any. Does not clear it.
    pub fn failure(&self) -> Option<&E> {
        self.generator.as_deref()?.state.failure()
    }
}

impl<T, E> PartialEq for AsyncCursor<'_, '_, T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self.generator.as_deref(), other.generator.as_deref()) {
            (None, None) => true,
            (Some(a), Some(b)) => ptr::eq(a, b),
            _ => false,
        }
    }
}

impl<T, E> Eq for AsyncCursor<'_, '_, T, E> {}

impl<T, E> fmt::Debug for AsyncCursor<'_, '_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.generator.as_deref() {
            Some(generator) => f.debug_tuple("AsyncCursor").field(generator).finish(),
            None => f.write_str("AsyncCursor(end)"),
        }
    }
}
