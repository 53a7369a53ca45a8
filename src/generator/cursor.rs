//! Forward-only traversal over a [`Generator`].

use std::fmt;
use std::ptr;

use crate::generator::Generator;

/// A single-pass cursor over the items of a [`Generator`].
///
/// A live cursor borrows its generator mutably, so only one cursor can
/// drive a generator at a time. The end cursor borrows nothing; every
/// cursor that runs off the end of its generator becomes equal to it.
///
/// A second cursor cannot be taken while the first is alive:
///
/// ```compile_fail,E0499
/// use lazyseq::prelude::*;
///
/// let mut numbers = sources::range(0..3);
/// let first = numbers.begin();
/// let second = numbers.begin();
/// assert!(first != second);
/// ```
pub struct Cursor<'g, 'a, T, E> {
    generator: Option<&'g mut Generator<'a, T, E>>,
}

impl<'g, 'a, T, E> Cursor<'g, 'a, T, E> {
    /// Wrap a generator that was just resumed.
    pub(crate) fn new(generator: &'g mut Generator<'a, T, E>) -> Self {
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
    pub fn advance(&mut self) -> &mut Self {
        if let Some(generator) = self.generator.as_deref_mut() {
            generator.resume();
            let finished = generator.state.is_finished();
            if finished {
                self.generator = None;
            }
        }
        self
    }

    /// Read the current item.
    ///
    /// If the producer failed, the captured failure is moved out and
    /// returned here, exactly once; advance afterwards to reach the end.
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

    /// The current item, without surfacing a failure.
    pub fn value(&self) -> Option<&T> {
        self.generator.as_deref()?.state.value()
    }

    /// The captured failure, if any. Does not clear it.
    pub fn failure(&self) -> Option<&E> {
        self.generator.as_deref()?.state.failure()
    }
}

impl<T, E> PartialEq for Cursor<'_, '_, T, E> {
    /// Cursors are equal when they drive the same generator, or are both
    /// the end cursor.
    fn eq(&self, other: &Self) -> bool {
        match (self.generator.as_deref(), other.generator.as_deref()) {
            (None, None) => true,
            (Some(a), Some(b)) => ptr::eq(a, b),
            _ => false,
        }
    }
}

impl<T, E> Eq for Cursor<'_, '_, T, E> {}

impl<T, E> fmt::Debug for Cursor<'_, '_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.generator.as_deref() {
            Some(generator) => f.debug_tuple("Cursor").field(generator).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}
