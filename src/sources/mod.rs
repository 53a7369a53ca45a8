//! Ready-made generators.
//!
//! Each constructor returns a [`Generator`] whose producer body is written
//! with the same `co.yield_(..).await` protocol user code uses.

use std::iter;
use std::mem;
use std::ops::Range;

use crate::generator::Generator;

/// A generator over the numbers in a range
pub fn range(range: Range<i64>) -> Generator<'static, i64> {
    from_iter(range)
}

/// A generator that yields every item of an iterator, in order
pub fn from_iter<'a, I>(items: I) -> Generator<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    let items = items.into_iter();
    Generator::new(move |co| async move {
        for item in items {
            co.yield_(item).await;
        }
        Ok(())
    })
}

/// A generator that yields the items of a vector
pub fn from_vec<'a, T: 'a>(items: Vec<T>) -> Generator<'a, T> {
    from_iter(items)
}

/// A generator that repeats a value indefinitely
pub fn repeat<'a, T: Clone + 'a>(value: T) -> Generator<'a, T> {
    from_iter(iter::repeat(value))
}

/// A generator that repeats a value `count` times
pub fn repeat_n<'a, T: Clone + 'a>(value: T, count: usize) -> Generator<'a, T> {
    Generator::new(move |co| async move {
        for _ in 0..count {
            co.yield_(value.clone()).await;
        }
        Ok(())
    })
}

/// A generator of fibonacci numbers, ending at the largest one a `u64` holds
pub fn fibonacci() -> Generator<'static, u64> {
    Generator::new(|co| async move {
        let mut a: u64 = 0;
        let mut b = Some(1u64);
        while let Some(next) = b {
            co.yield_(a).await;
            b = a.checked_add(next);
            a = next;
        }
        co.yield_(a).await;
        Ok(())
    })
}

/// The first `limit` fibonacci numbers
pub fn fibonacci_limit(limit: usize) -> Generator<'static, u64> {
    let all = fibonacci();
    Generator::new(move |co| async move {
        let mut all = all;
        for _ in 0..limit {
            match all.next() {
                Some(Ok(n)) => co.yield_(n).await,
                Some(Err(error)) => return Err(error),
                None => break,
            }
        }
        Ok(())
    })
}

/// A generator that yields a single value
pub fn once<'a, T: 'a>(value: T) -> Generator<'a, T> {
    Generator::new(move |co| async move {
        co.yield_(value).await;
        Ok(())
    })
}

/// A generator that finishes without yielding
pub fn empty<'a, T: 'a>() -> Generator<'a, T> {
    Generator::new(|_co| async { Ok(()) })
}

/// A generator that fails before yielding anything
pub fn fail<'a, T: 'a, E: 'a>(error: E) -> Generator<'a, T, E> {
    Generator::new(move |_co| async move { Err(error) })
}

/// Group the items of another generator into vectors of `chunk_size`.
///
/// The last chunk may be shorter. A failure from `inner` is passed through
/// once the items before it have been chunked; a partial chunk in progress
/// at that point is dropped.
///
/// # Panics
///
/// Panics if `chunk_size` is zero.
pub fn chunked<'a, T: 'a, E: 'a>(
    inner: Generator<'a, T, E>,
    chunk_size: usize,
) -> Generator<'a, Vec<T>, E> {
    assert!(chunk_size > 0, "chunk size must be non-zero");
    Generator::new(move |co| async move {
        let mut buffer = Vec::with_capacity(chunk_size);
        for item in inner {
            match item {
                Ok(item) => buffer.push(item),
                Err(error) => return Err(error),
            }
            if buffer.len() == chunk_size {
                let chunk = mem::replace(&mut buffer, Vec::with_capacity(chunk_size));
                co.yield_(chunk).await;
            }
        }
        if !buffer.is_empty() {
            co.yield_(buffer).await;
        }
        Ok(())
    })
}

/// Yield the items of every generator in turn, round-robin, until all of
/// them are exhausted. The first failure ends the merged generator.
pub fn merge<'a, T: 'a, E: 'a>(generators: Vec<Generator<'a, T, E>>) -> Generator<'a, T, E> {
    Generator::new(move |co| async move {
        let mut active = generators;
        while !active.is_empty() {
            let mut index = 0;
            while index < active.len() {
                match active[index].next() {
                    Some(Ok(item)) => {
                        co.yield_(item).await;
                        index += 1;
                    }
                    Some(Err(error)) => return Err(error),
                    None => {
                        // drop the exhausted producer right away
                        active.remove(index);
                    }
                }
            }
        }
        Ok(())
    })
}
