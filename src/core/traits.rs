//! Pull-based consumer surface.
//!
//! [`Source`] is the async, object-friendly view of a lazy sequence: every
//! call to [`next`](Source::next) resumes the underlying producer by exactly
//! one step. [`AsyncGenerator`](crate::AsyncGenerator) implements it.

use async_trait::async_trait;

use crate::error::Result;

/// A source hands out items one at a time, on demand.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use lazyseq::core::Source;
/// use lazyseq::Result;
///
/// struct Countdown(u32);
///
/// #[async_trait(?Send)]
/// impl Source for Countdown {
///     type Item = u32;
///
///     async fn next(&mut self) -> Result<Option<Self::Item>> {
///         if self.0 == 0 {
///             return Ok(None);
///         }
///         self.0 -= 1;
///         Ok(Some(self.0))
///     }
/// }
/// ```
#[async_trait(?Send)]
pub trait Source {
    /// The type of items this source hands out
    type Item;

    /// Pull the next item, or `None` once the source is exhausted.
    ///
    /// A producer failure is returned once as `Err`; the source is exhausted
    /// afterwards.
    async fn next(&mut self) -> Result<Option<Self::Item>>;

    /// Pull up to `demand` items.
    ///
    /// Items are still pulled one at a time; a shorter Vec means the source
    /// ran dry. A failure discards the items gathered so far in this batch.
    async fn next_batch(&mut self, demand: usize) -> Result<Vec<Self::Item>> {
        let mut items = Vec::with_capacity(demand);
        while items.len() < demand {
            match self.next().await? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(items)
    }

    /// Drain the source into a Vec, stopping at the first failure.
    async fn collect_all(&mut self) -> Result<Vec<Self::Item>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        Ok(items)
    }
}
