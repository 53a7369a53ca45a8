//! Generator configuration and builder.

use std::borrow::Cow;
use std::future::Future;

use crate::async_generator::AsyncGenerator;
use crate::core::Co;
use crate::generator::Generator;

/// Configuration shared by [`Generator`] and [`AsyncGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Label attached to trace events and metrics for this generator
    pub name: Cow<'static, str>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("generator"),
        }
    }
}

/// Builder for configured generators.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut squares: Generator<'_, u32> = GeneratorBuilder::new()
///     .name("squares")
///     .build(|co| async move {
///         for i in 1..=3u32 {
///             co.yield_(i * i).await;
///         }
///         Ok(())
///     });
///
/// assert_eq!(squares.config().name, "squares");
/// assert_eq!(squares.by_ref().collect::<Result<Vec<_>>>().unwrap(), vec![1, 4, 9]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name used in trace events and metric labels
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Instantiate a synchronous generator. The body does not run yet.
    pub fn build<'a, T, E, P, F>(self, producer: P) -> Generator<'a, T, E>
    where
        P: FnOnce(Co<T>) -> F,
        F: Future<Output = Result<(), E>> + 'a,
    {
        Generator::with_config(self.config, producer)
    }

    /// Instantiate an asynchronous generator. The body does not run yet.
    pub fn build_async<'a, T, E, P, F>(self, producer: P) -> AsyncGenerator<'a, T, E>
    where
        P: FnOnce(Co<T>) -> F,
        F: Future<Output = Result<(), E>> + 'a,
    {
        AsyncGenerator::with_config(self.config, producer)
    }
}
