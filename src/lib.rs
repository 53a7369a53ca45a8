//! # Lazy, pull-based generators for Rust
//!
//! This crate turns a suspendable producer body into a lazy sequence that
//! the consumer drives one item at a time.
//!
//! ## Core Concepts
//!
//! - **Producer body**: an `async` block that hands values out with
//!   `co.yield_(value).await` and finishes by returning `Ok(())` or failing
//!   with `Err(..)`
//! - **Generator**: owns the suspended body; nothing runs until it is pulled
//! - **Cursor**: single-pass traversal; advancing resumes the body,
//!   reading returns the current item or the captured failure
//! - **AsyncGenerator**: the same model driven from an async task, for
//!   bodies that await I/O between yields
//!
//! At most one produced item exists at a time; the body never runs ahead of
//! the consumer. A failure is captured when it happens and handed out when
//! the consumer next reads. Dropping a generator tears its body down on the
//! spot, whether or not it was exhausted.
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! fn countdown(from: u32) -> Generator<'static, u32> {
//!     Generator::new(move |co| async move {
//!         for n in (1..=from).rev() {
//!             co.yield_(n).await;
//!         }
//!         Ok(())
//!     })
//! }
//!
//! let mut launch = countdown(3);
//! let mut cursor = launch.begin();
//! let mut seen = Vec::new();
//! while cursor != Generator::end() {
//!     seen.push(*cursor.get().unwrap());
//!     cursor.advance();
//! }
//! assert_eq!(seen, vec![3, 2, 1]);
//! ```

pub mod async_generator;
pub mod config;
pub mod core;
pub mod error;
pub mod generator;
pub mod sources;

mod tracing_support;

// Re-export commonly used items
pub mod prelude {
    pub use crate::async_generator::{AsyncCursor, AsyncGenerator};
    pub use crate::config::{GeneratorBuilder, GeneratorConfig};
    pub use crate::core::{Co, Source, Status};
    pub use crate::error::{Error, Result};
    pub use crate::generator::{Cursor, Generator};
    pub use crate::sources;
}

// Re-export main types
pub use async_generator::AsyncGenerator;
pub use error::{Error, Result};
pub use generator::Generator;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
