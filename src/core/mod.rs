//! Core machinery shared by both generator flavours.
//!
//! This module contains the producer-side protocol (the yield handle and
//! the single-value slot) and the pull-based [`Source`] trait.

pub(crate) mod frame;
pub mod state;
pub mod traits;
pub mod yielder;

// Re-export core items
pub use state::{ProducerState, Status};
pub use traits::Source;
pub use yielder::{Co, Yield};
