//! The single-value slot shared by a producer body and its driver.
//!
//! A generator resumes its producer, and whatever the producer did before
//! suspending again (yield a value, return, or fail) is recorded here. The
//! slot holds at most one of those outcomes at a time; each new outcome
//! replaces the previous one.

use std::mem;

use crate::core::frame::Step;
use crate::tracing_support::{count_event, trace_event};

/// What the producer left behind at its most recent suspend point.
#[derive(Debug)]
pub(crate) enum Slot<T, E> {
    /// Nothing pending: not driven yet, or the last value was moved out
    Empty,
    /// The producer yielded a value and is suspended after it
    Value(T),
    /// The producer failed; the failure waits to be observed
    Failed(E),
    /// The failure was handed out; finishes on the next resumption
    FailureTaken,
    /// The producer returned, or was resumed past its failure
    Finished,
}

/// Externally visible phase of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// No producer code has run yet
    NotStarted,
    /// A value is waiting to be read
    Yielded,
    /// Suspended after a yield whose value was already moved out
    Suspended,
    /// The producer failed and the consumer has not moved past it yet
    Failed,
    /// No more values will be produced
    Finished,
}

/// Suspend/resume bookkeeping for one producer computation.
///
/// Owned by exactly one generator. The producer body never touches it
/// directly; the driver records each outcome after the body suspends.
#[derive(Debug)]
pub struct ProducerState<T, E> {
    slot: Slot<T, E>,
    started: bool,
}

impl<T, E> ProducerState<T, E> {
    /// A fresh state for a producer that has not started.
    pub(crate) fn new() -> Self {
        Self {
            slot: Slot::Empty,
            started: false,
        }
    }

    /// Record that the producer is about to run for the first time.
    ///
    /// Returns false if it had already been started.
    pub(crate) fn on_start(&mut self) -> bool {
        !mem::replace(&mut self.started, true)
    }

    /// Store a freshly yielded value, discarding whatever was there.
    pub(crate) fn on_yield(&mut self, value: T) {
        self.slot = Slot::Value(value);
    }

    /// Mark the producer as returned.
    pub(crate) fn on_finish(&mut self) {
        self.slot = Slot::Finished;
    }

    /// Capture a failure raised by the producer body.
    pub(crate) fn on_failure(&mut self, error: E) {
        self.slot = Slot::Failed(error);
    }

    /// Record the outcome of one resumption of the producer body.
    pub(crate) fn record(&mut self, step: Step<T, E>, name: &str) {
        match step {
            Step::Yielded(value) => {
                trace_event!(generator = name, "producer yielded");
                count_event!("lazyseq.yields", name);
                self.on_yield(value);
            }
            Step::Returned => {
                trace_event!(generator = name, "producer finished");
                count_event!("lazyseq.completions", name);
                self.on_finish();
            }
            Step::Failed(error) => {
                trace_event!(generator = name, "producer failed; failure captured");
                count_event!("lazyseq.failures", name);
                self.on_failure(error);
            }
        }
    }

    /// The captured failure, if any. Does not clear it.
    pub fn failure(&self) -> Option<&E> {
        match &self.slot {
            Slot::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// The current value, if the producer is suspended after a yield.
    pub fn value(&self) -> Option<&T> {
        match &self.slot {
            Slot::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Mutable access to the current value.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match &mut self.slot {
            Slot::Value(v) => Some(v),
            _ => None,
        }
    }

    /// True once the producer returned, or was resumed past its failure.
    pub fn is_finished(&self) -> bool {
        matches!(self.slot, Slot::Finished)
    }

    pub fn status(&self) -> Status {
        match self.slot {
            Slot::Empty if !self.started => Status::NotStarted,
            Slot::Empty => Status::Suspended,
            Slot::Value(_) => Status::Yielded,
            Slot::Failed(_) | Slot::FailureTaken => Status::Failed,
            Slot::Finished => Status::Finished,
        }
    }

    /// Move the captured failure out. The slot only reads as finished after
    /// the next resumption.
    pub(crate) fn take_failure(&mut self) -> Option<E> {
        match mem::replace(&mut self.slot, Slot::FailureTaken) {
            Slot::Failed(e) => Some(e),
            other => {
                self.slot = other;
                None
            }
        }
    }

    /// Read the current item through a cursor.
    ///
    /// A captured failure is moved out and returned exactly once.
    ///
    /// # Panics
    ///
    /// Panics if the failure was already returned, or if there is no
    /// current item.
    pub(crate) fn read_current(&mut self) -> Result<&mut T, E> {
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        match &mut self.slot {
            Slot::Value(value) => Ok(value),
            Slot::FailureTaken => {
                panic!("cursor has no current item; its failure was already taken")
            }
            _ => panic!("cursor has no current item"),
        }
    }

    /// Move whatever outcome is pending out of the slot.
    ///
    /// A taken value leaves the slot empty and a taken failure leaves it
    /// marked as taken; a finish stays finished.
    pub(crate) fn take(&mut self) -> Slot<T, E> {
        match mem::replace(&mut self.slot, Slot::Empty) {
            Slot::Failed(e) => {
                self.slot = Slot::FailureTaken;
                Slot::Failed(e)
            }
            Slot::Finished => {
                self.slot = Slot::Finished;
                Slot::Finished
            }
            Slot::FailureTaken => {
                self.slot = Slot::FailureTaken;
                Slot::Empty
            }
            other => other,
        }
    }
}
