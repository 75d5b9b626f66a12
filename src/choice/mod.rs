//! The byte-sequence choice representation at the core of this crate:
//! [`sequence`] holds the buffer generators draw from, [`context`] is the
//! ambient state threaded through a generator call, and [`shrink`] reduces
//! a counterexample sequence toward a minimal one.

pub mod context;
pub mod sequence;
pub mod shrink;

pub use self::context::Context;
pub use self::sequence::{ChoiceSequence, DataError, Interval};
