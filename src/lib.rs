//! Property-based testing over an explicit byte-sequence choice
//! representation, with automatic shrinking.
//!
//! Where conventional unit tests assert specific examples, this crate
//! lets you state an invariant and a generator, and it searches for an
//! input that falsifies it. When it finds one, it automatically reduces
//! that input to a smaller one that still fails, before reporting it.
//!
//! ### Why a byte sequence
//!
//! Every value a generator produces — booleans, integers, vectors,
//! recursive structures — is decoded from one growable buffer of bytes
//! (see [`choice`]). Shrinking never needs to know anything about the
//! generator that produced a value: it edits the bytes (toward zero,
//! toward a shorter buffer, toward a smaller integer) and re-runs the
//! same generator to see whether the edited bytes still reproduce the
//! failure.
//!
//! ### Example
//!
//! ```rust
//! use choicetest::*;
//! use choicetest::generators::*;
//!
//! #[test]
//! fn reversing_a_vector_twice_is_identity() {
//!     property(vector_of(booleans())).check(|l: Vec<bool>| {
//!         let rev = l.iter().cloned().rev().collect::<Vec<_>>();
//!         let rev2 = rev.into_iter().rev().collect::<Vec<_>>();
//!         rev2 == l
//!     })
//! }
//! ```
//!
//! Another common use is verifying a value round-trips through encoding
//! and decoding, or that a recursive structure satisfies some invariant
//! regardless of how deep it nests (see [`generators::lazy`]).

#![deny(warnings)]
#![warn(missing_docs)]

#[cfg(test)]
extern crate env_logger;
extern crate hex_slice;
extern crate log;
extern crate rand;
extern crate thiserror;

pub mod choice;
pub mod error;
pub mod generators;
mod properties;
mod replay;
mod runner;
mod search;

pub use crate::properties::{property, CheckConfig, Property};
pub use crate::runner::CheckOutcome;
