//! Harvesting named bindings out of the minimal counterexample.
//!
//! Once the shrinker has reduced a counterexample to a fixed point, the
//! runner replays the predicate against it one final time with a
//! [`ReplayRecord`] attached to the [`Context`](crate::choice::Context).
//! Every top-level draw made through `named(...)` pushes its rendered
//! value here, so the final failure report can show the user what each
//! generator actually produced, not just the raw bytes.

use std::fmt;

/// The named `(name, value)` bindings collected from one replay run, in
/// the order their generators drew them.
#[derive(Debug, Default, Clone)]
pub struct ReplayRecord {
    bindings: Vec<(String, String)>,
}

impl ReplayRecord {
    /// An empty record, ready to be passed to a replay-mode `Context`.
    pub fn new() -> Self {
        ReplayRecord { bindings: Vec::new() }
    }

    pub(crate) fn push(&mut self, name: String, rendered: String) {
        self.bindings.push((name, rendered));
    }

    /// The bindings harvested so far, in draw order.
    pub fn bindings(&self) -> &[(String, String)] {
        &self.bindings
    }

    /// True if no named draws occurred during the replay run.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Display for ReplayRecord {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (name, value) in &self.bindings {
            writeln!(fmt, "  {} = {}", name, value)?;
        }
        Ok(())
    }
}
