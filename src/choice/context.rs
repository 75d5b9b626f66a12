//! The ambient state a generator sees while it runs: the
//! [`ChoiceSequence`](../sequence/struct.ChoiceSequence.html) it draws
//! bytes from, and — only while replaying a minimal counterexample — the
//! [`ReplayRecord`](../../replay/struct.ReplayRecord.html) that harvests
//! named bindings for the failure report.
//!
//! `Context` is threaded explicitly through [`Generator::generate`], not
//! hidden behind thread-local state, so two tests running on two threads
//! never share one choice sequence.

use super::sequence::{ChoiceSequence, DataError};
use crate::generators::Generator;
use crate::replay::ReplayRecord;

/// Ambient state passed to every [`Generator::generate`] call.
pub struct Context<'a> {
    seq: &'a mut ChoiceSequence,
    replay: Option<&'a mut ReplayRecord>,
}

impl<'a> Context<'a> {
    /// Wraps a sequence (and, during replay, a record to harvest named
    /// bindings into) as ambient state for one predicate invocation.
    pub fn new(seq: &'a mut ChoiceSequence, replay: Option<&'a mut ReplayRecord>) -> Self {
        Context { seq, replay }
    }

    /// Draws a single raw byte. Leaf generators (bool, integers) use this
    /// directly; it never records an interval on its own.
    pub fn draw_u8(&mut self) -> Result<u8, DataError> {
        self.seq.draw_u8()
    }

    /// Draws `n` raw bytes. Never records an interval on its own.
    pub fn draw_bytes(&mut self, n: usize) -> Result<Vec<u8>, DataError> {
        self.seq.draw_bytes(n)
    }

    /// Runs a nested generator without opening a new interval: its bytes
    /// fold into whichever enclosing top-level draw is in progress. This
    /// is how composite generators (lists, tuples, `map`/`filter`) invoke
    /// their element generators.
    pub fn draw<G: Generator + ?Sized>(&mut self, gen: &G) -> Result<G::Item, DataError> {
        gen.generate(self)
    }

    /// Runs a generator as a top-level draw: the bytes it (and everything
    /// nested inside it) consumes become one interval, and — if `name` is
    /// given and a replay record is active — the resulting value is
    /// recorded as a named binding for the failure report.
    pub fn draw_named<G: Generator + ?Sized>(
        &mut self,
        name: Option<&str>,
        gen: &G,
    ) -> Result<G::Item, DataError>
    where
        G::Item: std::fmt::Debug,
    {
        let start = self.seq.cursor();
        let val = gen.generate(self)?;
        self.seq.record_interval(start);
        if let (Some(name), Some(replay)) = (name, self.replay.as_mut()) {
            replay.push(name.to_string(), format!("{:?}", val));
        }
        Ok(val)
    }

    /// True while this context is harvesting named bindings (i.e. during
    /// the replay driver's final run), false during ordinary discovery
    /// and shrinking.
    pub fn is_replaying(&self) -> bool {
        self.replay.is_some()
    }
}
