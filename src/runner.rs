//! Runs one predicate invocation against a [`ChoiceSequence`], folding
//! panics and explicit failures into a single "this sequence is a
//! counterexample" outcome.
//!
//! The predicate runs behind [`std::panic::catch_unwind`] with the
//! default panic hook silenced for the call, since a failing example
//! panics once during search and potentially dozens more times during
//! shrinking — printing each one would bury the final report. The
//! engine never downcasts or inspects the panic payload: a panic is
//! exactly as informative as a `false` return, nothing more.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::choice::{ChoiceSequence, Context, DataError};
use crate::generators::Generator;
use crate::replay::ReplayRecord;

/// What happened when a predicate ran once against a sequence.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RunOutcome {
    /// The predicate held.
    Passed,
    /// The predicate was falsified, by an explicit `false`/`Err` return
    /// or by a panic — the engine treats both identically.
    Failed,
    /// The sequence ran out of fixed bytes. Only possible when replaying
    /// a shrink candidate; never during discovery, where the sequence
    /// grows on demand.
    Overrun,
    /// A generator rejected this attempt (`filter`/`filter_map`). Not a
    /// counterexample and not a pass — the caller should retry with a
    /// fresh sequence.
    Skipped,
}

/// Converts a predicate's return value into pass/fail. Implemented for
/// the three conventions this crate's tests are written with: a plain
/// `bool`, a bare `()` (for predicates that only ever `assert!`), and
/// `Result<(), E>` for predicates that use `?`.
pub trait CheckOutcome {
    /// True if this return value represents a falsified predicate.
    fn is_failure(&self) -> bool;
}

impl CheckOutcome for bool {
    fn is_failure(&self) -> bool {
        !self
    }
}

impl CheckOutcome for () {
    fn is_failure(&self) -> bool {
        false
    }
}

impl<E: fmt::Debug> CheckOutcome for Result<(), E> {
    fn is_failure(&self) -> bool {
        self.is_err()
    }
}

/// Runs `predicate` once against a freshly drawn (or replayed) value from
/// `gen`, using `seq` as the byte source.
///
/// Clears any intervals already recorded on `seq` — the previous run's
/// intervals describe a different draw — then draws the value as a
/// single top-level call (so the whole run occupies exactly one interval
/// unless the generator itself opens named sub-intervals), runs the
/// predicate, and reports the outcome. Returns the sequence back to the
/// caller, since generation-mode runs grow the buffer and shrink/replay
/// callers need the post-run cursor position.
pub fn run_once<G, F, T>(seq: ChoiceSequence, gen: &G, predicate: &F) -> (ChoiceSequence, RunOutcome)
where
    G: Generator,
    G::Item: fmt::Debug,
    F: Fn(G::Item) -> T,
    T: CheckOutcome,
{
    let mut seq = seq.clear_intervals();
    let outcome = {
        let seq_ref = &mut seq;
        with_silenced_panic_hook(|| {
            panic::catch_unwind(AssertUnwindSafe(|| {
                let mut ctx = Context::new(seq_ref, None);
                let val = ctx.draw_named(None, gen)?;
                Ok(predicate(val))
            }))
        })
    };
    (seq, classify(outcome))
}

/// Re-runs `predicate` against the exact bytes in `seq`, with a
/// [`ReplayRecord`] attached, to harvest the named `(name, value)`
/// bindings a `named(...)`-wrapped generator recorded along the way.
///
/// Used once, after shrinking has found a locally minimal counterexample,
/// to build the diagnostic payload for the final failure report.
pub fn run_replay<G, F, T>(seq: &ChoiceSequence, gen: &G, predicate: &F) -> (RunOutcome, ReplayRecord)
where
    G: Generator,
    G::Item: fmt::Debug,
    F: Fn(G::Item) -> T,
    T: CheckOutcome,
{
    let mut working = seq.rewind();
    let mut record = ReplayRecord::new();
    let outcome = {
        let seq_ref = &mut working;
        let record_ref = &mut record;
        with_silenced_panic_hook(|| {
            panic::catch_unwind(AssertUnwindSafe(|| {
                let mut ctx = Context::new(seq_ref, Some(record_ref));
                let val = ctx.draw_named(None, gen)?;
                Ok(predicate(val))
            }))
        })
    };
    (classify(outcome), record)
}

fn classify<T: CheckOutcome>(
    result: std::thread::Result<Result<T, DataError>>,
) -> RunOutcome {
    match result {
        Ok(Ok(outcome)) => {
            if outcome.is_failure() {
                RunOutcome::Failed
            } else {
                RunOutcome::Passed
            }
        }
        Ok(Err(DataError::Overrun)) => RunOutcome::Overrun,
        Ok(Err(DataError::SkipItem)) => RunOutcome::Skipped,
        Err(_panic_payload) => RunOutcome::Failed,
    }
}

fn with_silenced_panic_hook<R>(f: impl FnOnce() -> R) -> R {
    let prev_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = f();
    panic::set_hook(prev_hook);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::numbers::u8s;

    #[test]
    fn passing_predicate_reports_passed() {
        let seq = ChoiceSequence::for_generation(16);
        let (_, outcome) = run_once(seq, &u8s(), &|_v: u8| true);
        assert_eq!(outcome, RunOutcome::Passed);
    }

    #[test]
    fn false_return_reports_failed() {
        let seq = ChoiceSequence::for_generation(16);
        let (_, outcome) = run_once(seq, &u8s(), &|_v: u8| false);
        assert_eq!(outcome, RunOutcome::Failed);
    }

    #[test]
    fn panicking_predicate_reports_failed_without_propagating() {
        let seq = ChoiceSequence::for_generation(16);
        let (_, outcome) = run_once(seq, &u8s(), &|v: u8| {
            assert_ne!(v, v, "always fails");
            true
        });
        assert_eq!(outcome, RunOutcome::Failed);
    }

    #[test]
    fn overrun_is_reported_distinctly_during_replay() {
        let seq = ChoiceSequence::for_replay(vec![]);
        let (_, outcome) = run_once(seq, &u8s(), &|_v: u8| true);
        assert_eq!(outcome, RunOutcome::Overrun);
    }

    #[test]
    fn replay_harvests_named_bindings() {
        use crate::generators::core::Generator;
        let seq = ChoiceSequence::for_replay(vec![5]);
        let gen = u8s().named("n");
        let (outcome, record) = run_replay(&seq, &gen, &|_v: u8| true);
        assert_eq!(outcome, RunOutcome::Passed);
        assert_eq!(record.bindings(), &[("n".to_string(), "5".to_string())]);
    }
}
