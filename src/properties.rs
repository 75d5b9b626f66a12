//! The crate-native harness surface: `property(gen).check(predicate)`,
//! meant to be called directly from a `#[test]` function body.

use std::env;
use std::fmt;

use crate::choice::shrink::shrink;
use crate::error::CheckFailure;
use crate::generators::Generator;
use crate::replay::ReplayRecord;
use crate::runner::{run_once, run_replay, CheckOutcome, RunOutcome};
use crate::search::search_for_counterexample;

const NUM_TESTS: usize = 100;
const MAX_SHRINKS: usize = 200;
const DEFAULT_POOL_SIZE: usize = 1024;

/// Knobs governing one `Property::check` run: how many examples to try,
/// how many shrink candidates to evaluate, and how large a fresh
/// sequence starts out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    num_tests: usize,
    max_shrinks: usize,
    initial_pool_size: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig { num_tests: NUM_TESTS, max_shrinks: MAX_SHRINKS, initial_pool_size: DEFAULT_POOL_SIZE }
    }
}

impl CheckConfig {
    /// The default configuration, ignoring environment overrides. See
    /// [`from_env`](#method.from_env) for the `#[test]`-friendly entry point.
    pub fn new() -> Self {
        CheckConfig::default()
    }

    /// Builds a configuration from [`CheckConfig::default`], applying the
    /// `CHOICETEST_CASES` and `CHOICETEST_MAX_SHRINKS` environment
    /// variables if they are set. A value that fails to parse as a
    /// `usize` is warned about on stderr and ignored, leaving the default
    /// in place — the same policy `proptest` applies to its own
    /// environment overrides.
    pub fn from_env() -> Self {
        let mut config = CheckConfig::default();
        if let Some(n) = env_usize("CHOICETEST_CASES") {
            config.num_tests = n;
        }
        if let Some(n) = env_usize("CHOICETEST_MAX_SHRINKS") {
            config.max_shrinks = n;
        }
        config
    }

    /// How many examples the search loop will try before giving up.
    pub fn num_tests(mut self, n: usize) -> Self {
        self.num_tests = n;
        self
    }

    /// How many shrink candidates the shrinker may evaluate in total.
    pub fn max_shrinks(mut self, n: usize) -> Self {
        self.max_shrinks = n;
        self
    }

    /// How many bytes of capacity a fresh sequence starts with. Purely an
    /// allocation hint — generation still grows the buffer past this on
    /// demand.
    pub fn initial_pool_size(mut self, n: usize) -> Self {
        self.initial_pool_size = n;
        self
    }
}

fn env_usize(name: &str) -> Option<usize> {
    match env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(n) => Some(n),
            Err(_) => {
                eprintln!("{}: could not parse {:?} as a number, ignoring", name, raw);
                None
            }
        },
        Err(_) => None,
    }
}

/// A generator paired with the configuration to check it against. Built
/// with [`property`](fn.property.html).
pub struct Property<G> {
    gen: G,
    config: CheckConfig,
}

/// The main entry point: wraps `gen` so a predicate can be checked
/// against it with [`Property::check`](struct.Property.html#method.check).
pub fn property<G: Generator>(gen: G) -> Property<G> {
    Property { gen, config: CheckConfig::from_env() }
}

impl<G: Generator> Property<G>
where
    G::Item: fmt::Debug,
{
    /// Overrides the default configuration (itself `CheckConfig::from_env()`)
    /// for this property.
    pub fn with_config(mut self, config: CheckConfig) -> Self {
        self.config = config;
        self
    }

    /// Searches for a value that falsifies `predicate`, shrinks it to a
    /// local minimum, and panics with the minimal named bindings if one
    /// is found. `predicate` may return `bool`, `()` (asserting
    /// internally), or `Result<(), E>`.
    pub fn check<F, T>(self, predicate: F)
    where
        F: Fn(G::Item) -> T,
        T: CheckOutcome,
    {
        let Property { gen, config } = self;

        let found = search_for_counterexample(&gen, &predicate, config.num_tests, config.initial_pool_size);
        let counterexample = match found.counterexample {
            Some(seq) => seq,
            None => return,
        };

        let mut shrinks_run = 0;
        let minimal = shrink(counterexample, config.max_shrinks, |candidate| {
            shrinks_run += 1;
            let (ran, outcome) = run_once(candidate, &gen, &predicate);
            match outcome {
                RunOutcome::Failed => Some(ran.rewind().clear_intervals()),
                RunOutcome::Passed | RunOutcome::Overrun | RunOutcome::Skipped => None,
            }
        });

        let (_outcome, record) = run_replay(&minimal, &gen, &predicate);
        panic!(
            "{}",
            CheckFailure::Counterexample {
                examples_run: found.examples_run,
                shrinks_run,
                bindings: render_bindings(&record),
            }
        );
    }
}

fn render_bindings(record: &ReplayRecord) -> String {
    if record.is_empty() {
        "  (no named generators)\n".to_string()
    } else {
        record.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::numbers::unsigned;

    #[test]
    fn a_true_predicate_never_panics() {
        let gen = unsigned(0u32, 100u32).expect("valid range");
        property(gen).with_config(CheckConfig::new().num_tests(50)).check(|v| v <= 100);
    }

    #[test]
    #[should_panic(expected = "Found counterexample")]
    fn a_falsifiable_predicate_panics_with_a_report() {
        let gen = unsigned(0u32, 100u32).expect("valid range");
        property(gen).with_config(CheckConfig::new().num_tests(50)).check(|v| v < 5);
    }

    #[test]
    #[should_panic(expected = "i")]
    fn minimal_counterexample_names_the_offending_value() {
        let gen = unsigned(0u32, 1000u32).expect("valid range").named("i");
        property(gen).with_config(CheckConfig::new().num_tests(200).max_shrinks(500)).check(|v| v < 1);
    }

    #[test]
    fn result_returning_predicates_are_supported() {
        let gen = unsigned(0u32, 10u32).expect("valid range");
        property(gen).with_config(CheckConfig::new().num_tests(20)).check(|v| -> Result<(), String> {
            if v <= 10 {
                Ok(())
            } else {
                Err(format!("{} out of range", v))
            }
        });
    }
}
