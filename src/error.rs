//! User-facing error types. Everything here is raised synchronously to
//! the caller — never caught by the runner, unlike the internal
//! [`DataError`](crate::choice::DataError) that flows through generator
//! draws.

use thiserror::Error;

/// Raised by a fallible generator *constructor* when its parameters
/// cannot describe any value — e.g. an empty integer range, or a
/// `one_of!` with more arms than a single byte can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `min` was not strictly less than `max`.
    #[error("invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange {
        /// The lower bound that was supplied.
        min: i128,
        /// The upper bound that was supplied.
        max: i128,
    },
    /// A `one_of!` (or [`one_of`](crate::generators::core::one_of)) call
    /// was given more alternatives than a single drawn byte can select
    /// among.
    #[error("one_of supports at most 256 choices, got {count}")]
    TooManyChoices {
        /// The number of alternatives that were supplied.
        count: usize,
    },
}

/// The summary used to format the final `panic!` once a check has found
/// and minimized a counterexample, or given up because a filter rejected
/// too many attempts.
#[derive(Debug, Error)]
pub enum CheckFailure {
    /// The predicate failed on a (locally) minimal input.
    #[error("Found counterexample after {examples_run} example(s), {shrinks_run} shrink attempt(s):\n{bindings}")]
    Counterexample {
        /// How many examples the search loop ran before finding this one.
        examples_run: usize,
        /// How many shrink candidates were evaluated.
        shrinks_run: usize,
        /// The rendered `name = value` bindings harvested by the replay driver.
        bindings: String,
    },
    /// `filter`/`filter_map` rejected attempts past the skip budget
    /// before `max_examples` valid examples could be found.
    #[error("gave up after {attempts} attempt(s): could not find {max_examples} example(s) satisfying every filter")]
    SkipBudgetExceeded {
        /// The total number of attempts (valid and skipped) that were made.
        attempts: usize,
        /// The configured example target that could not be reached.
        max_examples: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_message_names_both_bounds() {
        let err = ConfigError::InvalidRange { min: 5, max: 5 };
        assert_eq!(err.to_string(), "invalid range: min (5) must be less than max (5)");
    }

    #[test]
    fn too_many_choices_message_names_the_count() {
        let err = ConfigError::TooManyChoices { count: 300 };
        assert_eq!(err.to_string(), "one_of supports at most 256 choices, got 300");
    }
}
