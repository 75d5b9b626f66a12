extern crate choicetest;
#[cfg(test)]
extern crate env_logger;
#[macro_use]
extern crate log;

use choicetest::generators::*;
use choicetest::*;

#[test]
fn some_approximation_of_usage() {
    property(vector_of(booleans())).check(|l| {
        let rev = l.iter().cloned().rev().collect::<Vec<_>>();
        let rev2 = rev.into_iter().rev().collect::<Vec<_>>();
        rev2 == l
    })
}

// Reverses only the last three items, so this should fail for any input
// longer than three elements.
#[test]
#[should_panic(expected = "Found counterexample")]
fn some_approximation_of_failing_example() {
    env_logger::try_init().unwrap_or(());
    property(vector_of(booleans())).check(|l| {
        let rev = l.iter().cloned().rev().take(3).collect::<Vec<_>>();
        let rev2 = rev.into_iter().rev().collect::<Vec<_>>();
        info!("in:{:?}; out:{:?}; ok? {:?}", l, rev2, rev2 == l);
        rev2 == l
    })
}

#[test]
#[should_panic(expected = "Found counterexample")]
fn trivial_failure() {
    env_logger::try_init().unwrap_or(());
    property(booleans()).check(|_| false)
}

#[test]
fn trivial_pass() {
    property(booleans()).check(|_| true)
}

#[test]
#[should_panic(expected = "Found counterexample")]
fn value_dependent() {
    property(vector_of(booleans())).check(|v| !v.into_iter().any(|t| t))
}

#[test]
#[should_panic(expected = "Found counterexample")]
fn trivial_result_failure() {
    property(booleans()).check(|_| -> Result<(), ()> { Err(()) })
}

#[test]
fn trivial_result_pass() {
    property(booleans()).check(|_| -> Result<(), ()> { Ok(()) })
}

#[test]
#[should_panic(expected = "Found counterexample")]
fn trivial_panic_failure() {
    property(booleans()).check(|_| -> () { panic!("Big bad boom") })
}
