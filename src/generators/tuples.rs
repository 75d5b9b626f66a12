//! Tuple generators. A tuple generator draws each component in order,
//! nested (no interval of its own) inside whatever interval the
//! enclosing top-level draw opened — this is how multi-argument
//! predicates are expressed without a dedicated product type.
//!
//! Capped at 6 components; a predicate needing more should group related
//! fields into a named struct generator instead.

use crate::choice::Context;
use crate::generators::core::{Generator, Maybe};

macro_rules! tuple_generator_impl {
    ($($gen:ident: $var:ident: $ty:ident),+) => {
        impl<$($ty: Generator),+> Generator for ($($ty,)+) {
            type Item = ($($ty::Item,)+);
            fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
                let ($(ref $gen,)+) = *self;
                $(let $var = ctx.draw($gen)?;)+
                Ok(($($var,)+))
            }
        }
    };
}

tuple_generator_impl!(ga: a: A, gb: b: B);
tuple_generator_impl!(ga: a: A, gb: b: B, gc: c: C);
tuple_generator_impl!(ga: a: A, gb: b: B, gc: c: C, gd: d: D);
tuple_generator_impl!(ga: a: A, gb: b: B, gc: c: C, gd: d: D, ge: e: E);
tuple_generator_impl!(ga: a: A, gb: b: B, gc: c: C, gd: d: D, ge: e: E, gf: f: F);

/// Draws `(a, b)` in order.
pub fn tuple2<A: Generator, B: Generator>(a: A, b: B) -> (A, B) {
    (a, b)
}

/// Draws `(a, b, c)` in order.
pub fn tuple3<A: Generator, B: Generator, C: Generator>(a: A, b: B, c: C) -> (A, B, C) {
    (a, b, c)
}

/// Draws `(a, b, c, d)` in order.
pub fn tuple4<A: Generator, B: Generator, C: Generator, D: Generator>(a: A, b: B, c: C, d: D) -> (A, B, C, D) {
    (a, b, c, d)
}

/// Draws `(a, b, c, d, e)` in order.
pub fn tuple5<A: Generator, B: Generator, C: Generator, D: Generator, E: Generator>(
    a: A,
    b: B,
    c: C,
    d: D,
    e: E,
) -> (A, B, C, D, E) {
    (a, b, c, d, e)
}

/// Draws `(a, b, c, d, e, f)` in order.
pub fn tuple6<A: Generator, B: Generator, C: Generator, D: Generator, E: Generator, F: Generator>(
    a: A,
    b: B,
    c: C,
    d: D,
    e: E,
    f: F,
) -> (A, B, C, D, E, F) {
    (a, b, c, d, e, f)
}
