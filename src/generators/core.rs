//! The `Generator` trait and the combinators built on top of it: `map`,
//! `filter`, `flat_map`, `one_of`, `option_of`, `named`, `lazy`, and the
//! boxed-trait-object escape hatch for recursive generators.
//!
//! Every generator here is a pure function of a
//! [`Context`](../choice/context/struct.Context.html); none of them hold
//! any state of their own beyond the parameters baked in at construction.

use std::fmt;

use crate::choice::{Context, DataError};
use crate::error::ConfigError;

/// Convenience alias for the result of a generator draw.
pub type Maybe<T> = Result<T, DataError>;

/// Something that can produce a value of type `Item` from the ambient
/// [`Context`](../choice/context/struct.Context.html). Implementations
/// must consume bytes through `ctx` to stay deterministic: the same
/// bytes must always yield the same value.
pub trait Generator {
    /// The type of value this generator produces.
    type Item;

    /// Consumes zero or more bytes from `ctx` and produces a value.
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item>;

    /// Transforms every generated value through `f`.
    fn map<R, F: Fn(Self::Item) -> R>(self, f: F) -> Mapped<Self, F>
    where
        Self: Sized,
    {
        Mapped(self, f)
    }

    /// Rejects generated values for which `pred` returns false, signalling
    /// [`DataError::SkipItem`](../choice/sequence/enum.DataError.html) so
    /// the search loop tries again with a fresh sequence.
    fn filter<F: Fn(&Self::Item) -> bool>(self, pred: F) -> Filtered<Self, F>
    where
        Self: Sized,
    {
        Filtered(self, pred)
    }

    /// Like [`filter`](#method.filter) and [`map`](#method.map) combined:
    /// `f` may reject a value by returning `Err(DataError::SkipItem)`.
    fn filter_map<R, F: Fn(Self::Item) -> Maybe<R>>(self, f: F) -> FilterMapped<Self, F>
    where
        Self: Sized,
    {
        FilterMapped(self, f)
    }

    /// Builds a new generator from the value `self` produces, e.g. to draw
    /// a vector whose length was itself generated.
    fn flat_map<H: Generator, F: Fn(Self::Item) -> H>(self, f: F) -> FlatMapped<Self, F>
    where
        Self: Sized,
    {
        FlatMapped(self, f)
    }

    /// Wraps this generator so that wherever it is drawn — nested or not —
    /// it opens its own interval and, during replay, contributes a named
    /// binding to the failure report.
    fn named<S: Into<String>>(self, name: S) -> Named<Self>
    where
        Self: Sized,
        Self::Item: fmt::Debug,
    {
        Named { name: name.into(), gen: self }
    }

    /// Erases the concrete generator type behind a trait object, useful
    /// for recursive generators or heterogeneous collections of them.
    fn boxed(self) -> Box<dyn GeneratorObject<Item = Self::Item>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<'a, G: Generator + ?Sized> Generator for &'a G {
    type Item = G::Item;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        (**self).generate(ctx)
    }
}

/// Object-safe counterpart of [`Generator`], used so generators of
/// different concrete types but the same `Item` can be boxed together
/// (see [`one_of`](fn.one_of.html)).
pub trait GeneratorObject {
    /// The type of value this generator produces.
    type Item;
    /// Same contract as [`Generator::generate`](trait.Generator.html#tymethod.generate).
    fn generate_obj(&self, ctx: &mut Context) -> Maybe<Self::Item>;
}

impl<G: Generator> GeneratorObject for G {
    type Item = G::Item;
    fn generate_obj(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        self.generate(ctx)
    }
}

impl<T> Generator for Box<dyn GeneratorObject<Item = T>> {
    type Item = T;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        (**self).generate_obj(ctx)
    }
}

/// See [`booleans`](fn.booleans.html).
#[derive(Debug, Clone)]
pub struct BoolGenerator;

/// See [`weighted_coin`](fn.weighted_coin.html).
#[derive(Debug, Clone)]
pub struct WeightedCoinGenerator(f32);

/// See [`consts`](fn.consts.html).
#[derive(Debug, Clone)]
pub struct Const<V>(V);

/// See [`Generator::map`](trait.Generator.html#method.map).
#[derive(Debug, Clone)]
pub struct Mapped<G, F>(G, F);

/// See [`Generator::filter`](trait.Generator.html#method.filter).
#[derive(Debug, Clone)]
pub struct Filtered<G, F>(G, F);

/// See [`Generator::filter_map`](trait.Generator.html#method.filter_map).
#[derive(Debug, Clone)]
pub struct FilterMapped<G, F>(G, F);

/// See [`Generator::flat_map`](trait.Generator.html#method.flat_map).
#[derive(Debug, Clone)]
pub struct FlatMapped<G, F>(G, F);

/// See [`Generator::named`](trait.Generator.html#method.named).
#[derive(Debug, Clone)]
pub struct Named<G> {
    name: String,
    gen: G,
}

/// See [`lazy`](fn.lazy.html).
#[derive(Clone)]
pub struct Lazy<F>(F);

/// See [`option_of`](fn.option_of.html).
#[derive(Debug, Clone)]
pub struct OptionOf<G> {
    is_some: WeightedCoinGenerator,
    inner: G,
}

/// See [`one_of`](fn.one_of.html)/[`one_of!`](../macro.one_of.html).
pub struct OneOf<T> {
    choices: Vec<Box<dyn GeneratorObject<Item = T>>>,
}

impl<T> std::fmt::Debug for OneOf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OneOf")
            .field("choices", &self.choices.len())
            .finish()
    }
}

/// Generates `true` with 50% probability, `false` otherwise.
pub fn booleans() -> BoolGenerator {
    BoolGenerator
}

/// Generates `true` with probability `p` (`0.0..=1.0`), `false` otherwise.
pub fn weighted_coin(p: f32) -> WeightedCoinGenerator {
    WeightedCoinGenerator(p)
}

/// Always produces a clone of `val`, consuming no bytes.
pub fn consts<V: Clone>(val: V) -> Const<V> {
    Const(val)
}

/// Produces `thunk()` freshly on every draw. `thunk` should be pure and
/// cheap; this is the standard way to write a recursive generator, since
/// a generator referring to itself directly would not type-check.
pub fn lazy<F: Fn() -> G, G: Generator>(thunk: F) -> Lazy<F> {
    Lazy(thunk)
}

/// Draws `Some(inner_value)` a minority of the time, `None` the rest —
/// biased toward `None` (rather than an even 50/50 split) so that
/// shrinking toward `None` is the path of least resistance.
pub fn option_of<G: Generator>(inner: G) -> OptionOf<G> {
    OptionOf { is_some: weighted_coin(0.25), inner }
}

/// Chooses uniformly (or, when `choices.len()` is not a power of two,
/// with a slight bias toward earlier entries) among a fixed set of
/// same-`Item` generators. Prefer the [`one_of!`](../macro.one_of.html)
/// macro, which boxes its arguments for you.
///
/// Returns [`ConfigError::TooManyChoices`](../error/enum.ConfigError.html)
/// when given more than 256 alternatives, since a single drawn byte
/// cannot address more than that.
pub fn one_of<T>(choices: Vec<Box<dyn GeneratorObject<Item = T>>>) -> Result<OneOf<T>, ConfigError> {
    if choices.len() > 256 {
        return Err(ConfigError::TooManyChoices { count: choices.len() });
    }
    Ok(OneOf { choices })
}

/// Builds a [`OneOf`](struct.OneOf.html) generator from a list of
/// generator expressions, boxing each one.
///
/// ```ignore
/// let g = one_of![consts(0u8), consts(1u8), u8s(0, 255)?];
/// ```
#[macro_export]
macro_rules! one_of {
    ($($gen:expr),+ $(,)?) => {
        $crate::generators::core::one_of(vec![$(::std::boxed::Box::new($gen)),+])
    };
}

impl Generator for BoolGenerator {
    type Item = bool;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        Ok(ctx.draw_u8()? >= 0x80)
    }
}

impl Generator for WeightedCoinGenerator {
    type Item = bool;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        let WeightedCoinGenerator(p) = *self;
        let byte = ctx.draw_u8()?;
        let frac = f32::from(byte) / 255.0;
        Ok(frac > (1.0 - p))
    }
}

impl<V: Clone> Generator for Const<V> {
    type Item = V;
    fn generate(&self, _ctx: &mut Context) -> Maybe<Self::Item> {
        Ok(self.0.clone())
    }
}

impl<G: Generator, F: Fn(G::Item) -> R, R> Generator for Mapped<G, F> {
    type Item = R;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        let Mapped(ref gen, ref f) = *self;
        Ok(f(ctx.draw(gen)?))
    }
}

impl<G: Generator, F: Fn(&G::Item) -> bool> Generator for Filtered<G, F> {
    type Item = G::Item;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        let Filtered(ref gen, ref pred) = *self;
        let val = ctx.draw(gen)?;
        if pred(&val) {
            Ok(val)
        } else {
            Err(DataError::SkipItem)
        }
    }
}

impl<G: Generator, F: Fn(G::Item) -> Maybe<R>, R> Generator for FilterMapped<G, F> {
    type Item = R;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        let FilterMapped(ref gen, ref f) = *self;
        f(ctx.draw(gen)?)
    }
}

impl<G: Generator, H: Generator, F: Fn(G::Item) -> H> Generator for FlatMapped<G, F> {
    type Item = H::Item;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        let FlatMapped(ref gen, ref f) = *self;
        let picked = ctx.draw(gen)?;
        ctx.draw(&f(picked))
    }
}

impl<G: Generator> Generator for Named<G>
where
    G::Item: fmt::Debug,
{
    type Item = G::Item;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        ctx.draw_named(Some(&self.name), &self.gen)
    }
}

impl<F: Fn() -> G, G: Generator> Generator for Lazy<F> {
    type Item = G::Item;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        let Lazy(ref thunk) = *self;
        ctx.draw(&thunk())
    }
}

impl<G: Generator> Generator for OptionOf<G> {
    type Item = Option<G::Item>;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        if ctx.draw(&self.is_some)? {
            Ok(Some(ctx.draw(&self.inner)?))
        } else {
            Ok(None)
        }
    }
}

impl<T> Generator for OneOf<T> {
    type Item = T;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        let byte = ctx.draw_u8()?;
        let n = self.choices.len();
        let idx = choice_index(byte, n);
        self.choices[idx].generate_obj(ctx)
    }
}

/// Maps a drawn byte onto one of `n` choices: uniform when `n` is a power
/// of two, otherwise biased toward earlier entries via `byte % n`.
fn choice_index(byte: u8, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    if n.is_power_of_two() {
        ((byte as usize) * n) >> 8
    } else {
        (byte as usize) % n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::ChoiceSequence;

    fn run<G: Generator>(gen: &G, bytes: Vec<u8>) -> Maybe<G::Item>
    where
        G::Item: std::fmt::Debug,
    {
        let mut seq = ChoiceSequence::for_replay(bytes);
        let mut ctx = Context::new(&mut seq, None);
        ctx.draw_named(None, gen)
    }

    #[test]
    fn bool_generator_splits_at_0x80() {
        assert_eq!(run(&booleans(), vec![0x7f]), Ok(false));
        assert_eq!(run(&booleans(), vec![0x80]), Ok(true));
    }

    #[test]
    fn const_generator_consumes_no_bytes() {
        assert_eq!(run(&consts(42u32), vec![]), Ok(42));
    }

    #[test]
    fn map_transforms_the_generated_value() {
        let gen = booleans().map(|b| if b { 1 } else { 0 });
        assert_eq!(run(&gen, vec![0x00]), Ok(0));
        assert_eq!(run(&gen, vec![0xff]), Ok(1));
    }

    #[test]
    fn filter_rejects_with_skip_item() {
        let gen = booleans().filter(|&b| b);
        assert_eq!(run(&gen, vec![0x00]), Err(DataError::SkipItem));
        assert_eq!(run(&gen, vec![0xff]), Ok(true));
    }

    #[test]
    fn option_of_is_biased_toward_none() {
        let gen = option_of(consts(7u8));
        assert_eq!(run(&gen, vec![0x00, 0x00]), Ok(None));
        assert_eq!(run(&gen, vec![0xff, 0x00]), Ok(Some(7)));
    }

    #[test]
    fn one_of_rejects_more_than_256_choices() {
        let choices: Vec<Box<dyn GeneratorObject<Item = u8>>> =
            (0..257).map(|i| Box::new(consts(i as u8)) as Box<dyn GeneratorObject<Item = u8>>).collect();
        assert_eq!(one_of(choices).unwrap_err(), ConfigError::TooManyChoices { count: 257 });
    }

    #[test]
    fn one_of_picks_uniformly_for_power_of_two_arity() {
        let choices: Vec<Box<dyn GeneratorObject<Item = u8>>> =
            vec![Box::new(consts(0u8)), Box::new(consts(1u8))];
        let gen = one_of(choices).expect("two choices is within the cap");
        assert_eq!(run(&gen, vec![0x00]), Ok(0));
        assert_eq!(run(&gen, vec![0xff]), Ok(1));
    }

    #[test]
    fn named_records_an_interval_even_when_nested() {
        let mut seq = ChoiceSequence::for_replay(vec![0x80]);
        let mut ctx = Context::new(&mut seq, None);
        let gen = booleans().named("flag");
        assert_eq!(ctx.draw(&gen), Ok(true));
        assert_eq!(seq.intervals(), &[(0, 1)]);
    }
}
