//! Generators: values built from the byte-sequence representation in
//! [`choice`](../choice/index.html). Everything here implements
//! [`Generator`](core::Generator); combinators compose by nesting calls
//! to [`Context::draw`](../choice/context/struct.Context.html#method.draw).

pub mod collections;
pub mod core;
pub mod numbers;
pub mod tuples;

pub use self::collections::{ascii_string, string_of_len, vector_of, AsciiString, VectorOf};
pub use self::core::{
    booleans, consts, lazy, one_of, option_of, weighted_coin, BoolGenerator, Const, Filtered, FilterMapped,
    FlatMapped, Generator, GeneratorObject, Lazy, Mapped, Maybe, Named, OneOf, OptionOf, WeightedCoinGenerator,
};
pub use self::numbers::{
    f32s, f64s, i16s, i32s, i64s, i8s, isizes, signed, u16s, u32s, u64s, u8s, uniform_f32s, uniform_f64s, unsigned,
    usizes, FloatGenerator, FullRangeGenerator, SignedGenerator, SignedInt, UniformFloatGenerator, UnsignedGenerator,
    UnsignedInt,
};
pub use self::tuples::{tuple2, tuple3, tuple4, tuple5, tuple6};
