//! Variable-length generators: vectors of an element generator, ASCII
//! strings, and `option_of`'s coin-biased relative for collections. All
//! three are a loop of the same shape — draw a control byte, stop once it
//! falls at or below a threshold, otherwise draw one more element — which
//! is what makes the all-zero byte sequence collapse every one of them to
//! its empty/shortest form.

use crate::choice::Context;
use crate::generators::core::{Generator, Maybe};

/// See [`vector_of`](fn.vector_of.html).
#[derive(Debug, Clone)]
pub struct VectorOf<G> {
    inner: G,
    stop_threshold: u8,
    max_len: Option<usize>,
}

/// Generates a `Vec` of however many elements `inner` produces.
///
/// Before each element, draws one control byte; a byte at or below the
/// stop threshold (~20% of the byte range) ends the vector, otherwise one
/// more element is drawn and the loop repeats. An all-zero byte sequence
/// always yields an empty vector.
pub fn vector_of<G: Generator>(inner: G) -> VectorOf<G> {
    VectorOf { inner, stop_threshold: 50, max_len: None }
}

impl<G> VectorOf<G> {
    /// Caps the vector at `n` elements regardless of what the control
    /// bytes say, so a pathological byte sequence cannot grow it without bound.
    pub fn max_len(mut self, n: usize) -> Self {
        self.max_len = Some(n);
        self
    }
}

impl<G: Generator> Generator for VectorOf<G> {
    type Item = Vec<G::Item>;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        let mut out = Vec::new();
        loop {
            if self.max_len.map_or(false, |max| out.len() >= max) {
                break;
            }
            let control = ctx.draw_u8()?;
            if control <= self.stop_threshold {
                break;
            }
            out.push(ctx.draw(&self.inner)?);
        }
        Ok(out)
    }
}

/// See [`ascii_string`](fn.ascii_string.html)/[`string_of_len`](fn.string_of_len.html).
#[derive(Debug, Clone, Copy)]
pub struct AsciiString {
    stop_threshold: u8,
    max_len: Option<usize>,
}

const PRINTABLE_ASCII_LO: u8 = 0x20;
const PRINTABLE_ASCII_SPAN: u16 = 0x7e - 0x20;

/// Generates a `String` of printable ASCII characters (`0x20..=0x7e`),
/// stopping with ~10% probability after each character. An all-zero
/// byte sequence yields the empty string.
pub fn ascii_string() -> AsciiString {
    AsciiString { stop_threshold: 25, max_len: None }
}

/// Like [`ascii_string`], but never longer than `max`. The minimal
/// failing string for a "string too long" property is `max` copies of
/// the smallest printable character, space (`0x20`).
pub fn string_of_len(max: usize) -> AsciiString {
    ascii_string().max_len(max)
}

impl AsciiString {
    /// Caps the string at `n` characters.
    pub fn max_len(mut self, n: usize) -> Self {
        self.max_len = Some(n);
        self
    }
}

impl Generator for AsciiString {
    type Item = String;
    fn generate(&self, ctx: &mut Context) -> Maybe<Self::Item> {
        let mut out = String::new();
        loop {
            if self.max_len.map_or(false, |max| out.len() >= max) {
                break;
            }
            let control = ctx.draw_u8()?;
            if control <= self.stop_threshold {
                break;
            }
            let byte = ctx.draw_u8()?;
            let offset = u16::from(byte) % (PRINTABLE_ASCII_SPAN + 1);
            out.push((PRINTABLE_ASCII_LO + offset as u8) as char);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::ChoiceSequence;
    use crate::generators::core::consts;

    fn run<G: Generator>(gen: &G, bytes: Vec<u8>) -> Maybe<G::Item> {
        let mut seq = ChoiceSequence::for_replay(bytes);
        let mut ctx = Context::new(&mut seq, None);
        ctx.draw(gen)
    }

    #[test]
    fn all_zero_bytes_produce_an_empty_vector() {
        let gen = vector_of(consts(1u8));
        assert_eq!(run(&gen, vec![0, 0, 0]), Ok(vec![]));
    }

    #[test]
    fn continuation_byte_above_threshold_draws_another_element() {
        let gen = vector_of(consts(7u8));
        assert_eq!(run(&gen, vec![0xff, 0xff, 0x00]), Ok(vec![7, 7]));
    }

    #[test]
    fn max_len_caps_the_vector_even_with_all_continuation_bytes() {
        let gen = vector_of(consts(1u8)).max_len(2);
        let bytes = vec![0xff; 20];
        assert_eq!(run(&gen, bytes), Ok(vec![1, 1]));
    }

    #[test]
    fn all_zero_bytes_produce_an_empty_string() {
        assert_eq!(run(&ascii_string(), vec![0, 0]), Ok(String::new()));
    }

    #[test]
    fn string_of_len_caps_at_spaces_when_shrunk() {
        let gen = string_of_len(5);
        let mut bytes = Vec::new();
        for _ in 0..5 {
            bytes.push(0xff); // continue
            bytes.push(0x00); // space
        }
        assert_eq!(run(&gen, bytes), Ok("     ".to_string()));
    }

    #[test]
    fn string_characters_stay_within_printable_ascii() {
        let gen = ascii_string();
        let bytes = vec![0xff, 0xff, 0xff, 0x00];
        let s = run(&gen, bytes).expect("enough bytes");
        assert!(s.chars().all(|c| c.is_ascii() && !c.is_ascii_control()));
    }
}
