//! The byte-sequence choice representation. Every value a generator
//! produces is a pure function of a [`ChoiceSequence`](struct.ChoiceSequence.html):
//! a growable buffer of bytes, a read cursor, and a flat list of the
//! byte ranges ("intervals") that top-level generator calls consumed.
//!
//! During discovery the sequence grows on demand from an RNG. During
//! shrinking and replay it is fixed, and reading past its end is an
//! [`Overrun`](enum.DataError.html) rather than a generated value.

use hex_slice::AsHex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A half-open `[start, end)` range of bytes consumed by one top-level
/// generator draw.
pub type Interval = (usize, usize);

/// The reasons a draw against a [`ChoiceSequence`](struct.ChoiceSequence.html) can fail.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DataError {
    /// A shrink or replay run tried to read past the end of its fixed byte buffer.
    Overrun,
    /// A combinator (`filter`, `filter_map`, ...) rejected this attempt.
    SkipItem,
}

/// Whether a [`ChoiceSequence`](struct.ChoiceSequence.html) is growing to
/// discover a counterexample, or replaying a fixed buffer during
/// shrinking/reporting.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Mode {
    Generate,
    Replay,
}

/// A pool of bytes that generators draw from, plus the bookkeeping
/// (cursor, intervals) needed to shrink and replay it.
#[derive(Clone)]
pub struct ChoiceSequence {
    bytes: Vec<u8>,
    cursor: usize,
    intervals: Vec<Interval>,
    mode: Mode,
    rng: Option<StdRng>,
}

impl fmt::Debug for ChoiceSequence {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("ChoiceSequence")
            .field("bytes", &format_args!("{:x}", self.bytes.as_hex()))
            .field("cursor", &self.cursor)
            .field("intervals", &self.intervals)
            .finish()
    }
}

impl ChoiceSequence {
    /// Creates an empty sequence that grows on demand from a fresh RNG,
    /// used at the start of each discovery-phase predicate invocation.
    /// `initial_capacity` only pre-sizes the backing buffer; it does not
    /// draw any bytes up front.
    pub fn for_generation(initial_capacity: usize) -> Self {
        ChoiceSequence {
            bytes: Vec::with_capacity(initial_capacity),
            cursor: 0,
            intervals: Vec::new(),
            mode: Mode::Generate,
            rng: Some(StdRng::from_entropy()),
        }
    }

    /// Creates a sequence over a fixed buffer, used for shrinking and replay.
    /// Reading past the end of `bytes` is an [`Overrun`](enum.DataError.html).
    pub fn for_replay(bytes: Vec<u8>) -> Self {
        ChoiceSequence {
            bytes,
            cursor: 0,
            intervals: Vec::new(),
            mode: Mode::Replay,
            rng: None,
        }
    }

    /// The bytes backing this sequence, in full (including any not yet read).
    pub fn buffer(&self) -> &[u8] {
        &self.bytes
    }

    /// The number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The top-level draw intervals recorded by the most recent run.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Reads one byte, advancing the cursor. In generation mode this
    /// draws a fresh random byte once the buffer is exhausted; in replay
    /// mode, exhaustion is an [`Overrun`](enum.DataError.html).
    pub fn draw_u8(&mut self) -> Result<u8, DataError> {
        if self.cursor >= self.bytes.len() {
            match self.mode {
                Mode::Replay => return Err(DataError::Overrun),
                Mode::Generate => {
                    let byte = self
                        .rng
                        .as_mut()
                        .expect("generation-mode sequence always carries an rng")
                        .gen::<u8>();
                    self.bytes.push(byte);
                }
            }
        }
        let byte = self.bytes[self.cursor];
        self.cursor += 1;
        Ok(byte)
    }

    /// Reads `n` bytes, advancing the cursor by `n`. Does not itself
    /// record an interval — that is the job of the generator-level
    /// entry points in [`choice::context`](../context/index.html).
    pub fn draw_bytes(&mut self, n: usize) -> Result<Vec<u8>, DataError> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.draw_u8()?);
        }
        Ok(out)
    }

    /// Records a top-level interval spanning `[start, self.cursor)`, if
    /// any bytes were actually consumed. Used by
    /// [`Context::draw_named`](../context/struct.Context.html#method.draw_named).
    pub(crate) fn record_interval(&mut self, start: usize) {
        let end = self.cursor;
        if end > start {
            self.intervals.push((start, end));
        }
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Produces a copy truncated to the bytes actually consumed so far,
    /// with the cursor reset to zero and switched to replay mode. Used
    /// once a counterexample has been found, so that subsequent shrink
    /// and replay runs operate on a fixed, minimal buffer.
    pub fn rewind(&self) -> Self {
        ChoiceSequence {
            bytes: self.bytes[..self.cursor].to_vec(),
            cursor: 0,
            intervals: self.intervals.clone(),
            mode: Mode::Replay,
            rng: None,
        }
    }

    /// Produces a copy with no recorded intervals and the cursor reset
    /// to zero, ready for a fresh run over the same bytes. Preserves the
    /// rng in generation mode, since a sequence that is still growing
    /// must be able to keep drawing fresh bytes afterward.
    pub fn clear_intervals(&self) -> Self {
        ChoiceSequence {
            bytes: self.bytes.clone(),
            cursor: 0,
            intervals: Vec::new(),
            mode: self.mode,
            rng: self.rng.clone(),
        }
    }

    /// A non-mutating copy with `bytes[i]` replaced by `v`.
    pub fn set_byte(&self, i: usize, v: u8) -> Self {
        let mut bytes = self.bytes.clone();
        bytes[i] = v;
        ChoiceSequence {
            bytes,
            cursor: 0,
            intervals: Vec::new(),
            mode: self.mode,
            rng: self.rng.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_mode_overruns_past_the_end() {
        let mut seq = ChoiceSequence::for_replay(vec![1, 2]);
        assert_eq!(seq.draw_u8(), Ok(1));
        assert_eq!(seq.draw_u8(), Ok(2));
        assert_eq!(seq.draw_u8(), Err(DataError::Overrun));
    }

    #[test]
    fn generation_mode_grows_the_buffer() {
        let mut seq = ChoiceSequence::for_generation(0);
        assert_eq!(seq.len(), 0);
        let _ = seq.draw_bytes(4).expect("draw");
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn rewind_truncates_to_consumed_bytes() {
        let mut seq = ChoiceSequence::for_generation(0);
        let _ = seq.draw_bytes(3).expect("draw");
        let _ = seq.draw_bytes(5).expect("draw"); // never consumed by rewind
        let rewound = seq.rewind();
        assert_eq!(rewound.buffer().len(), 3);
    }

    #[test]
    fn clear_intervals_drops_recorded_ranges() {
        let mut seq = ChoiceSequence::for_replay(vec![0, 1, 2, 3]);
        seq.draw_u8().unwrap();
        seq.record_interval(0);
        assert_eq!(seq.intervals(), &[(0, 1)]);
        let cleared = seq.clear_intervals();
        assert!(cleared.intervals().is_empty());
    }

    #[test]
    fn set_byte_does_not_mutate_the_original() {
        let seq = ChoiceSequence::for_replay(vec![5, 5]);
        let edited = seq.set_byte(0, 9);
        assert_eq!(seq.buffer(), &[5, 5]);
        assert_eq!(edited.buffer(), &[9, 5]);
    }
}
