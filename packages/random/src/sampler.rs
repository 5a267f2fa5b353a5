//! Rejection sampling from random bytes onto an alphabet
//!
//! Bytes in `[0, max_byte)` map uniformly onto the alphabet via `byte % k`.
//! Bytes in `[max_byte, 256)` would over-represent the first `256 % k`
//! characters and are discarded.

use crate::charset::Alphabet;

/// Number of distinct byte values
pub const BYTE_RANGE: usize = 256;

/// Rejection threshold for an alphabet of `alphabet_len` characters
///
/// Largest multiple of `alphabet_len` not exceeding 256. Equals 256 when the
/// alphabet size divides 256, in which case no byte is ever rejected.
#[must_use]
pub fn max_byte(alphabet_len: usize) -> usize {
    debug_assert!((1..=BYTE_RANGE).contains(&alphabet_len));
    BYTE_RANGE - (BYTE_RANGE % alphabet_len)
}

/// Bytes to draw so that, in expectation, `remaining` characters survive rejection
#[must_use]
pub fn draw_size(remaining: usize, max_byte: usize) -> usize {
    remaining.saturating_mul(BYTE_RANGE).div_ceil(max_byte)
}

/// Mutable state for one generation call
#[derive(Debug)]
pub struct GenerationState {
    output: String,
    alphabet: Alphabet,
    target: usize,
    max_byte: usize,
    rounds: usize,
    rejected: usize,
}

impl GenerationState {
    /// Start a generation of `target` characters over `alphabet`
    #[must_use]
    pub fn new(alphabet: Alphabet, target: usize) -> Self {
        let max_byte = max_byte(alphabet.len());
        Self {
            output: String::with_capacity(target),
            alphabet,
            target,
            max_byte,
            rounds: 0,
            rejected: 0,
        }
    }

    /// Rejection threshold in use
    #[must_use]
    pub fn max_byte(&self) -> usize {
        self.max_byte
    }

    /// Characters still missing
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.target - self.output.len()
    }

    /// Whether the output has reached the target length
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.output.len() >= self.target
    }

    /// Bytes to request for the next refill round
    #[must_use]
    pub fn next_draw_size(&self) -> usize {
        draw_size(self.remaining(), self.max_byte)
    }

    /// Refill rounds consumed so far
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Bytes discarded so far
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Consume one round of bytes left to right, returning accepted characters
    ///
    /// Stops as soon as the target is reached; trailing bytes are ignored.
    pub fn consume(&mut self, bytes: &[u8]) -> usize {
        self.rounds += 1;
        let k = self.alphabet.len();
        let before = self.output.len();

        for &b in bytes {
            if self.is_complete() {
                break;
            }
            let b = usize::from(b);
            if b < self.max_byte {
                self.output.push(char::from(self.alphabet.as_bytes()[b % k]));
            } else {
                self.rejected += 1;
            }
        }

        let accepted = self.output.len() - before;
        tracing::trace!(
            round = self.rounds,
            drawn = bytes.len(),
            accepted,
            remaining = self.remaining(),
            "refill round consumed"
        );
        accepted
    }

    /// Take the completed output
    #[must_use]
    pub fn finish(self) -> String {
        debug_assert!(self.is_complete());
        self.output
    }
}
