//! BitReader: cursor over a BitSequence.
//!
//! Reads bits in order from a packed BitSequence, tracking the byte cursor and the bit index
//! within that byte. Used by the table driven decoder.
//!

use super::bit_sequence::BitSequence;

const BIT_MASK: u8 = 0xff;

/// Reads bits from a BitSequence.
#[derive(Debug)]
pub struct BitReader<'a> {
    source: &'a BitSequence,
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader positioned at the first bit.
    pub fn new(source: &'a BitSequence) -> Self {
        Self {
            source,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Number of bits consumed so far.
    pub fn position(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Number of bits left to read.
    pub fn remaining(&self) -> usize {
        self.source.len() - self.position()
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.remaining() == 0 {
            return None;
        }
        let byte = self.source.as_bytes()[self.cursor];
        let bit = (byte & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Debugging function. Report current position as [byte.bit].
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}
