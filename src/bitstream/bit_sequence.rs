use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::trace;

use crate::code_table::CodeTable;
use crate::error::{CodingError, Result};

use super::bitreader::BitReader;

/// Growable sequence of single bits, packed most significant bit first.
/// Used both for individual codewords and for whole encoded messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSequence {
    /// Packed bits. Unused low bits of the last byte are always 0.
    bytes: Vec<u8>,
    /// Count of valid bits in `bytes`.
    bit_count: usize,
}

impl BitSequence {
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            bit_count: 0,
        }
    }

    /// Create an empty sequence with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity((bits + 7) / 8),
            bit_count: 0,
        }
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    /// The packed bytes. The last byte is zero padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Push one bit onto the end of the sequence.
    pub fn push(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8;
        let bit_offset = self.bit_count % 8;
        if byte_index == self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 0x80 >> bit_offset;
        }
        self.bit_count += 1;
    }

    /// Remove and return the last bit.
    pub fn pop(&mut self) -> Option<bool> {
        let last = self.get(self.bit_count.checked_sub(1)?)?;
        self.truncate(self.bit_count - 1);
        Some(last)
    }

    /// Return the bit at `index`, or None if out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_count {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// Shorten the sequence to `len` bits. Does nothing if already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.bit_count {
            return;
        }
        self.bytes.truncate((len + 7) / 8);
        // Clear the dropped bits of the (new) last byte so equality stays bitwise.
        if len % 8 != 0 {
            if let Some(last) = self.bytes.last_mut() {
                *last &= 0xff << (8 - len % 8);
            }
        }
        self.bit_count = len;
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_count).map(move |i| self.bytes[i / 8] & (0x80 >> (i % 8)) != 0)
    }

    /// Cursor style reader over the sequence.
    pub fn reader(&self) -> BitReader<'_> {
        BitReader::new(self)
    }

    /// True if `prefix` is a prefix of (or equal to) this sequence.
    pub fn starts_with(&self, prefix: &BitSequence) -> bool {
        prefix.len() <= self.len() && prefix.iter().zip(self.iter()).all(|(a, b)| a == b)
    }

    /// Append bits in order.
    pub fn append_bits<I: IntoIterator<Item = bool>>(&mut self, bits: I) {
        bits.into_iter().for_each(|bit| self.push(bit));
    }

    /// Append all bits of another sequence.
    pub fn extend_from(&mut self, other: &BitSequence) {
        self.append_bits(other.iter());
    }

    /// Append the codeword of each symbol, in order. If a symbol is not in the table the
    /// sequence is restored to its original length and UnknownSymbol is returned.
    pub fn append_from_table<I: IntoIterator<Item = char>>(
        &mut self,
        symbols: I,
        table: &CodeTable,
    ) -> Result<()> {
        let start = self.bit_count;
        for symbol in symbols {
            match table.get(symbol) {
                Some(code) => self.extend_from(code),
                None => {
                    self.truncate(start);
                    return Err(CodingError::UnknownSymbol(symbol));
                }
            }
        }
        Ok(())
    }

    /// Walk the decode trie of `table` one bit at a time, emitting a symbol and returning
    /// to the root whenever a leaf is reached.
    pub fn decode_with_table(&self, table: &CodeTable) -> Result<Vec<char>> {
        let tree = table.decode_tree();
        let mut result = Vec::new();
        let mut reader = self.reader();
        let mut node = tree.root();
        let mut pending = 0;

        while let Some(bit) = reader.bool_bit() {
            node = tree.child(node, bit).ok_or(CodingError::InvalidCode {
                position: reader.position() - 1,
            })?;
            pending += 1;
            if let Some(symbol) = tree.symbol(node) {
                trace!("{} decoded {:?}", reader.loc(), symbol);
                result.push(symbol);
                node = tree.root();
                pending = 0;
            }
        }

        if pending > 0 {
            return Err(CodingError::TruncatedCode {
                position: self.bit_count,
                pending,
            });
        }
        Ok(result)
    }
}

impl Display for BitSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitSequence {
    type Err = CodingError;

    /// Parse a string of '0' and '1' characters.
    fn from_str(s: &str) -> Result<Self> {
        let mut bits = BitSequence::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                other => return Err(CodingError::InvalidBitChar(other)),
            }
        }
        Ok(bits)
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitSequence::new();
        bits.append_bits(iter);
        bits
    }
}
