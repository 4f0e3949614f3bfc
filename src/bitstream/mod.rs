//! The bitstream module holds the bit level storage for encoded messages and codewords.
//!
//! A BitSequence is a growable, packed run of bits. Codewords are BitSequences, and an encoded
//! message is the concatenation of the codewords for each input symbol. BitReader walks a
//! BitSequence one bit (or a few bits) at a time for decoding.
//!
pub mod bit_sequence;
pub mod bitreader;
