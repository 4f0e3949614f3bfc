//! The compression module runs the coders end to end.
//!
//! Encoding concatenates the codeword of every input symbol into one BitSequence. Decoding
//! walks that BitSequence through the table's decode trie and fails, rather than guessing,
//! when the bits do not line up with the table.
//!
//! run() is the single entry point a front end needs: pick an algorithm, hand over the text,
//! and get back the table, the encoded message, the decoded text and the measurements.
//!

pub mod compress;
pub mod decompress;
