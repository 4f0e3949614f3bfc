//! Huffman and Shannon-Fano entropy coding.
//!
//! Version 0.1.0
//!
//! Builds prefix-free code tables for a complete, known symbol sequence and uses them to encode
//! that sequence into a variable length bitstream (and decode it back). Two table builders are
//! provided:
//! - Huffman: greedy merging of the two lightest subtrees, optimal among prefix codes.
//! - Shannon-Fano: recursive splitting of the probability sorted symbols into halves of
//!   nearly equal weight.
//!
//! Entropy, average code length and compression ratio (against an 8 bit per symbol baseline)
//! are provided to judge how close a table gets to the source entropy.
//!
//! Basic usage:
//!
//! ```
//! use entropy_coders::{build_huffman_table, decode, encode};
//!
//! let table = build_huffman_table("aaaabbbcc")?;
//! let message = encode("aaaabbbcc", &table)?;
//! assert_eq!(message.len(), 14);
//! assert_eq!(decode(&message, &table)?.into_iter().collect::<String>(), "aaaabbbcc");
//! # Ok::<(), entropy_coders::CodingError>(())
//! ```
//!
//! Tables containing a single distinct symbol give it the one bit codeword `0`, so every
//! encoded message can be walked bit by bit.
//!
pub mod bitstream;
pub mod code_table;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod shannon_fano;
pub mod tools;

pub use bitstream::bit_sequence::BitSequence;
pub use code_table::CodeTable;
pub use compression::compress::{encode, run, Algorithm, CodingReport};
pub use compression::decompress::{decode, decode_to_string};
pub use error::{CodingError, Result};
pub use huffman_coding::huffman::{build_huffman_table, HuffmanTree};
pub use shannon_fano::shannon_fano::{build_shannon_fano_table, ShannonFanoReport};
pub use tools::freq_count::{FrequencyTable, ProbabilityEntry, SymbolCount};
pub use tools::metrics::{
    average_code_length, compression_ratio, compression_ratio_of, efficiency, entropy, entropy_of,
};
