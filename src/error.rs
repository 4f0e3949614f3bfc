//! Error types for table construction, encoding and decoding.

use thiserror::Error;

/// Error variants for the coders.
#[derive(Debug, Error)]
pub enum CodingError {
    /// There were no symbols to build a table from.
    #[error("empty input: at least one symbol is needed to build a code table")]
    EmptyInput,

    /// A symbol has no codeword in the table used for encoding.
    #[error("symbol {0:?} is not in the code table")]
    UnknownSymbol(char),

    /// The bit sequence ended part way through a codeword.
    #[error("bit sequence ends inside a codeword ({pending} dangling bits ending at bit {position})")]
    TruncatedCode { position: usize, pending: usize },

    /// The bits walked so far match no codeword in the table.
    #[error("no codeword matches the bits ending at bit {position}")]
    InvalidCode { position: usize },

    /// Compression ratio requested for a zero length encoding.
    #[error("division by zero: encoded length is 0 bits")]
    DivisionByZero,

    /// A supplied table gave a symbol an empty codeword.
    #[error("symbol {0:?} has an empty codeword")]
    EmptyCodeword(char),

    /// A supplied table is not prefix-free (or repeats a symbol).
    #[error("codewords for {0:?} and {1:?} are ambiguous")]
    AmbiguousTable(char, char),

    /// A bit string contained something other than '0' or '1'.
    #[error("invalid bit character {0:?}")]
    InvalidBitChar(char),

    /// Decoding did not reproduce the input.
    #[error("round trip mismatch: decoded text differs from the input")]
    RoundTripMismatch,

    /// An I/O error occurred while reading input.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for the coders.
pub type Result<T> = std::result::Result<T, CodingError>;
