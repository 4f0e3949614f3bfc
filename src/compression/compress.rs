use std::{fmt::Display, fmt::Formatter};

use log::{debug, info};

use crate::bitstream::bit_sequence::BitSequence;
use crate::code_table::CodeTable;
use crate::error::{CodingError, Result};
use crate::huffman_coding::huffman::HuffmanTree;
use crate::shannon_fano::shannon_fano::ShannonFanoReport;
use crate::tools::freq_count::{FrequencyTable, ProbabilityEntry};
use crate::tools::metrics::{average_code_length, compression_ratio, entropy};

use super::decompress::decode_to_string;

/// Table construction algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Huffman,
    ShannonFano,
}
impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Huffman => write!(f, "Huffman"),
            Algorithm::ShannonFano => write!(f, "Shannon-Fano"),
        }
    }
}

/// Everything one run of a coder produced.
#[derive(Debug, Clone)]
pub struct CodingReport {
    pub algorithm: Algorithm,
    pub table: CodeTable,
    /// Statistics and code per symbol, in table order.
    pub symbols: Vec<ProbabilityEntry>,
    pub encoded: BitSequence,
    pub decoded: String,
    /// Bits per symbol
    pub entropy: f64,
    /// Bits per symbol
    pub average_code_length: f64,
    pub compression_ratio: f64,
}

/// Concatenate the codeword of every symbol of `symbols`. Fails with UnknownSymbol if the
/// table has no codeword for one of them.
pub fn encode(symbols: &str, table: &CodeTable) -> Result<BitSequence> {
    let count = symbols.chars().count();
    let mut message = BitSequence::with_capacity(count * table.max_code_len());
    message.append_from_table(symbols.chars(), table)?;
    debug!("Encoded {} symbols into {} bits", count, message.len());
    Ok(message)
}

/// Build a table for `input` with the chosen algorithm, encode and decode with it, and
/// measure the result.
pub fn run(algorithm: Algorithm, input: &str) -> Result<CodingReport> {
    let freqs = FrequencyTable::build(input)?;

    let (table, symbols) = match algorithm {
        Algorithm::Huffman => {
            let table = HuffmanTree::from_frequencies(&freqs)?.code_table(&freqs)?;
            let symbols = freqs
                .probability_entries()
                .into_iter()
                .map(|mut e| {
                    e.code = table
                        .get(e.symbol)
                        .cloned()
                        .ok_or(CodingError::UnknownSymbol(e.symbol))?;
                    Ok(e)
                })
                .collect::<Result<Vec<_>>>()?;
            (table, symbols)
        }
        Algorithm::ShannonFano => {
            let report = ShannonFanoReport::build(freqs.probability_entries())?;
            (report.code_table()?, report.into_entries())
        }
    };

    let encoded = encode(input, &table)?;
    let decoded = decode_to_string(&encoded, &table)?;
    if decoded != input {
        return Err(CodingError::RoundTripMismatch);
    }

    let report = CodingReport {
        algorithm,
        entropy: entropy(&freqs),
        average_code_length: average_code_length(&freqs, &table)?,
        compression_ratio: compression_ratio(freqs.total(), encoded.len())?,
        table,
        symbols,
        encoded,
        decoded,
    };
    info!(
        "{}: {} symbols, {} distinct, {} bits, ratio {:.3}",
        algorithm,
        freqs.total(),
        freqs.len(),
        report.encoded.len(),
        report.compression_ratio
    );
    Ok(report)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::huffman::build_huffman_table;

    #[test]
    fn encode_concatenates_codewords() {
        let table = build_huffman_table("aaaabbbcc").unwrap();
        let message = encode("abc", &table).unwrap();
        assert_eq!(message.to_string(), "10001");
    }

    #[test]
    fn encode_unknown_symbol() {
        let table = build_huffman_table("ab").unwrap();
        assert!(matches!(encode("abz", &table), Err(CodingError::UnknownSymbol('z'))));
    }

    #[test]
    fn encode_multibyte_symbols() {
        let table = build_huffman_table("ééé€").unwrap();
        let message = encode("é€é", &table).unwrap();
        assert_eq!(message.to_string(), "010");
    }

    #[test]
    fn run_huffman() {
        let report = run(Algorithm::Huffman, "aaaabbbcc").unwrap();
        assert_eq!(report.decoded, "aaaabbbcc");
        assert_eq!(report.encoded.len(), 4 + 3 * 2 + 2 * 2);
        assert!((report.entropy - 1.5305).abs() < 1e-3);
        assert!((report.average_code_length - 14.0 / 9.0).abs() < 1e-12);
        assert!((report.compression_ratio - 72.0 / 14.0).abs() < 1e-12);
        let codes: Vec<String> = report.symbols.iter().map(|e| e.code.to_string()).collect();
        assert_eq!(codes, vec!["1", "00", "01"]);
    }

    #[test]
    fn run_shannon_fano() {
        let report = run(Algorithm::ShannonFano, "abcdabcd").unwrap();
        assert_eq!(report.decoded, "abcdabcd");
        assert_eq!(report.encoded.len(), 16);
        assert_eq!(report.compression_ratio, 4.0);
        assert_eq!(report.algorithm.to_string(), "Shannon-Fano");
    }

    #[test]
    fn run_empty_input() {
        assert!(matches!(run(Algorithm::Huffman, ""), Err(CodingError::EmptyInput)));
        assert!(matches!(run(Algorithm::ShannonFano, ""), Err(CodingError::EmptyInput)));
    }
}
