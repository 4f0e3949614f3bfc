//! Entropy and compression measurements over frequency tables and encoded messages.

use crate::bitstream::bit_sequence::BitSequence;
use crate::code_table::CodeTable;
use crate::error::{CodingError, Result};

use super::freq_count::FrequencyTable;

/// Bits per symbol of the fixed width baseline used for compression ratios.
pub const BASELINE_BITS_PER_SYMBOL: usize = 8;

/// Shannon entropy, -Σ p·log2(p), in bits per symbol.
pub fn entropy(freqs: &FrequencyTable) -> f64 {
    let total = freqs.total() as f64;
    freqs
        .entries()
        .iter()
        .filter(|e| e.count > 0)
        .map(|e| {
            let p = e.count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of a symbol sequence. An empty sequence carries no information, so 0.0.
pub fn entropy_of(input: &str) -> f64 {
    FrequencyTable::build(input).map_or(0.0, |freqs| entropy(&freqs))
}

/// (symbol_count × 8) / encoded_bits
pub fn compression_ratio(symbol_count: usize, encoded_bits: usize) -> Result<f64> {
    if encoded_bits == 0 {
        return Err(CodingError::DivisionByZero);
    }
    Ok((symbol_count * BASELINE_BITS_PER_SYMBOL) as f64 / encoded_bits as f64)
}

pub fn compression_ratio_of(input: &str, message: &BitSequence) -> Result<f64> {
    compression_ratio(input.chars().count(), message.len())
}

/// Expected codeword length, Σ p·len(code), in bits per symbol.
pub fn average_code_length(freqs: &FrequencyTable, table: &CodeTable) -> Result<f64> {
    let total = freqs.total() as f64;
    let mut bits = 0.0;
    for e in freqs.entries() {
        let code = table.get(e.symbol).ok_or(CodingError::UnknownSymbol(e.symbol))?;
        bits += e.count as f64 / total * code.len() as f64;
    }
    Ok(bits)
}

/// entropy / average code length. 1.0 means the code meets the entropy bound.
pub fn efficiency(freqs: &FrequencyTable, table: &CodeTable) -> Result<f64> {
    let average = average_code_length(freqs, table)?;
    if average == 0.0 {
        return Err(CodingError::DivisionByZero);
    }
    Ok(entropy(freqs) / average)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn entropy_of_skewed_input() {
        let h = entropy_of("aaaabbbcc");
        assert!((h - 1.5305).abs() < 1e-3, "entropy was {}", h);
    }

    #[test]
    fn entropy_of_uniform_input() {
        assert!((entropy_of("abcd") - 2.0).abs() < 1e-12);
        assert_eq!(entropy_of("aaaa"), 0.0);
        assert_eq!(entropy_of(""), 0.0);
    }

    #[test]
    fn ratio_against_eight_bit_baseline() {
        assert_eq!(compression_ratio(9, 14).unwrap(), 72.0 / 14.0);
        assert!(matches!(compression_ratio(3, 0), Err(CodingError::DivisionByZero)));
        let message: BitSequence = "0110".parse().unwrap();
        assert_eq!(compression_ratio_of("ab", &message).unwrap(), 4.0);
    }

    #[test]
    fn average_length_and_efficiency() {
        let freqs = FrequencyTable::build("aabc").unwrap();
        let table = CodeTable::from_codewords(vec![
            ('a', "0".parse().unwrap()),
            ('b', "10".parse().unwrap()),
            ('c', "11".parse().unwrap()),
        ])
        .unwrap();
        assert!((average_code_length(&freqs, &table).unwrap() - 1.5).abs() < 1e-12);
        // dyadic distribution, so the code is optimal
        assert!((efficiency(&freqs, &table).unwrap() - 1.0).abs() < 1e-12);

        let partial = CodeTable::from_codewords(vec![('a', "0".parse().unwrap())]).unwrap();
        assert!(matches!(
            average_code_length(&freqs, &partial),
            Err(CodingError::UnknownSymbol('b'))
        ));
    }
}
