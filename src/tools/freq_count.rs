use rustc_hash::FxHashMap;

use crate::bitstream::bit_sequence::BitSequence;
use crate::error::{CodingError, Result};

/// Occurrence count for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolCount {
    pub symbol: char,
    pub count: usize,
}

/// Per symbol statistics plus the codeword a builder assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityEntry {
    pub symbol: char,
    pub count: usize,
    /// count / total, in (0, 1]
    pub probability: f64,
    /// Empty until a builder fills it in.
    pub code: BitSequence,
}

/// Symbol counts for one complete input, in order of first appearance.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    entries: Vec<SymbolCount>,
    index: FxHashMap<char, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Count the symbols of `input`. Fails with EmptyInput if there are none.
    pub fn build(input: &str) -> Result<Self> {
        Self::from_symbols(input.chars())
    }

    /// Count any sequence of symbols.
    pub fn from_symbols<I: IntoIterator<Item = char>>(symbols: I) -> Result<Self> {
        let mut entries: Vec<SymbolCount> = Vec::new();
        let mut index = FxHashMap::default();
        let mut total = 0;
        for symbol in symbols {
            let i = *index.entry(symbol).or_insert_with(|| {
                entries.push(SymbolCount { symbol, count: 0 });
                entries.len() - 1
            });
            entries[i].count += 1;
            total += 1;
        }
        if total == 0 {
            return Err(CodingError::EmptyInput);
        }
        Ok(Self {
            entries,
            index,
            total,
        })
    }

    /// Distinct symbols with their counts, first appearance first.
    pub fn entries(&self) -> &[SymbolCount] {
        &self.entries
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the input the table was built from.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Occurrences of `symbol`, 0 if it never appeared.
    pub fn count(&self, symbol: char) -> usize {
        self.index.get(&symbol).map_or(0, |&i| self.entries[i].count)
    }

    /// count / total, 0.0 if the symbol never appeared.
    pub fn probability(&self, symbol: char) -> f64 {
        self.count(symbol) as f64 / self.total as f64
    }

    /// One ProbabilityEntry per symbol, first appearance order, codes empty.
    pub fn probability_entries(&self) -> Vec<ProbabilityEntry> {
        self.entries
            .iter()
            .map(|e| ProbabilityEntry {
                symbol: e.symbol,
                count: e.count,
                probability: e.count as f64 / self.total as f64,
                code: BitSequence::new(),
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::FrequencyTable;
    use crate::error::CodingError;

    #[test]
    fn counts_in_first_appearance_order() {
        let table = FrequencyTable::build("abracadabra").unwrap();
        let order: Vec<(char, usize)> = table.entries().iter().map(|e| (e.symbol, e.count)).collect();
        assert_eq!(order, vec![('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)]);
        assert_eq!(table.total(), 11);
        assert_eq!(table.len(), 5);
        assert_eq!(table.count('z'), 0);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let table = FrequencyTable::build("the quick brown fox jumps over the lazy dog").unwrap();
        let sum: f64 = table.probability_entries().iter().map(|e| e.probability).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((table.probability('o') - 4.0 / 43.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(FrequencyTable::build(""), Err(CodingError::EmptyInput)));
    }

    #[test]
    fn handles_multibyte_symbols() {
        let table = FrequencyTable::build("héé").unwrap();
        assert_eq!(table.count('é'), 2);
        assert_eq!(table.total(), 3);
    }
}
