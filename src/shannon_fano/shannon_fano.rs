use std::fmt::{Display, Formatter};

use log::{debug, trace};

use crate::code_table::CodeTable;
use crate::error::{CodingError, Result};
use crate::tools::freq_count::{FrequencyTable, ProbabilityEntry};

/// Per symbol statistics and codes from a Shannon-Fano build, most probable symbol first.
#[derive(Debug, Clone, PartialEq)]
pub struct ShannonFanoReport {
    entries: Vec<ProbabilityEntry>,
}

impl ShannonFanoReport {
    /// Sort `entries` by descending probability and assign Shannon-Fano codes.
    /// Fails with EmptyInput if there are no entries.
    pub fn build(mut entries: Vec<ProbabilityEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CodingError::EmptyInput);
        }
        // Stable, so equal probabilities keep their input order. Counts are an exact stand-in
        // for probabilities since they share one denominator.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.iter_mut().for_each(|e| e.code.truncate(0));

        if entries.len() == 1 {
            entries[0].code.push(false);
        } else {
            let mut prefix = Vec::with_capacity(entries.len() + 1);
            let mut running = 0;
            prefix.push(running);
            for e in &entries {
                running += e.count;
                prefix.push(running);
            }
            let len = entries.len();
            assign_codes(&prefix, &mut entries, 0, len);
        }

        debug!("Shannon-Fano table: {} symbols", entries.len());
        for e in &entries {
            trace!("{:?} p={:.4} -> {}", e.symbol, e.probability, e.code);
        }
        Ok(Self { entries })
    }

    /// Entries in code order (descending probability).
    pub fn entries(&self) -> &[ProbabilityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The codes as a CodeTable, in report order.
    pub fn code_table(&self) -> Result<CodeTable> {
        CodeTable::from_codewords(self.entries.iter().map(|e| (e.symbol, e.code.clone())))
    }

    pub fn into_entries(self) -> Vec<ProbabilityEntry> {
        self.entries
    }
}

impl Display for ShannonFanoReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for e in &self.entries {
            writeln!(
                f,
                "Character-- {}:: Code-- {} :: Probability-- {}",
                e.symbol, e.code, e.probability
            )?;
        }
        Ok(())
    }
}

/// Split entries[lo..hi] at the balance point, append 0 to the left part and 1 to the right,
/// then recurse into both parts. Parts of one entry are finished.
fn assign_codes(prefix: &[usize], entries: &mut [ProbabilityEntry], lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    let split = split_point(prefix, lo, hi);
    entries[lo..=split].iter_mut().for_each(|e| e.code.push(false));
    entries[split + 1..hi].iter_mut().for_each(|e| e.code.push(true));
    assign_codes(prefix, entries, lo, split + 1);
    assign_codes(prefix, entries, split + 1, hi);
}

/// Index of the last entry of the left part for range [lo, hi), hi - lo >= 2.
///
/// Walks the pointer forward while the left sum is below the right sum, then picks whichever
/// of the last two candidates is better balanced. Ties go to the earlier split point.
/// `prefix[i]` is the sum of the first i counts, so each difference is O(1).
fn split_point(prefix: &[usize], lo: usize, hi: usize) -> usize {
    let diff = |pointer: usize| {
        let left = prefix[pointer + 1] - prefix[lo];
        let right = prefix[hi] - prefix[pointer + 1];
        left as i64 - right as i64
    };

    let mut pointer = lo;
    while pointer < hi - 2 && diff(pointer) < 0 {
        pointer += 1;
    }
    if pointer > lo && diff(pointer - 1).abs() <= diff(pointer).abs() {
        pointer - 1
    } else {
        pointer
    }
}

/// Build a Shannon-Fano code table for a complete symbol sequence, along with the per symbol
/// probability report.
pub fn build_shannon_fano_table(input: &str) -> Result<(CodeTable, ShannonFanoReport)> {
    let freqs = FrequencyTable::build(input)?;
    let report = ShannonFanoReport::build(freqs.probability_entries())?;
    Ok((report.code_table()?, report))
}
