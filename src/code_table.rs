//! Code tables map each symbol to its codeword.
//!
//! A CodeTable is built once (by the Huffman or Shannon-Fano builders, or from a caller supplied
//! list of codewords) and is read-only afterwards. Alongside the symbol -> codeword map it keeps
//! a binary decode trie so decoding is a single walk over the message bits.

use std::fmt::{Display, Formatter};

use log::trace;
use rustc_hash::FxHashMap;

use crate::bitstream::bit_sequence::BitSequence;
use crate::error::{CodingError, Result};

/// Prefix-free mapping from symbol to codeword.
#[derive(Debug, Clone)]
pub struct CodeTable {
    /// (symbol, codeword) in the order the builder produced them.
    entries: Vec<(char, BitSequence)>,
    /// symbol -> index into entries
    index: FxHashMap<char, usize>,
    tree: DecodeTree,
}

impl CodeTable {
    /// Build a table from (symbol, codeword) pairs. Rejects empty lists, empty codewords,
    /// repeated symbols and codewords that are a prefix of another codeword.
    pub fn from_codewords<I>(codewords: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, BitSequence)>,
    {
        let entries: Vec<(char, BitSequence)> = codewords.into_iter().collect();
        if entries.is_empty() {
            return Err(CodingError::EmptyInput);
        }

        let mut index = FxHashMap::default();
        let mut tree = DecodeTree::new();
        for (i, (symbol, code)) in entries.iter().enumerate() {
            if code.is_empty() {
                return Err(CodingError::EmptyCodeword(*symbol));
            }
            if let Some(&other) = index.get(symbol) {
                let (first, _): &(char, BitSequence) = &entries[other];
                return Err(CodingError::AmbiguousTable(*first, *symbol));
            }
            tree.insert(*symbol, code)?;
            index.insert(*symbol, i);
            trace!("{:?} -> {}", symbol, code);
        }

        Ok(Self {
            entries,
            index,
            tree,
        })
    }

    /// Codeword for `symbol`, if it is in the table.
    pub fn get(&self, symbol: char) -> Option<&BitSequence> {
        self.index.get(&symbol).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (symbol, codeword) in table order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &BitSequence)> + '_ {
        self.entries.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// Codeword length for each symbol, in table order.
    pub fn code_lengths(&self) -> Vec<(char, usize)> {
        self.iter().map(|(symbol, code)| (symbol, code.len())).collect()
    }

    /// Longest codeword in bits.
    pub fn max_code_len(&self) -> usize {
        self.entries.iter().map(|(_, code)| code.len()).max().unwrap_or(0)
    }

    /// Check that no codeword is a prefix of another. Tables built through from_codewords
    /// always pass; this is the direct pairwise check.
    pub fn is_prefix_free(&self) -> bool {
        for (i, (_, a)) in self.entries.iter().enumerate() {
            for (_, b) in self.entries.iter().skip(i + 1) {
                if a.starts_with(b) || b.starts_with(a) {
                    return false;
                }
            }
        }
        true
    }

    /// The binary trie used for decoding.
    pub fn decode_tree(&self) -> &DecodeTree {
        &self.tree
    }
}

impl Display for CodeTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{:?}: {}", symbol, code)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: [Option<usize>; 2],
    symbol: Option<char>,
}

/// Arena backed binary trie. Node 0 is the root; leaves carry a symbol.
#[derive(Debug, Clone)]
pub struct DecodeTree {
    nodes: Vec<TrieNode>,
}

impl DecodeTree {
    fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Add a codeword. Fails if the path runs through an existing leaf or ends on a node
    /// that already exists.
    fn insert(&mut self, symbol: char, code: &BitSequence) -> Result<()> {
        let mut node = 0;
        for bit in code.iter() {
            if let Some(other) = self.nodes[node].symbol {
                return Err(CodingError::AmbiguousTable(other, symbol));
            }
            node = match self.nodes[node].children[bit as usize] {
                Some(child) => child,
                None => {
                    self.nodes.push(TrieNode::default());
                    let child = self.nodes.len() - 1;
                    self.nodes[node].children[bit as usize] = Some(child);
                    child
                }
            };
        }
        if let Some(other) = self.nodes[node].symbol {
            return Err(CodingError::AmbiguousTable(other, symbol));
        }
        if let Some(other) = self.first_symbol_below(node) {
            return Err(CodingError::AmbiguousTable(symbol, other));
        }
        self.nodes[node].symbol = Some(symbol);
        Ok(())
    }

    /// Any symbol stored strictly below `node`.
    fn first_symbol_below(&self, node: usize) -> Option<char> {
        let mut stack: Vec<usize> = self.nodes[node].children.iter().flatten().copied().collect();
        while let Some(n) = stack.pop() {
            if let Some(symbol) = self.nodes[n].symbol {
                return Some(symbol);
            }
            stack.extend(self.nodes[n].children.iter().flatten());
        }
        None
    }

    pub fn root(&self) -> usize {
        0
    }

    /// Follow one bit from `node`. None if the table has no codeword down that branch.
    pub fn child(&self, node: usize, bit: bool) -> Option<usize> {
        self.nodes.get(node)?.children[bit as usize]
    }

    /// The symbol at `node` if it is a leaf.
    pub fn symbol(&self, node: usize) -> Option<char> {
        self.nodes.get(node)?.symbol
    }

    /// Total node count, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
