use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::bitstream::bit_sequence::BitSequence;
use crate::code_table::CodeTable;
use crate::error::{CodingError, Result};
use crate::tools::freq_count::FrequencyTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeData {
    /// Indices of the '0' and '1' children in the arena.
    Kids(usize, usize),
    Leaf(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub weight: usize,
    pub node_data: NodeData,
}

/// Huffman tree held in an arena. Leaves come first (in frequency table order), merged
/// nodes follow in the order they were created; the root is the last node.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: usize,
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two lightest entries of a min-priority queue.
    ///
    /// Queue entries are ordered by (weight, sequence). A leaf's sequence is its position in
    /// the frequency table (first appearance), and each merged node takes the next sequence
    /// number, so equal weights always pop in the same order.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Result<Self> {
        if freqs.is_empty() {
            return Err(CodingError::EmptyInput);
        }

        let mut nodes: Vec<Node> = freqs
            .entries()
            .iter()
            .map(|e| Node {
                weight: e.count,
                node_data: NodeData::Leaf(e.symbol),
            })
            .collect();

        // (weight, arena index). Arena indices grow with every push, so the index is also
        // the insertion sequence used to break weight ties.
        let mut queue: BinaryHeap<Reverse<(usize, usize)>> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| Reverse((n.weight, i)))
            .collect();

        let mut merges = 0;
        while queue.len() > 1 {
            let (Some(Reverse((w1, first))), Some(Reverse((w2, second)))) =
                (queue.pop(), queue.pop())
            else {
                break;
            };
            // The entry popped second takes the '0' branch, the first popped takes '1'.
            nodes.push(Node {
                weight: w1 + w2,
                node_data: NodeData::Kids(second, first),
            });
            let merged = nodes.len() - 1;
            queue.push(Reverse((w1 + w2, merged)));
            merges += 1;
        }

        let root = nodes.len() - 1;
        debug!(
            "Huffman tree: {} symbols, {} merges, weight {}",
            freqs.len(),
            merges,
            nodes[root].weight
        );
        Ok(Self { nodes, root })
    }

    /// Total weight at the root, equal to the input length.
    pub fn weight(&self) -> usize {
        self.nodes[self.root].weight
    }

    /// Number of edges on the longest root to leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            match self.nodes[node].node_data {
                NodeData::Kids(zero, one) => {
                    stack.push((zero, depth + 1));
                    stack.push((one, depth + 1));
                }
                NodeData::Leaf(_) => deepest = deepest.max(depth),
            }
        }
        deepest
    }

    /// Walk the tree from the root, accumulating the path to each leaf as its codeword.
    /// A tree with a single leaf gives that symbol the one bit codeword "0".
    pub fn codewords(&self) -> FxHashMap<char, BitSequence> {
        let mut codes = FxHashMap::default();
        if let NodeData::Leaf(symbol) = self.nodes[self.root].node_data {
            codes.insert(symbol, BitSequence::from_iter([false]));
            return codes;
        }
        return_leaves(&self.nodes, self.root, &mut BitSequence::new(), &mut codes);
        codes
    }

    /// Codewords as a CodeTable, in the frequency table's symbol order.
    pub fn code_table(&self, freqs: &FrequencyTable) -> Result<CodeTable> {
        let mut codes = self.codewords();
        let entries = freqs
            .entries()
            .iter()
            .map(|e| {
                codes
                    .remove(&e.symbol)
                    .map(|code| (e.symbol, code))
                    .ok_or(CodingError::UnknownSymbol(e.symbol))
            })
            .collect::<Result<Vec<_>>>()?;
        CodeTable::from_codewords(entries)
    }
}

/// Recursively walk the tree, recording the path (0 = first child, 1 = second) at each leaf.
fn return_leaves(
    nodes: &[Node],
    node: usize,
    path: &mut BitSequence,
    codes: &mut FxHashMap<char, BitSequence>,
) {
    match nodes[node].node_data {
        NodeData::Kids(zero, one) => {
            path.push(false);
            return_leaves(nodes, zero, path, codes);
            path.pop();
            path.push(true);
            return_leaves(nodes, one, path, codes);
            path.pop();
        }
        NodeData::Leaf(symbol) => {
            trace!("{:?} -> {}", symbol, path);
            codes.insert(symbol, path.clone());
        }
    }
}

/// Build a Huffman code table for a complete symbol sequence.
pub fn build_huffman_table(input: &str) -> Result<CodeTable> {
    let freqs = FrequencyTable::build(input)?;
    HuffmanTree::from_frequencies(&freqs)?.code_table(&freqs)
}
