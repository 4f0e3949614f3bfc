//! The huffman module builds prefix codes by greedy merging of the two lightest subtrees.
//!
//! Symbol weights come from a FrequencyTable. The tree is kept in an arena (a Vec of nodes that
//! refer to their children by index), and codewords are read off by one walk from the root.
//!
//! Equal weights are resolved by insertion order, so the same input always produces the same
//! table.
//!

pub mod huffman;
