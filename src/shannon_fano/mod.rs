//! The shannon_fano module builds prefix codes top down.
//!
//! Symbols are sorted by descending probability. The sorted list is then split recursively
//! into two parts whose probability sums are as close as possible: the left part gets a 0
//! appended to its codes and the right part a 1. Splitting works on index ranges of the one
//! sorted array, with a prefix-sum table for the range sums.
//!

pub mod shannon_fano;
