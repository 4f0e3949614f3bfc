//! The tools module provides the helpers around the coders.
//!
//! The tools are:
//! - cli: Command line interface and option handling.
//! - freq_count: Symbol counts and probabilities for one input.
//! - metrics: Entropy, average code length and compression ratio.
//!
pub mod cli;
pub mod freq_count;
pub mod metrics;
