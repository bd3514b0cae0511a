//! The tools module provides helper functions for the huffman processor.
//!
//! The tools are:
//! - freq_count: Frequency count of the input symbols, PSEUDO_EOF included.
//! - options: Verbosity and buffer settings, and the terminal logger.
//!
pub mod freq_count;
pub mod options;
