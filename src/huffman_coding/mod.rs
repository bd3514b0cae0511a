//! The huffman module builds the code used by the huffman processor and moves the tree in and
//! out of the file header.
//!
//! A file is coded with one tree, built from the byte counts of that same file. Every byte value
//! that occurs gets a leaf, and one more leaf is always added for PSEUDO_EOF, a symbol outside
//! the byte range that marks the end of the body. Because of that leaf the decoder never needs
//! to know the original length.
//!
//! The tree travels in the header as a pre-order walk: a 0 bit for an internal node followed by
//! its left and then its right subtree, or a 1 bit and a 9 bit symbol value for a leaf. The
//! walk needs no node count. Reader and writer both visit the left child first.
//!

pub mod code_table;
pub mod header;
pub mod tree;

/// Width of one raw input symbol.
pub const BITS_PER_WORD: u8 = 8;
/// Width of the magic number.
pub const BITS_PER_INT: u8 = 32;
/// Number of raw byte values.
pub const ALPH_SIZE: usize = 1 << BITS_PER_WORD;
/// End-of-message symbol, one past the last byte value.
pub const PSEUDO_EOF: u16 = ALPH_SIZE as u16;
/// Width of a leaf value in the tree header, wide enough for PSEUDO_EOF.
pub const LEAF_BITS: u8 = BITS_PER_WORD + 1;
/// Base of the huffman magic numbers.
pub const HUFF_NUMBER: u32 = 0xface8200;
/// Magic number for files that carry their tree in the header.
pub const HUFF_TREE: u32 = HUFF_NUMBER | 1;
