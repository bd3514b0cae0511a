//! Huffman file compression with a self-describing header.
//!
//! Each file is coded with a huffman tree built from its own byte counts. The tree is stored at
//! the front of the compressed file, so no outside dictionary is needed to decompress it. An
//! extra end-of-message symbol (PSEUDO_EOF) closes the coded body.
//!
//! Layout of a compressed file, bit for bit:
//! - 32 bit magic number `0xface8201`.
//! - The tree: pre-order, `0` for an internal node, `1` plus a 9 bit symbol for a leaf.
//! - The body: the code of every input byte in order, then the code of PSEUDO_EOF.
//! - Zero bits up to the next byte boundary.
//!
//! Basic usage to compress and restore some data is as follows:
//!
//! ```rust
//! use huffproc::{compress_bytes, decompress_bytes};
//!
//! let packed = compress_bytes(b"abracadabra")?;
//! assert_eq!(decompress_bytes(&packed)?, b"abracadabra");
//! # Ok::<(), huffproc::HuffError>(())
//! ```
//!
//! Streams work the same way through `compress` and `decompress`. The compress input has to be
//! seekable because it is read twice.
//!
#![warn(rust_2018_idioms)]

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::{compress, compress_bytes};
pub use compression::decompress::{decompress, decompress_bytes};
pub use compression::Report;
pub use error::{HuffError, Result};
pub use huffman_coding::tree::HuffTree;
pub use tools::options::{init_logger, HuffOpts, Verbosity};
