//! The compression module drives both directions of the huffman processor.
//!
//! Compression reads the input twice:
//! - Frequency count: one pass over every byte, with PSEUDO_EOF forced to a count of 1.
//! - Tree and code table: built from the counts.
//! - Header: the 32 bit magic number followed by the tree.
//! - Body: the input is rewound, every byte is replaced by its code, and the code of PSEUDO_EOF
//!   closes the body.
//!
//! Decompression checks the magic number, rebuilds the tree from the header and walks it one
//! body bit at a time until it reaches the PSEUDO_EOF leaf.
//!
//! Output is padded to a whole byte only once, when the operation finishes. After an error the
//! output is incomplete and must be thrown away.
//!
use std::fmt::{Display, Formatter};

pub mod compress;
pub mod decompress;

/// What one compress or decompress call moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    /// Bytes consumed from the input.
    pub bytes_in: u64,
    /// Bytes produced on the output, padding included.
    pub bytes_out: u64,
    /// Bits in the tree header, not counting the magic number.
    pub header_bits: u64,
    /// Bits in the coded body, PSEUDO_EOF code included.
    pub body_bits: u64,
}

impl Report {
    /// Output size as a fraction of the input size (0 for empty input).
    pub fn ratio(&self) -> f64 {
        if self.bytes_in == 0 {
            return 0.0;
        }
        self.bytes_out as f64 / self.bytes_in as f64
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} bytes in, {} bytes out, header {} bits, body {} bits",
            self.bytes_in, self.bytes_out, self.header_bits, self.body_bits
        )
    }
}
