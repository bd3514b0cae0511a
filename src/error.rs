//! Error types for compressing and decompressing huffman files.

use std::io;

use crate::huffman_coding::HUFF_TREE;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, HuffError>;

/// Every failure is fatal for the operation that raised it. Whatever was written to the
/// output before the error must be treated as invalid.
#[derive(Debug, thiserror::Error)]
pub enum HuffError {
    /// The leading 32 bits are missing or are not the huffman magic number.
    #[error("illegal header: expected magic {:#010x}, found {}", HUFF_TREE, describe_magic(.found))]
    MalformedHeader { found: Option<u32> },

    /// The bitstream ended in the middle of the tree header.
    #[error("tree header ended before the tree was complete")]
    TruncatedTree,

    /// The tree header is complete but does not describe a usable tree.
    #[error("corrupt tree header: {0}")]
    CorruptTree(String),

    /// The body ended without reaching the end-of-message code.
    #[error("bad input, no PSEUDO_EOF: body ended after {decoded} decoded bytes")]
    TruncatedBody { decoded: u64 },

    /// The second compression pass found a byte the counting pass never saw.
    #[error("input changed between passes: byte {0:#04x} has no code")]
    InputChanged(u8),

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn describe_magic(found: &Option<u32>) -> String {
    match found {
        Some(magic) => format!("{:#010x}", magic),
        None => "end of stream".to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn malformed_header_display_test() {
        let err = HuffError::MalformedHeader {
            found: Some(0xdeadbeef),
        };
        assert_eq!(
            err.to_string(),
            "illegal header: expected magic 0xface8201, found 0xdeadbeef"
        );
        let err = HuffError::MalformedHeader { found: None };
        assert_eq!(
            err.to_string(),
            "illegal header: expected magic 0xface8201, found end of stream"
        );
    }

    #[test]
    fn truncated_display_test() {
        assert_eq!(
            HuffError::TruncatedTree.to_string(),
            "tree header ended before the tree was complete"
        );
        assert_eq!(
            HuffError::TruncatedBody { decoded: 12 }.to_string(),
            "bad input, no PSEUDO_EOF: body ended after 12 decoded bytes"
        );
        assert_eq!(
            HuffError::InputChanged(0x41).to_string(),
            "input changed between passes: byte 0x41 has no code"
        );
    }

    #[test]
    fn io_error_test() {
        let err: HuffError = io::Error::new(io::ErrorKind::Other, "disk on fire").into();
        assert!(matches!(err, HuffError::Io(_)));
        assert_eq!(err.to_string(), "disk on fire");
    }
}
