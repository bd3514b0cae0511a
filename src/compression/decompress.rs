use std::io::{Read, Write};

use log::{debug, error, info, trace};

use super::Report;
use crate::bitstream::{bitreader::BitReader, bitwriter::BitWriter};
use crate::error::{HuffError, Result};
use crate::huffman_coding::tree::{HuffTree, Node};
use crate::huffman_coding::{BITS_PER_INT, HUFF_TREE, PSEUDO_EOF};
use crate::tools::options::HuffOpts;

/// Decompress a file written by compress() from `input` to `output`.
pub fn decompress<R: Read, W: Write>(opts: &HuffOpts, input: R, output: W) -> Result<Report> {
    let mut br = BitReader::with_capacity(input, opts.buffer_size);
    let mut bw = BitWriter::with_capacity(output, opts.buffer_size);

    let report = unpack(&mut br, &mut bw).map_err(|e| {
        error!("Fatal error: {}", e);
        e
    })?;
    bw.close()?;

    info!("Decompressed: {}", report);
    Ok(report)
}

fn unpack<R: Read, W: Write>(br: &mut BitReader<R>, bw: &mut BitWriter<W>) -> Result<Report> {
    // Look for a valid signature.
    let magic = br.bint(BITS_PER_INT)?;
    if magic != Some(HUFF_TREE) {
        return Err(HuffError::MalformedHeader { found: magic });
    }

    let tree = HuffTree::read_header(br)?;
    let header_bits = br.bits_read() - BITS_PER_INT as u64;
    trace!("Tree header ends at {}", br.loc());
    debug!(
        "Tree has {} leaves, depth {}",
        tree.leaf_count(),
        tree.depth()
    );

    let decoded = decode_body(&tree, br, bw)?;
    Ok(Report {
        bytes_in: br.bits_read().div_ceil(8),
        bytes_out: decoded,
        header_bits,
        body_bits: br.bits_read() - header_bits - BITS_PER_INT as u64,
    })
}

/// Walk the tree one body bit at a time, writing a byte at every leaf, until the PSEUDO_EOF leaf
/// is reached. Returns the number of bytes written.
pub fn decode_body<R: Read, W: Write>(
    tree: &HuffTree,
    br: &mut BitReader<R>,
    bw: &mut BitWriter<W>,
) -> Result<u64> {
    let root = tree.root();
    let mut node = root;
    let mut decoded = 0_u64;

    loop {
        let bit = br.bit()?.ok_or(HuffError::TruncatedBody { decoded })?;
        // A root that is itself a leaf is reached by any single bit
        if let Node::Kids(left, right) = node {
            node = if bit == 0 { left.as_ref() } else { right.as_ref() };
        }
        if let Node::Leaf(sym) = node {
            if *sym == PSEUDO_EOF {
                return Ok(decoded);
            }
            bw.out8(*sym as u8)?;
            decoded += 1;
            node = root;
        }
    }
}

/// Decompress a byte slice in memory with the default options.
pub fn decompress_bytes(packed: &[u8]) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(packed.len() * 2);
    decompress(&HuffOpts::default(), packed, &mut data)?;
    Ok(data)
}

#[cfg(test)]
mod test {
    use super::*;

    fn two_leaf_tree() -> HuffTree {
        HuffTree::from_root(Node::Kids(
            Box::new(Node::Leaf(b'a' as u16)),
            Box::new(Node::Leaf(PSEUDO_EOF)),
        ))
    }

    #[test]
    fn stops_at_pseudo_eof_test() {
        // 0 0 1 then junk that must never be read as data
        let body = [0b0011_1111_u8];
        let mut br = BitReader::new(body.as_slice());
        let mut bw = BitWriter::new(Vec::new());
        let decoded = decode_body(&two_leaf_tree(), &mut br, &mut bw).unwrap();
        assert_eq!(decoded, 2);
        assert_eq!(br.bits_read(), 3);
        assert_eq!(bw.close().unwrap(), b"aa");
    }

    #[test]
    fn missing_pseudo_eof_test() {
        let body = [0_u8];
        let mut br = BitReader::new(body.as_slice());
        let mut bw = BitWriter::new(Vec::new());
        let err = decode_body(&two_leaf_tree(), &mut br, &mut bw).unwrap_err();
        assert!(matches!(err, HuffError::TruncatedBody { decoded: 8 }), "{:?}", err);
    }

    #[test]
    fn single_leaf_root_test() {
        let tree = HuffTree::from_root(Node::Leaf(PSEUDO_EOF));
        let mut br = BitReader::new(b"\0".as_slice());
        let mut bw = BitWriter::new(Vec::new());
        assert_eq!(decode_body(&tree, &mut br, &mut bw).unwrap(), 0);
        assert_eq!(br.bits_read(), 1);

        let mut br = BitReader::new(b"".as_slice());
        let err = decode_body(&tree, &mut br, &mut bw).unwrap_err();
        assert!(matches!(err, HuffError::TruncatedBody { decoded: 0 }));
    }

    #[test]
    fn not_a_huffman_file_test() {
        let err = decompress_bytes(b"BZh91AY&SY").unwrap_err();
        assert!(matches!(
            err,
            HuffError::MalformedHeader {
                found: Some(0x425a6839)
            }
        ));
        assert!(err.to_string().contains("0x425a6839"));
    }
}
