use std::io::{Read, Write};

use log::trace;

use super::tree::{HuffTree, Node};
use super::{LEAF_BITS, PSEUDO_EOF};
use crate::bitstream::{bitreader::BitReader, bitwriter::BitWriter};
use crate::error::{HuffError, Result};

/// No valid tree nests deeper than this: 257 distinct leaves give at most 256 internal levels.
const MAX_DEPTH: usize = PSEUDO_EOF as usize;

impl HuffTree {
    /// Write the tree shape and leaf values to the stream in pre-order, left child first.
    pub fn write_header<W: Write>(&self, bw: &mut BitWriter<W>) -> std::io::Result<()> {
        let start = bw.bits_written();
        write_node(self.root(), bw)?;
        trace!("Tree header is {} bits", bw.bits_written() - start);
        Ok(())
    }

    /// Rebuild a tree from a header written by write_header().
    pub fn read_header<R: Read>(br: &mut BitReader<R>) -> Result<HuffTree> {
        let mut seen = [false; PSEUDO_EOF as usize + 1];
        let root = read_node(br, &mut seen, 0)?;
        Ok(HuffTree::from_root(root))
    }
}

fn write_node<W: Write>(node: &Node, bw: &mut BitWriter<W>) -> std::io::Result<()> {
    match node {
        Node::Leaf(sym) => {
            bw.out(1, 1)?;
            bw.out(LEAF_BITS, *sym as u32)
        }
        Node::Kids(left, right) => {
            bw.out(1, 0)?;
            write_node(left, bw)?;
            write_node(right, bw)
        }
    }
}

fn read_node<R: Read>(br: &mut BitReader<R>, seen: &mut [bool], depth: usize) -> Result<Node> {
    if depth > MAX_DEPTH {
        return Err(HuffError::CorruptTree(format!(
            "tree nests deeper than {} levels",
            MAX_DEPTH
        )));
    }
    match br.bit()?.ok_or(HuffError::TruncatedTree)? {
        0 => {
            // Same order as write_node: left subtree first
            let left = read_node(br, seen, depth + 1)?;
            let right = read_node(br, seen, depth + 1)?;
            Ok(Node::Kids(Box::new(left), Box::new(right)))
        }
        _ => {
            let sym = br.bint(LEAF_BITS)?.ok_or(HuffError::TruncatedTree)? as u16;
            if sym > PSEUDO_EOF {
                return Err(HuffError::CorruptTree(format!(
                    "leaf value {} is out of range",
                    sym
                )));
            }
            if seen[sym as usize] {
                return Err(HuffError::CorruptTree(format!(
                    "leaf value {} appears twice",
                    sym
                )));
            }
            seen[sym as usize] = true;
            Ok(Node::Leaf(sym))
        }
    }
}
