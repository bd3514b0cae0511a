use std::fmt::{Display, Formatter};
use std::io::Write;

use rustc_hash::FxHashMap;

use super::tree::{HuffTree, Node};
use crate::bitstream::bitwriter::BitWriter;

/// A root-to-leaf path: `len` bits, right aligned in `bits`, first step in the highest bit.
/// 0 is a step to the left child, 1 a step to the right.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct Code {
    pub bits: u128,
    pub len: u8,
}

impl Code {
    /// Code for the child one step further down.
    fn push(self, bit: u128) -> Code {
        debug_assert!(self.len < 128, "code deeper than 128 bits");
        Code {
            bits: self.bits << 1 | bit,
            len: self.len + 1,
        }
    }

    /// True if `self` is a prefix of `other` (every code is a prefix of itself).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }

    /// Put the code on the stream, high bits first, in pieces of at most 32 bits.
    pub fn write_to<W: Write>(&self, bw: &mut BitWriter<W>) -> std::io::Result<()> {
        let mut remaining = self.len;
        while remaining > 0 {
            let take = remaining.min(32);
            remaining -= take;
            bw.out(take, (self.bits >> remaining) as u32)?;
        }
        Ok(())
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in (0..self.len).rev() {
            write!(f, "{}", (self.bits >> i) & 1)?;
        }
        Ok(())
    }
}

/// Symbol to code lookup for one tree.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: FxHashMap<u16, Code>,
}

impl CodeTable {
    /// Walk the tree depth first, left before right, recording the path to every leaf.
    ///
    /// A tree that is a single leaf has no paths at all. That leaf gets the one bit code `0`,
    /// which the decoder accepts as a step from the root to itself.
    pub fn from_tree(tree: &HuffTree) -> Self {
        let mut table = CodeTable::default();
        match tree.root() {
            Node::Leaf(sym) => {
                table.codes.insert(*sym, Code { bits: 0, len: 1 });
            }
            root => table.walk(root, Code::default()),
        }
        table
    }

    fn walk(&mut self, node: &Node, code: Code) {
        match node {
            Node::Leaf(sym) => {
                self.codes.insert(*sym, code);
            }
            Node::Kids(left, right) => {
                self.walk(left, code.push(0));
                self.walk(right, code.push(1));
            }
        }
    }

    pub fn get(&self, sym: u16) -> Option<&Code> {
        self.codes.get(&sym)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All (symbol, code) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, Code)> {
        let mut pairs: Vec<(u16, Code)> = self.codes.iter().map(|(&s, &c)| (s, c)).collect();
        pairs.sort_unstable_by_key(|&(sym, _)| sym);
        pairs.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::{ALPH_SIZE, PSEUDO_EOF};
    use crate::tools::freq_count::freqs_from_slice;

    fn code(s: &str) -> Code {
        s.chars().fold(Code::default(), |c, b| c.push(b as u128 - '0' as u128))
    }

    #[test]
    fn display_keeps_leading_zeros_test() {
        assert_eq!(code("0010").to_string(), "0010");
        assert_eq!(code("0010").bits, 2);
        assert_eq!(code("0010").len, 4);
    }

    #[test]
    fn prefix_test() {
        assert!(code("01").is_prefix_of(&code("011")));
        assert!(code("011").is_prefix_of(&code("011")));
        assert!(!code("011").is_prefix_of(&code("01")));
        assert!(!code("10").is_prefix_of(&code("011")));
    }

    #[test]
    fn hand_built_tree_test() {
        let tree = HuffTree::from_root(Node::Kids(
            Box::new(Node::Leaf(b'a' as u16)),
            Box::new(Node::Kids(
                Box::new(Node::Leaf(PSEUDO_EOF)),
                Box::new(Node::Leaf(b'b' as u16)),
            )),
        ));
        let table = tree.code_table();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(b'a' as u16).unwrap().to_string(), "0");
        assert_eq!(table.get(PSEUDO_EOF).unwrap().to_string(), "10");
        assert_eq!(table.get(b'b' as u16).unwrap().to_string(), "11");
        assert!(table.get(b'c' as u16).is_none());
    }

    #[test]
    fn single_leaf_gets_one_bit_test() {
        let tree = HuffTree::from_counts(&freqs_from_slice(&[]));
        let table = tree.code_table();
        assert_eq!(table.len(), 1);
        assert_eq!(*table.get(PSEUDO_EOF).unwrap(), Code { bits: 0, len: 1 });
    }

    #[test]
    fn codes_are_prefix_free_test() {
        let data: Vec<u8> = (0..ALPH_SIZE)
            .flat_map(|b| std::iter::repeat(b as u8).take(b % 17 + (b * b) % 31 + 1))
            .collect();
        let table = HuffTree::from_counts(&freqs_from_slice(&data)).code_table();
        assert_eq!(table.len(), ALPH_SIZE + 1);
        let codes: Vec<Code> = table.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn iter_is_sorted_test() {
        let table = HuffTree::from_counts(&freqs_from_slice(b"zebra")).code_table();
        let syms: Vec<u16> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(syms, vec![97, 98, 101, 114, 122, PSEUDO_EOF]);
    }

    #[test]
    fn write_long_code_test() {
        // 40 bits: the top 8 go out first, then the low 32
        let long = Code {
            bits: 0xab_1234_5678,
            len: 40,
        };
        let mut bw = BitWriter::new(Vec::new());
        long.write_to(&mut bw).unwrap();
        assert_eq!(bw.bits_written(), 40);
        assert_eq!(bw.close().unwrap(), [0xab, 0x12, 0x34, 0x56, 0x78]);
    }
}
