use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use super::code_table::CodeTable;
use super::PSEUDO_EOF;
use crate::tools::freq_count::Counts;

/// One node of a huffman tree. Internal nodes own exactly two children.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Node {
    Kids(Box<Node>, Box<Node>),
    Leaf(u16),
}

impl Node {
    /// Number of leaves at or below this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Kids(left, right) => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path below this node.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Kids(left, right) => 1 + left.depth().max(right.depth()),
        }
    }
}

/// A node waiting in the merge heap, with the weight that orders it.
#[derive(Eq, PartialEq, Debug)]
struct Weighted {
    weight: u64,
    /// Tie breaker: leaves use their symbol, merged nodes count up from PSEUDO_EOF + 1.
    order: u16,
    node: Node,
}

impl Ord for Weighted {
    /// Sort by decreasing weight and decreasing order, so the max-heap pops the lightest node.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Weighted {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A complete huffman tree.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct HuffTree {
    root: Node,
}

impl HuffTree {
    /// Build the tree for a set of symbol counts. Every byte value with a non-zero count gets a
    /// leaf, and PSEUDO_EOF always gets one (with a weight of at least 1).
    pub fn from_counts(counts: &Counts) -> Self {
        let mut heap: BinaryHeap<Weighted> = counts
            .iter()
            .enumerate()
            .take(PSEUDO_EOF as usize)
            .filter(|(_, count)| **count > 0)
            .map(|(sym, &count)| Weighted {
                weight: count,
                order: sym as u16,
                node: Node::Leaf(sym as u16),
            })
            .collect();
        heap.push(Weighted {
            weight: counts[PSEUDO_EOF as usize].max(1),
            order: PSEUDO_EOF,
            node: Node::Leaf(PSEUDO_EOF),
        });
        debug!("Building tree from {} symbols", heap.len());

        // Merge the two lightest nodes until one is left. The first one out goes left.
        let mut next_order = PSEUDO_EOF + 1;
        while heap.len() > 1 {
            let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
                break;
            };
            heap.push(Weighted {
                weight: left.weight + right.weight,
                order: next_order,
                node: Node::Kids(Box::new(left.node), Box::new(right.node)),
            });
            next_order += 1;
        }
        // The PSEUDO_EOF leaf means the heap always holds a root here
        let root = heap
            .pop()
            .map(|last| last.node)
            .unwrap_or(Node::Leaf(PSEUDO_EOF));
        HuffTree { root }
    }

    /// Wrap an already assembled node as a tree.
    pub fn from_root(root: Node) -> Self {
        HuffTree { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Derive the code for every leaf of the tree.
    pub fn code_table(&self) -> CodeTable {
        CodeTable::from_tree(self)
    }
}
