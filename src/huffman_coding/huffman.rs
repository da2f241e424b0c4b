use log::{debug, trace};

use crate::tools::freq_count::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Payload of a tree node: either two owned children or the symbol of a leaf.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(char),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    /// Sum of the frequencies of every leaf below (and including) this node
    pub weight: usize,
    /// Creation sequence, used to break ties between equal weights
    pub seq: usize,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: usize, seq: usize, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

impl Ord for Node {
    /// Reversed so that `BinaryHeap` pops the lightest node first, and among equal weights the
    /// one created first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the prefix-code tree for a frequency table by repeatedly merging the two lightest nodes.
///
/// Leaves are numbered in first-seen order and each merged node takes the next number, so equal
/// weights leave the queue first-in first-out. The first node popped becomes the left child.
/// Returns None for an empty table. A table with one symbol yields a lone leaf.
pub fn build_tree(freqs: &FrequencyTable) -> Option<Node> {
    let mut queue: BinaryHeap<Node> = freqs
        .iter()
        .enumerate()
        .map(|(seq, (sym, count))| Node::new(count, seq, NodeData::Leaf(sym)))
        .collect();
    debug!("Building tree from {} distinct symbols", queue.len());

    let mut seq = queue.len();
    while queue.len() > 1 {
        // Pull off the two lightest nodes and merge them
        let left_child = queue.pop()?;
        let right_child = queue.pop()?;
        trace!(
            "merge {} (seq {}) + {} (seq {})",
            left_child.weight,
            left_child.seq,
            right_child.weight,
            right_child.seq
        );
        queue.push(Node::new(
            left_child.weight + right_child.weight,
            seq,
            NodeData::Kids(Box::new(left_child), Box::new(right_child)),
        ));
        seq += 1;
    }
    queue.pop()
}
