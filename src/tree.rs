use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::frequency::FrequencyMap;
use crate::queue::{PriorityQueue, SortedArray};

#[derive(Debug, Clone)]
pub enum NodeType {
    Leaf(char),
    Internal(Box<Node>, Box<Node>),
}

/// A node of the Huffman tree.
///
/// A leaf carries one source character; an internal node owns exactly two
/// children and its `symbol` is the left child's symbol followed by the right
/// child's. Nodes order by weight, then by symbol.
#[derive(Debug, Clone)]
pub struct Node {
    node_type: NodeType,
    symbol: String,
    weight: u64,
}

impl Node {
    pub fn new_leaf(symbol: char, weight: u64) -> Self {
        Node {
            node_type: NodeType::Leaf(symbol),
            symbol: symbol.to_string(),
            weight,
        }
    }

    pub fn new_internal(left: Node, right: Node) -> Self {
        let symbol = format!("{}{}", left.symbol, right.symbol);
        Node {
            weight: left.weight + right.weight,
            symbol,
            node_type: NodeType::Internal(Box::new(left), Box::new(right)),
        }
    }

    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_type, NodeType::Leaf(_))
    }

    /// The `(left, right)` children of an internal node.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match &self.node_type {
            NodeType::Leaf(_) => None,
            NodeType::Internal(left, right) => Some((left, right)),
        }
    }

    fn fmt_branch(&self, f: &mut fmt::Formatter<'_>, depth: usize, label: &str) -> fmt::Result {
        let indent = "  ".repeat(depth);
        writeln!(f, "{indent}{label}-> {}:{}", self.symbol, self.weight)?;
        if let NodeType::Internal(left, right) = &self.node_type {
            left.fmt_branch(f, depth + 1, "L")?;
            right.fmt_branch(f, depth + 1, "R")?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_branch(f, 0, "root")
    }
}

impl Eq for Node {}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.symbol == other.symbol
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.symbol.cmp(&other.symbol))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for `freqs` using the array-backed queue.
pub fn build(freqs: &FrequencyMap) -> Result<Node> {
    build_with::<SortedArray<Node>>(freqs)
}

/// Build the Huffman tree for `freqs` on top of the queue backend `Q`.
///
/// The two smallest nodes are merged until a single root remains; the smaller
/// one becomes the left child. A single distinct symbol yields a lone leaf.
///
/// # Errors
/// Returns `Error::EmptyInput` if `freqs` is empty.
pub fn build_with<Q>(freqs: &FrequencyMap) -> Result<Node>
where
    Q: PriorityQueue<Node> + Default,
{
    if freqs.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut pqueue = Q::default();
    for (&symbol, &freq) in freqs.iter() {
        pqueue.insert(Node::new_leaf(symbol, freq));
    }

    while pqueue.len() > 1 {
        let ln = pqueue.remove_smallest()?;
        let rn = pqueue.remove_smallest()?;
        pqueue.insert(Node::new_internal(ln, rn));
    }

    pqueue.remove_smallest()
}
