use biterator::Bit;

/// A node of a Huffman tree.
///
/// Internal nodes always own both children. The child reached on a `Zero`
/// bit is `zero`, the one reached on a `One` bit is `one`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        frequency: u64,
    },
    Internal {
        frequency: u64,
        zero: Box<Node>,
        one: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: u8, frequency: u64) -> Self {
        Node::Leaf { symbol, frequency }
    }

    /// Join two subtrees; the frequency is the sum of theirs.
    ///
    /// The sum must fit a `u64`. The builder guarantees this by checking the
    /// table total before merging, since every subtree sums part of it.
    pub fn merge(zero: Node, one: Node) -> Self {
        Node::Internal {
            frequency: zero.frequency() + one.frequency(),
            zero: Box::new(zero),
            one: Box::new(one),
        }
    }

    /// An internal node whose frequency is not tracked (as read back from
    /// a serialized tree).
    pub fn join(zero: Node, one: Node) -> Self {
        Node::Internal {
            frequency: 0,
            zero: Box::new(zero),
            one: Box::new(one),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn frequency(&self) -> u64 {
        match self {
            Node::Leaf { frequency, .. } | Node::Internal { frequency, .. } => *frequency,
        }
    }

    /// The symbol of a leaf; `None` for internal nodes.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// The child selected by `bit`, or `None` on a leaf.
    pub fn child(&self, bit: &Bit) -> Option<&Node> {
        match (self, bit) {
            (Node::Internal { zero, .. }, Bit::Zero) => Some(&**zero),
            (Node::Internal { one, .. }, Bit::One) => Some(&**one),
            (Node::Leaf { .. }, _) => None,
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { zero, one, .. } => zero.leaf_count() + one.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path in this subtree.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { zero, one, .. } => 1 + zero.depth().max(one.depth()),
        }
    }
}
