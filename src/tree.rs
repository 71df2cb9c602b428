use crate::ALPHABET_SIZE;
use crate::encoder::{Codeword, codebook};
use crate::error::HuffmanError;
use crate::frequency::FrequencyTable;
use crate::heap::{Heap, HeapOrder};
use crate::node::Node;
use log::debug;
use std::cmp::Ordering;

/// A Huffman coding tree together with the codeword of every symbol it
/// holds.
///
/// Trees are either built from a [`FrequencyTable`] or read back with
/// [`HuffmanTree::deserialize`]. They are immutable once constructed.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    pub(crate) root: Node,
    pub(crate) codebook: Vec<Option<Codeword>>,
}

/// A subtree waiting in the construction queue.
///
/// `lead` is the lead symbol of the subtree's "0" side, so no two queued
/// subtrees share one and (frequency, lead) orders them totally.
struct Pending {
    frequency: u64,
    lead: u8,
    node: Node,
}

impl Pending {
    fn leaf(symbol: u8, frequency: u64) -> Self {
        Self {
            frequency,
            lead: symbol,
            node: Node::leaf(symbol, frequency),
        }
    }

    fn merge(zero: Pending, one: Pending) -> Self {
        Self {
            frequency: zero.frequency + one.frequency,
            lead: zero.lead,
            node: Node::merge(zero.node, one.node),
        }
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then(self.lead.cmp(&other.lead))
    }
}

impl HuffmanTree {
    /// Build the coding tree for `table`.
    ///
    /// The two lowest-frequency subtrees are merged until one remains, the
    /// first one removed taking the "0" slot. Frequency ties go to the lower
    /// symbol. Fails with `EmptyTable` when every count is zero, and with
    /// `FrequencyOverflow` when the counts do not sum within a `u64`.
    pub fn build(table: &FrequencyTable) -> Result<Self, HuffmanError> {
        let total = table.total()?;
        let mut queue = Heap::with_capacity(ALPHABET_SIZE, HeapOrder::Min);
        for (symbol, count) in table.present() {
            queue.add(Pending::leaf(symbol, count));
        }
        let leaves = queue.size();

        let root = loop {
            let first = queue.remove().map_err(|_| HuffmanError::EmptyTable)?;
            // A lone leaf is its own root
            let Ok(second) = queue.remove() else {
                break first;
            };
            let merged = Pending::merge(first, second);
            if merged.frequency == total {
                break merged;
            }
            queue.add(merged);
        };

        debug!(
            "Built tree over {leaves} symbols, root frequency {}",
            root.frequency
        );
        Ok(Self::from_root(root.node))
    }

    pub(crate) fn from_root(root: Node) -> Self {
        let codebook = codebook(&root);
        Self { root, codebook }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of distinct symbols the tree can code.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// The codeword assigned to `symbol`, if it is in the tree.
    pub fn codeword(&self, symbol: u8) -> Option<&Codeword> {
        self.codebook[symbol as usize].as_ref()
    }
}
