//! Pre-order bit encoding of a tree's shape.
//!
//! Each node starts with a tag bit. A leaf is `1` followed by the 8 bits of
//! its symbol. An internal node is `0` followed by its "0" subtree and then
//! its "1" subtree.

use crate::ALPHABET_SIZE;
use crate::bits::{BitSink, BitSource};
use crate::error::HuffmanError;
use crate::node::Node;
use crate::tree::HuffmanTree;
use biterator::Bit;
use log::{debug, trace};
use std::io;

/// Deepest nesting of internal nodes a tree over 256 distinct leaves can
/// have.
pub const MAX_TREE_DEPTH: usize = ALPHABET_SIZE - 1;

impl HuffmanTree {
    pub fn serialize<S: BitSink>(&self, sink: &mut S) -> io::Result<()> {
        write_node(&self.root, sink)
    }

    pub fn deserialize<S: BitSource>(source: &mut S) -> Result<Self, HuffmanError> {
        let mut seen = [false; ALPHABET_SIZE];
        let root = read_node(source, 0, &mut seen)?;
        debug!(
            "Read tree with {} leaves, depth {}",
            root.leaf_count(),
            root.depth()
        );
        Ok(Self::from_root(root))
    }
}

fn write_node<S: BitSink>(node: &Node, sink: &mut S) -> io::Result<()> {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("leaf {symbol:#04x}");
            sink.write_bit(Bit::One)?;
            sink.write_byte(*symbol)
        }
        Node::Internal { zero, one, .. } => {
            sink.write_bit(Bit::Zero)?;
            write_node(zero, sink)?;
            write_node(one, sink)
        }
    }
}

fn read_node<S: BitSource>(
    source: &mut S,
    depth: usize,
    seen: &mut [bool; ALPHABET_SIZE],
) -> Result<Node, HuffmanError> {
    match source.read_bit()?.ok_or(HuffmanError::TruncatedStream)? {
        Bit::One => {
            let symbol = source.read_byte()?.ok_or(HuffmanError::TruncatedStream)?;
            if std::mem::replace(&mut seen[symbol as usize], true) {
                return Err(HuffmanError::MalformedTree("symbol appears on two leaves"));
            }
            trace!("leaf {symbol:#04x} at depth {depth}");
            Ok(Node::leaf(symbol, 0))
        }
        Bit::Zero => {
            if depth >= MAX_TREE_DEPTH {
                return Err(HuffmanError::MalformedTree("tree is too deep"));
            }
            let zero = read_node(source, depth + 1, seen)?;
            let one = read_node(source, depth + 1, seen)?;
            Ok(Node::join(zero, one))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::example::sample_table;
    use crate::frequency::FrequencyTable;
    use biterator::Bit::{One, Zero};
    use quickcheck_macros::quickcheck;

    fn serialized(tree: &HuffmanTree) -> Vec<Bit> {
        let mut bits: Vec<Bit> = Vec::new();
        tree.serialize(&mut bits).unwrap();
        bits
    }

    fn byte_bits(byte: u8) -> Vec<Bit> {
        let mut bits: Vec<Bit> = Vec::new();
        bits.write_byte(byte).unwrap();
        bits
    }

    /// Same leaf symbols at the same positions, frequencies ignored.
    fn same_shape(a: &Node, b: &Node) -> bool {
        match (a, b) {
            (Node::Leaf { symbol: x, .. }, Node::Leaf { symbol: y, .. }) => x == y,
            (
                Node::Internal {
                    zero: z1, one: o1, ..
                },
                Node::Internal {
                    zero: z2, one: o2, ..
                },
            ) => same_shape(z1, z2) && same_shape(o1, o2),
            _ => false,
        }
    }

    #[test]
    fn lone_leaf_is_nine_bits() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"x")).unwrap();
        let mut expected = vec![One];
        expected.extend(byte_bits(b'x'));
        assert_eq!(serialized(&tree), expected);
    }

    #[test]
    fn preorder_layout() {
        let table: FrequencyTable = [(b'a', 1), (b'b', 2)].into_iter().collect();
        let tree = HuffmanTree::build(&table).unwrap();
        let mut expected = vec![Zero, One];
        expected.extend(byte_bits(b'a'));
        expected.push(One);
        expected.extend(byte_bits(b'b'));
        assert_eq!(serialized(&tree), expected);
    }

    #[test_log::test]
    fn sample_tree_round_trips() {
        let tree = HuffmanTree::build(&sample_table()).unwrap();
        let bits = serialized(&tree);
        // 6 leaves * 9 bits + 5 internal tags
        assert_eq!(bits.len(), 59);
        let read = HuffmanTree::deserialize(&mut bits.into_iter()).unwrap();
        assert!(same_shape(tree.root(), read.root()));
        for (symbol, _) in sample_table().present() {
            assert_eq!(tree.codeword(symbol), read.codeword(symbol));
        }
        assert_eq!(read.root().frequency(), 0);
    }

    #[test]
    fn error_on_truncated_tree() {
        let tree = HuffmanTree::build(&sample_table()).unwrap();
        let mut bits = serialized(&tree);
        bits.pop();
        assert!(matches!(
            HuffmanTree::deserialize(&mut bits.into_iter()),
            Err(HuffmanError::TruncatedStream)
        ));
    }

    #[test]
    fn error_on_empty_source() {
        assert!(matches!(
            HuffmanTree::deserialize(&mut Vec::<Bit>::new().into_iter()),
            Err(HuffmanError::TruncatedStream)
        ));
    }

    #[test]
    fn error_on_duplicate_leaf() {
        let mut bits = vec![Zero, One];
        bits.extend(byte_bits(b'q'));
        bits.push(One);
        bits.extend(byte_bits(b'q'));
        assert!(matches!(
            HuffmanTree::deserialize(&mut bits.into_iter()),
            Err(HuffmanError::MalformedTree(_))
        ));
    }

    #[test]
    fn error_on_runaway_depth() {
        let bits: Vec<Bit> = (0..MAX_TREE_DEPTH + 1).map(|_| Zero).collect();
        assert!(matches!(
            HuffmanTree::deserialize(&mut bits.into_iter()),
            Err(HuffmanError::MalformedTree(_))
        ));
    }

    #[quickcheck]
    fn serialization_round_trips(bytes: Vec<u8>) -> bool {
        let Ok(tree) = HuffmanTree::build(&FrequencyTable::from_bytes(&bytes)) else {
            return bytes.is_empty();
        };
        let bits = serialized(&tree);
        match HuffmanTree::deserialize(&mut bits.into_iter()) {
            Ok(read) => same_shape(tree.root(), read.root()),
            Err(_) => false,
        }
    }
}
