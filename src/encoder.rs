use crate::ALPHABET_SIZE;
use crate::bits::{BitSink, bit_from_bool};
use crate::error::HuffmanError;
use crate::node::Node;
use crate::tree::HuffmanTree;
use biterator::Bit;
use std::fmt;

/// The root-to-leaf path of a symbol. `false` steps to the "0" child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codeword {
    path: Vec<bool>,
}

impl Codeword {
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The bits of the codeword, root side first.
    pub fn bits(&self) -> impl Iterator<Item = Bit> + '_ {
        self.path.iter().map(|&one| bit_from_bool(one))
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &one in &self.path {
            f.write_str(if one { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Map every leaf under `root` to its codeword.
///
/// A tree that is a single leaf codes its symbol as one `Zero` bit, so
/// every symbol costs at least one bit on the wire.
pub(crate) fn codebook(root: &Node) -> Vec<Option<Codeword>> {
    let mut book = vec![None; ALPHABET_SIZE];
    match root {
        Node::Leaf { symbol, .. } => {
            book[*symbol as usize] = Some(Codeword { path: vec![false] });
        }
        Node::Internal { .. } => assign(root, &mut Vec::new(), &mut book),
    }
    book
}

fn assign(node: &Node, path: &mut Vec<bool>, book: &mut [Option<Codeword>]) {
    match node {
        Node::Leaf { symbol, .. } => {
            book[*symbol as usize] = Some(Codeword { path: path.clone() });
        }
        Node::Internal { zero, one, .. } => {
            path.push(false);
            assign(zero, path, book);
            path.pop();
            path.push(true);
            assign(one, path, book);
            path.pop();
        }
    }
}

impl HuffmanTree {
    /// Write the codeword of `symbol` to `sink`.
    pub fn encode_symbol<S: BitSink>(&self, symbol: u8, sink: &mut S) -> Result<(), HuffmanError> {
        let codeword = self
            .codeword(symbol)
            .ok_or(HuffmanError::UnknownSymbol(symbol))?;
        for bit in codeword.bits() {
            sink.write_bit(bit)?;
        }
        Ok(())
    }

    /// Encode a whole slice of symbols.
    pub fn encode_all<S: BitSink>(&self, symbols: &[u8], sink: &mut S) -> Result<(), HuffmanError> {
        for &symbol in symbols {
            self.encode_symbol(symbol, sink)?;
        }
        Ok(())
    }
}
