use crate::bits::BitSource;
use crate::error::HuffmanError;
use crate::node::Node;
use crate::tree::HuffmanTree;
use biterator::Bit;

/// Upper bound on the output buffer reserved ahead of decoding. The symbol
/// count usually comes from an untrusted header.
const MAX_RESERVED_SYMBOLS: usize = 64 * 1024;

impl HuffmanTree {
    /// Decode one symbol by walking from the root, one bit per step, until a
    /// leaf is reached.
    ///
    /// A tree that is a single leaf consumes exactly one bit per symbol,
    /// mirroring the encoder.
    pub fn decode_symbol<S: BitSource>(&self, source: &mut S) -> Result<u8, HuffmanError> {
        let mut node = &self.root;
        if let Node::Leaf { symbol, .. } = node {
            source.read_bit()?.ok_or(HuffmanError::TruncatedStream)?;
            return Ok(*symbol);
        }
        loop {
            match node {
                Node::Leaf { symbol, .. } => return Ok(*symbol),
                Node::Internal { zero, one, .. } => {
                    let bit = source.read_bit()?.ok_or(HuffmanError::TruncatedStream)?;
                    node = match bit {
                        Bit::Zero => &**zero,
                        Bit::One => &**one,
                    };
                }
            }
        }
    }

    /// Decode exactly `count` symbols.
    pub fn decode_all<S: BitSource>(
        &self,
        count: usize,
        source: &mut S,
    ) -> Result<Vec<u8>, HuffmanError> {
        let mut symbols = Vec::with_capacity(count.min(MAX_RESERVED_SYMBOLS));
        for _ in 0..count {
            symbols.push(self.decode_symbol(source)?);
        }
        Ok(symbols)
    }
}
