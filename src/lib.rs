//! Byte-oriented Huffman compression.
//!
//! [`HuffmanTree::build`] turns a [`FrequencyTable`] into a coding tree,
//! which can write itself to a bit stream, be read back, and encode or
//! decode single symbols. [`codec`] wraps this into whole-stream
//! compression.

pub mod bits;
pub mod cli;
pub mod codec;
mod decoder;
pub mod encoder;
mod error;
#[cfg(test)]
mod example;
pub mod frequency;
pub mod heap;
pub mod node;
pub mod serialize;
pub mod tree;

pub use codec::{compress, decompress};
pub use encoder::Codeword;
pub use error::HuffmanError;
pub use frequency::FrequencyTable;
pub use tree::HuffmanTree;

/// Number of distinct byte symbols.
pub const ALPHABET_SIZE: usize = 256;
