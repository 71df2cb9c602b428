//! Whole-stream compression.
//!
//! A compressed stream is laid out as:
//!
//! 1. the original length as a 4-byte big-endian integer, omitted when the
//!    input is empty (a stream that ends inside it also decodes as empty);
//! 2. the serialized tree;
//! 3. the codeword of every input byte, back to back;
//! 4. zero bits up to the next byte boundary.

use crate::bits::{BitReader, BitWriter};
use crate::error::HuffmanError;
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;
use log::{debug, info};
use std::io::{self, Read, Write};

/// Size of the length header, in bytes.
pub const LENGTH_HEADER_BYTES: usize = 4;

/// Compress `input` into `output`, returning `output` when done.
pub fn compress<W: Write>(input: &[u8], mut output: W) -> Result<W, HuffmanError> {
    if input.is_empty() {
        debug!("Empty input, nothing to write");
        output.flush()?;
        return Ok(output);
    }
    let length =
        u32::try_from(input.len()).map_err(|_| HuffmanError::InputTooLarge(input.len()))?;
    let tree = HuffmanTree::build(&FrequencyTable::from_bytes(input))?;
    output.write_all(&length.to_be_bytes())?;

    let mut writer = BitWriter::new(output);
    tree.serialize(&mut writer)?;
    let tree_bits = writer.bits_written();
    tree.encode_all(input, &mut writer)?;
    info!(
        "Encoded {} bytes with {} symbols: {} tree bits, {} body bits",
        input.len(),
        tree.leaf_count(),
        tree_bits,
        writer.bits_written() - tree_bits
    );
    Ok(writer.finish()?)
}

/// Decompress the stream read from `input` into `output`, returning
/// `output` when done.
pub fn decompress<R: Read, W: Write>(mut input: R, mut output: W) -> Result<W, HuffmanError> {
    let length = read_length(&mut input)? as usize;
    if length == 0 {
        debug!("No length header, output is empty");
        output.flush()?;
        return Ok(output);
    }

    let mut reader = BitReader::new(input);
    let tree = HuffmanTree::deserialize(&mut reader)?;
    let decoded = tree.decode_all(length, &mut reader)?;
    output.write_all(&decoded)?;
    output.flush()?;
    info!("Decoded {length} bytes with {} symbols", tree.leaf_count());
    Ok(output)
}

pub fn compress_to_vec(input: &[u8]) -> Result<Vec<u8>, HuffmanError> {
    compress(input, Vec::new())
}

pub fn decompress_from_slice(input: &[u8]) -> Result<Vec<u8>, HuffmanError> {
    decompress(input, Vec::new())
}

/// Read the length header. A stream that ends anywhere inside the header
/// holds nothing.
fn read_length<R: Read>(input: &mut R) -> Result<u32, HuffmanError> {
    let mut header = [0u8; LENGTH_HEADER_BYTES];
    let mut filled = 0;
    while filled < header.len() {
        match input.read(&mut header[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    if filled < LENGTH_HEADER_BYTES {
        debug!("Stream ended after {filled} header bytes");
        return Ok(0);
    }
    Ok(u32::from_be_bytes(header))
}
