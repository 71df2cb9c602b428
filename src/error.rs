use std::io;

/// Errors that can occur while building, encoding or decoding
#[derive(thiserror::Error, Debug)]
pub enum HuffmanError {
    #[error("Frequency table has no symbols")]
    EmptyTable,
    #[error("Frequency counts sum past u64::MAX")]
    FrequencyOverflow,
    #[error("Symbol {0:#04x} has no leaf in the tree")]
    UnknownSymbol(u8),
    #[error("Stream ended before decoding finished")]
    TruncatedStream,
    #[error("Malformed tree: {0}")]
    MalformedTree(&'static str),
    #[error("Input of {0} bytes does not fit the 32-bit length header")]
    InputTooLarge(usize),
    #[error(transparent)]
    Io(#[from] io::Error),
}
