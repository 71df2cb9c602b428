use crate::ALPHABET_SIZE;
use crate::error::HuffmanError;

/// How many times each byte value occurs in some input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Count every byte of `bytes` in a single pass.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in bytes {
            table.counts[byte as usize] += 1;
        }
        table
    }

    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    pub fn set(&mut self, symbol: u8, count: u64) {
        self.counts[symbol as usize] = count;
    }

    /// The sum of all counts, or `FrequencyOverflow` if it does not fit a
    /// `u64`.
    pub fn total(&self) -> Result<u64, HuffmanError> {
        self.counts
            .iter()
            .try_fold(0u64, |sum, &count| sum.checked_add(count))
            .ok_or(HuffmanError::FrequencyOverflow)
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Symbols with a non-zero count, in ascending symbol order.
    pub fn present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (0..=u8::MAX)
            .zip(self.counts.iter().copied())
            .filter(|&(_, count)| count > 0)
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(u8, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (u8, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (symbol, count) in iter {
            table.set(symbol, count);
        }
        table
    }
}
