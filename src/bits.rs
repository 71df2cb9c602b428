//! Bit-level I/O over byte streams.
//!
//! Bits are packed most significant first: the first bit written to a
//! [`BitWriter`] lands in bit 7 of the first output byte. Flushing pads the
//! last partial byte with zeros.

use biterator::Bit;
use std::io::{self, Read, Write};

pub fn bit_from_bool(one: bool) -> Bit {
    if one { Bit::One } else { Bit::Zero }
}

/// Anything that accepts a stream of bits.
pub trait BitSink {
    fn write_bit(&mut self, bit: Bit) -> io::Result<()>;

    /// Write the 8 bits of `byte`, most significant first.
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        for shift in (0..8).rev() {
            self.write_bit(bit_from_bool((byte >> shift) & 1 == 1))?;
        }
        Ok(())
    }
}

/// Anything that produces a stream of bits. `None` marks the end of the
/// stream.
pub trait BitSource {
    fn read_bit(&mut self) -> io::Result<Option<Bit>>;

    /// Read 8 bits as a byte, most significant first. Returns `None` if the
    /// stream ends before all 8 bits are read.
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = 0u8;
        for _ in 0..8 {
            let bit = match self.read_bit()? {
                Some(Bit::One) => 1,
                Some(Bit::Zero) => 0,
                None => return Ok(None),
            };
            byte = (byte << 1) | bit;
        }
        Ok(Some(byte))
    }
}

impl BitSink for Vec<Bit> {
    fn write_bit(&mut self, bit: Bit) -> io::Result<()> {
        self.push(bit);
        Ok(())
    }
}

impl BitSource for std::vec::IntoIter<Bit> {
    fn read_bit(&mut self) -> io::Result<Option<Bit>> {
        Ok(self.next())
    }
}

/// Packs bits into bytes and writes them to `W`.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    inner: W,
    pending: u8,
    pending_bits: u8,
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            pending: 0,
            pending_bits: 0,
            bits_written: 0,
        }
    }

    /// Total bits accepted so far, padding excluded.
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Zero-pad the final partial byte, write it, and flush `W`.
    pub fn flush(&mut self) -> io::Result<()> {
        if self.pending_bits > 0 {
            let byte = self.pending << (8 - self.pending_bits);
            self.inner.write_all(&[byte])?;
            self.pending = 0;
            self.pending_bits = 0;
        }
        self.inner.flush()
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> BitSink for BitWriter<W> {
    fn write_bit(&mut self, bit: Bit) -> io::Result<()> {
        let value = match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        };
        self.pending = (self.pending << 1) | value;
        self.pending_bits += 1;
        self.bits_written += 1;
        if self.pending_bits == 8 {
            self.inner.write_all(&[self.pending])?;
            self.pending = 0;
            self.pending_bits = 0;
        }
        Ok(())
    }
}

/// Unpacks bytes read from `R` into bits.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    inner: R,
    current: u8,
    remaining: u8,
}

impl<R: Read> BitReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            current: 0,
            remaining: 0,
        }
    }

    /// Pull the next byte, or `None` at end of stream.
    fn refill(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.inner.read_exact(&mut buf) {
            Ok(()) => Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl<R: Read> BitSource for BitReader<R> {
    fn read_bit(&mut self) -> io::Result<Option<Bit>> {
        if self.remaining == 0 {
            match self.refill()? {
                Some(byte) => {
                    self.current = byte;
                    self.remaining = 8;
                }
                None => return Ok(None),
            }
        }
        self.remaining -= 1;
        Ok(Some(bit_from_bool((self.current >> self.remaining) & 1 == 1)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use biterator::Bit::{One, Zero};

    #[test]
    fn writer_packs_msb_first_and_pads() {
        let mut writer = BitWriter::new(Vec::new());
        for bit in [One, Zero, One] {
            writer.write_bit(bit).unwrap();
        }
        writer.write_byte(0xff).unwrap();
        assert_eq!(writer.bits_written(), 11);
        let bytes = writer.finish().unwrap();
        assert_eq!(bytes, vec![0b1011_1111, 0b1110_0000]);
    }

    #[test]
    fn flush_on_byte_boundary_adds_nothing() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_byte(0x5a).unwrap();
        writer.flush().unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.finish().unwrap(), vec![0x5a]);
    }

    #[test]
    fn reader_unpacks_msb_first() {
        let data = [0b1010_0000u8, 0x7f];
        let mut reader = BitReader::new(&data[..]);
        assert_eq!(reader.read_bit().unwrap(), Some(One));
        assert_eq!(reader.read_bit().unwrap(), Some(Zero));
        assert_eq!(reader.read_bit().unwrap(), Some(One));
        for _ in 0..5 {
            assert_eq!(reader.read_bit().unwrap(), Some(Zero));
        }
        assert_eq!(reader.read_byte().unwrap(), Some(0x7f));
        assert_eq!(reader.read_bit().unwrap(), None);
    }

    #[test]
    fn partial_byte_reads_as_none() {
        let mut source = vec![One, One, Zero].into_iter();
        assert_eq!(source.read_byte().unwrap(), None);
    }

    #[test]
    fn vec_sink_and_source_agree() {
        let mut sink: Vec<Bit> = Vec::new();
        sink.write_byte(0b1000_0001).unwrap();
        assert_eq!(sink, vec![One, Zero, Zero, Zero, Zero, Zero, Zero, One]);
        let mut source = sink.into_iter();
        assert_eq!(source.read_byte().unwrap(), Some(0b1000_0001));
        assert_eq!(source.read_bit().unwrap(), None);
    }
}
