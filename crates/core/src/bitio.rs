//! Bit-level I/O over byte streams.
//!
//! This module provides `BitWriter` and `BitReader`, adapters that give
//! single-bit granularity on top of ordinary `std::io` byte sinks and
//! sources. Both operate in MSB-first (most significant bit first) order,
//! which is standard for Huffman encoding.
//!
//! # Padding Rules
//! - `BitWriter::finish` pads the final partial byte with 0-7 trailing zeros
//! - `BitReader` reports end of stream only on a byte boundary; trailing
//!   padding bits are indistinguishable from data, so every stream format
//!   must terminate on an explicit end-of-stream symbol
//!
//! # Example
//! ```
//! use huffcode_core::bitio::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bit(1).unwrap();
//! writer.write_bit(0).unwrap();
//! writer.write_bit(1).unwrap();
//! // Total: 101 -> padded to 10100000
//!
//! let bytes = writer.finish().unwrap();
//! assert_eq!(bytes, vec![0b10100000]);
//!
//! let mut reader = BitReader::new(&bytes[..]);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! ```

use std::io::{ErrorKind, Read, Write};

use crate::error::{BitIoError, Result};

/// Writes bits MSB-first into an underlying byte sink.
///
/// Accumulates bits in a one-byte buffer and flushes each completed byte
/// to the sink. `finish` pads the final partial byte with zeros.
///
/// # Invariants
/// - `bits_filled` is always < 8 between calls
/// - `current_byte` holds the pending bits in its low-order positions
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying byte sink
    output: W,
    /// Accumulator for the current partial byte
    current_byte: u8,
    /// Number of bits in current_byte (0-7)
    bits_filled: u8,
}

impl<W: Write> BitWriter<W> {
    /// Create a new BitWriter over the given byte sink.
    pub fn new(output: W) -> Self {
        Self {
            output,
            current_byte: 0,
            bits_filled: 0,
        }
    }

    /// Write a single bit to the output.
    ///
    /// # Errors
    /// - `BitIoError::InvalidBit` if `bit` is not 0 or 1
    /// - `Error::Io` if flushing a completed byte to the sink fails
    pub fn write_bit(&mut self, bit: u8) -> Result<()> {
        if bit > 1 {
            return Err(BitIoError::InvalidBit(bit).into());
        }
        self.current_byte = self.current_byte << 1 | bit;
        self.bits_filled += 1;
        if self.bits_filled == 8 {
            self.output.write_all(&[self.current_byte])?;
            self.current_byte = 0;
            self.bits_filled = 0;
        }
        Ok(())
    }

    /// Write up to 64 bits, MSB-first.
    ///
    /// Writing value=0b101 with count=3 writes the bits 1, 0, 1 in that
    /// order. Only the lowest `count` bits of `value` are used.
    ///
    /// # Errors
    /// Returns `BitIoError::InvalidBitCount` if count > 64.
    pub fn write_bits(&mut self, value: u64, count: u32) -> Result<()> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }
        for shift in (0..count).rev() {
            self.write_bit(((value >> shift) & 1) as u8)?;
        }
        Ok(())
    }

    /// Finish writing and return the underlying sink.
    ///
    /// Any remaining bits are padded with trailing zeros to complete the
    /// final byte, and the sink is flushed. This consumes the writer.
    pub fn finish(mut self) -> Result<W> {
        while self.bits_filled != 0 {
            self.write_bit(0)?;
        }
        self.output.flush()?;
        Ok(self.output)
    }
}

/// Reads bits MSB-first from an underlying byte source.
///
/// End of stream is only observable on a byte boundary: once a byte has
/// been pulled from the source, all 8 of its bits are readable.
///
/// # Invariants
/// - `bits_remaining` is the number of unread bits in `current_byte` (0-8)
/// - once `at_eof` is set, every subsequent read reports end of stream
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying byte source
    input: R,
    /// The byte currently being consumed
    current_byte: u8,
    /// Number of unread bits in current_byte (0-8)
    bits_remaining: u8,
    /// Whether the source has been exhausted
    at_eof: bool,
}

impl<R: Read> BitReader<R> {
    /// Create a new BitReader over the given byte source.
    pub fn new(input: R) -> Self {
        Self {
            input,
            current_byte: 0,
            bits_remaining: 0,
            at_eof: false,
        }
    }

    /// Read a single bit.
    ///
    /// Returns `Ok(Some(bit))` with bit 0 or 1, or `Ok(None)` when the
    /// source is exhausted. Exhaustion is only reported when starting a
    /// new byte, never in the middle of one.
    ///
    /// # Errors
    /// `Error::Io` if the underlying source fails.
    pub fn read_bit(&mut self) -> Result<Option<u8>> {
        if self.at_eof {
            return Ok(None);
        }
        if self.bits_remaining == 0 {
            let mut buf = [0u8; 1];
            loop {
                match self.input.read(&mut buf) {
                    Ok(0) => {
                        self.at_eof = true;
                        return Ok(None);
                    }
                    Ok(_) => break,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                }
            }
            self.current_byte = buf[0];
            self.bits_remaining = 8;
        }
        self.bits_remaining -= 1;
        Ok(Some((self.current_byte >> self.bits_remaining) & 1))
    }

    /// Read a single bit, treating end of stream as an error.
    ///
    /// Used wherever a protocol invariant guarantees more bits must exist,
    /// such as header reads or mid-symbol decoding.
    ///
    /// # Errors
    /// `BitIoError::UnexpectedEof` if the source is exhausted.
    pub fn read_bit_no_eof(&mut self) -> Result<u8> {
        match self.read_bit()? {
            Some(bit) => Ok(bit),
            None => Err(BitIoError::UnexpectedEof.into()),
        }
    }

    /// Read up to 64 bits, MSB-first, treating end of stream as an error.
    ///
    /// Reading 3 bits from the stream 101... returns 0b101.
    ///
    /// # Errors
    /// - `BitIoError::InvalidBitCount` if count > 64
    /// - `BitIoError::UnexpectedEof` if the source runs out mid-read
    pub fn read_bits(&mut self, count: u32) -> Result<u64> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }
        let mut result = 0u64;
        for _ in 0..count {
            result = result << 1 | u64::from(self.read_bit_no_eof()?);
        }
        Ok(result)
    }

    /// Consume the reader and return the underlying source.
    pub fn into_inner(self) -> R {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_write_read_single_byte() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(0b10110011, 8).unwrap();

        let bytes = writer.finish().unwrap();
        assert_eq!(bytes, vec![0b10110011]);

        let mut reader = BitReader::new(&bytes[..]);
        assert_eq!(reader.read_bits(8).unwrap(), 0b10110011);
    }

    #[test]
    fn test_padding_three_bits() {
        // Writing 3 bits then closing yields exactly 1 byte: the 3 bits in
        // the high-order positions, the remaining 5 bits zero.
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bit(1).unwrap();
        writer.write_bit(0).unwrap();
        writer.write_bit(1).unwrap();

        let bytes = writer.finish().unwrap();
        assert_eq!(bytes, vec![0b10100000]);
    }

    #[test]
    fn test_full_byte_no_padding() {
        let mut writer = BitWriter::new(Vec::new());
        for bit in [1u8, 0, 1, 1, 0, 0, 1, 0] {
            writer.write_bit(bit).unwrap();
        }

        let bytes = writer.finish().unwrap();
        assert_eq!(bytes, vec![0b10110010]);
    }

    #[test]
    fn test_invalid_bit_rejected() {
        let mut writer = BitWriter::new(Vec::new());
        let result = writer.write_bit(2);
        assert!(matches!(
            result,
            Err(Error::BitIo(BitIoError::InvalidBit(2)))
        ));
    }

    #[test]
    fn test_multi_byte_round_trip() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(0b1010101111110000, 16).unwrap();

        let bytes = writer.finish().unwrap();
        assert_eq!(bytes, vec![0b10101011, 0b11110000]);

        let mut reader = BitReader::new(&bytes[..]);
        assert_eq!(reader.read_bits(16).unwrap(), 0b1010101111110000);
    }

    #[test]
    fn test_64_bit_values() {
        let mut writer = BitWriter::new(Vec::new());
        let val = 0x123456789ABCDEF0u64;
        writer.write_bits(val, 64).unwrap();

        let bytes = writer.finish().unwrap();
        let mut reader = BitReader::new(&bytes[..]);
        assert_eq!(reader.read_bits(64).unwrap(), val);
    }

    #[test]
    fn test_bit_count_limit() {
        let mut writer = BitWriter::new(Vec::new());
        assert!(matches!(
            writer.write_bits(0, 65),
            Err(Error::BitIo(BitIoError::InvalidBitCount(65)))
        ));

        let mut reader = BitReader::new(&[0u8; 16][..]);
        assert!(matches!(
            reader.read_bits(65),
            Err(Error::BitIo(BitIoError::InvalidBitCount(65)))
        ));
    }

    #[test]
    fn test_eof_on_byte_boundary_only() {
        let data = [0b10101010u8];
        let mut reader = BitReader::new(&data[..]);

        // All 8 bits of the only byte are readable even though the source
        // has nothing further to offer.
        for expected in [1u8, 0, 1, 0, 1, 0, 1, 0] {
            assert_eq!(reader.read_bit().unwrap(), Some(expected));
        }

        // Only now, at the boundary, is end of stream observed.
        assert_eq!(reader.read_bit().unwrap(), None);
        // And it is sticky.
        assert_eq!(reader.read_bit().unwrap(), None);
    }

    #[test]
    fn test_read_no_eof_fails_at_end() {
        let data = [0xFFu8];
        let mut reader = BitReader::new(&data[..]);
        reader.read_bits(8).unwrap();

        assert!(matches!(
            reader.read_bit_no_eof(),
            Err(Error::BitIo(BitIoError::UnexpectedEof))
        ));
    }

    #[test]
    fn test_read_bits_fails_mid_read() {
        let data = [0xFFu8];
        let mut reader = BitReader::new(&data[..]);

        // 12 > 8 available bits: must fail rather than return a short value
        assert!(matches!(
            reader.read_bits(12),
            Err(Error::BitIo(BitIoError::UnexpectedEof))
        ));
    }

    #[test]
    fn test_empty_source() {
        let mut reader = BitReader::new(&[][..]);
        assert_eq!(reader.read_bit().unwrap(), None);
    }

    #[test]
    fn test_finish_empty_writer() {
        let writer = BitWriter::new(Vec::new());
        assert_eq!(writer.finish().unwrap(), Vec::<u8>::new());
    }
}
