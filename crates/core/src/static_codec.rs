//! Static canonical Huffman coding over the 257-symbol byte alphabet.
//!
//! The input is pre-scanned once to compute symbol frequencies, an optimal
//! code is built and canonicalized, and the canonical code's lengths are
//! transmitted in a fixed-size header so the decoder can reconstruct the
//! exact same tree.
//!
//! # Stream Format
//!
//! ```text
//! +----------------------------+
//! | 257 code lengths, one byte |  big-endian value 0-255 per symbol
//! | per symbol                 |
//! +----------------------------+
//! | Huffman codes for each     |
//! | input byte, bit-packed     |
//! +----------------------------+
//! | code for symbol 256 (EOF)  |
//! +----------------------------+
//! ```
//!
//! The final byte is zero-padded. The EOF symbol's frequency is forced to
//! at least 1 before the code is built, so the terminator always has a
//! code and decoding never depends on the padding bits.

use std::io::{Read, Write};

use crate::bitio::{BitReader, BitWriter};
use crate::canonical::CanonicalCode;
use crate::error::{FormatError, Result};
use crate::freq::FrequencyTable;
use crate::huffman::{HuffmanDecoder, HuffmanEncoder};
use crate::{EOF_SYMBOL, SYMBOL_LIMIT};

/// Compress `input` into `sink` using static canonical Huffman coding.
///
/// Returns the sink once the stream, including the EOF code and the final
/// padding, has been flushed into it.
pub fn compress<W: Write>(input: &[u8], sink: W) -> Result<W> {
    let mut freqs = count_frequencies(input)?;
    freqs.increment(EOF_SYMBOL)?; // EOF symbol gets a frequency of at least 1

    let code = freqs.build_code_tree()?;
    let canonical = CanonicalCode::from_code_tree(&code, SYMBOL_LIMIT)?;
    // The optimal tree is not necessarily canonical. Rebuild the tree from
    // the lengths alone so the code actually used on the wire is exactly
    // the one the decoder will reconstruct from the header.
    let code = canonical.to_code_tree()?;

    let mut output = BitWriter::new(sink);
    write_code_lengths(&mut output, &canonical)?;

    let mut encoder = HuffmanEncoder::new(output);
    encoder.set_code_tree(code);
    for &byte in input {
        encoder.write(u32::from(byte))?;
    }
    encoder.write(EOF_SYMBOL)?;
    encoder.finish()
}

/// Decompress a static Huffman stream from `source` into `sink`.
///
/// Reads the 257-entry length header, reconstructs the canonical tree,
/// then decodes symbols until the EOF symbol is observed.
pub fn decompress<R: Read, W: Write>(source: R, mut sink: W) -> Result<W> {
    let mut input = BitReader::new(source);
    let canonical = read_code_lengths(&mut input)?;
    let code = canonical.to_code_tree()?;

    let mut decoder = HuffmanDecoder::new(input);
    decoder.set_code_tree(code);
    loop {
        let symbol = decoder.read()?;
        if symbol == EOF_SYMBOL {
            break;
        }
        sink.write_all(&[symbol as u8])?;
    }
    Ok(sink)
}

/// Scan `input` into a frequency table sized for the byte alphabet.
///
/// The EOF symbol's entry is left at 0; `compress` bumps it separately.
pub fn count_frequencies(input: &[u8]) -> Result<FrequencyTable> {
    let mut counts = vec![0u64; SYMBOL_LIMIT as usize];
    for &byte in input {
        counts[byte as usize] += 1;
    }
    FrequencyTable::new(counts)
}

/// Write the header: each symbol's code length as one big-endian byte.
///
/// # Errors
/// `FormatError::CodeLengthTooLong` if any length does not fit in a byte.
pub fn write_code_lengths<W: Write>(
    output: &mut BitWriter<W>,
    code: &CanonicalCode,
) -> Result<()> {
    for symbol in 0..code.symbol_limit() {
        let length = code.code_length(symbol)?;
        // This format stores each length in a single byte
        if length >= 256 {
            return Err(FormatError::CodeLengthTooLong { symbol, length }.into());
        }
        output.write_bits(u64::from(length), 8)?;
    }
    Ok(())
}

/// Read the header back into a validated canonical code.
///
/// # Errors
/// - `BitIoError::UnexpectedEof` if the stream ends inside the header
/// - `FormatError` if the transmitted lengths are malformed
pub fn read_code_lengths<R: Read>(input: &mut BitReader<R>) -> Result<CanonicalCode> {
    let mut code_lengths = Vec::with_capacity(SYMBOL_LIMIT as usize);
    for _ in 0..SYMBOL_LIMIT {
        code_lengths.push(input.read_bits(8)? as u32);
    }
    CanonicalCode::new(code_lengths)
}
