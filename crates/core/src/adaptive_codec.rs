//! Adaptive Huffman coding with synchronized periodic rebuilds.
//!
//! No code is transmitted. Encoder and decoder both start from an
//! identical flat frequency table (every count 1) and the tree built from
//! it, update the table after every symbol, and rebuild the tree at the
//! exact same points in the symbol stream. Because tree construction is
//! deterministic, the two sides hold identical trees at identical bit
//! positions at all times, which is the entire decodability argument.
//!
//! # Rebuild Schedule
//!
//! With `count` the number of data symbols processed so far:
//! - `count < 262144` and `count` a power of two: rebuild the tree
//! - `count` a nonzero multiple of 262144: rebuild the tree, then discard
//!   the table and restart from the flat baseline (a new epoch,
//!   independent of all prior statistics)
//!
//! Any divergence in this schedule between the two sides desynchronizes
//! the stream irrecoverably and is not detectable at runtime, so the
//! schedule logic is shared by `compress` and `decompress` rather than
//! duplicated.
//!
//! # Stream Format
//!
//! ```text
//! +----------------------------+
//! | Huffman codes for each     |
//! | input byte, under the      |
//! | evolving tree schedule     |
//! +----------------------------+
//! | code for symbol 256 (EOF)  |
//! +----------------------------+
//! ```
//!
//! The final byte is zero-padded.

use std::io::{Read, Write};

use crate::bitio::{BitReader, BitWriter};
use crate::error::Result;
use crate::freq::FrequencyTable;
use crate::huffman::{HuffmanDecoder, HuffmanEncoder};
use crate::{EOF_SYMBOL, SYMBOL_LIMIT};

/// Number of data symbols per adaptive epoch.
///
/// Below this threshold the tree is rebuilt at every power of two; at each
/// nonzero multiple of it the tree is rebuilt and the frequency table is
/// reset to the flat baseline.
pub const EPOCH_SYMBOLS: u64 = 262_144;

/// Whether the code tree must be rebuilt after `count` data symbols.
fn should_rebuild(count: u64) -> bool {
    (count < EPOCH_SYMBOLS && count.is_power_of_two())
        || (count > 0 && count % EPOCH_SYMBOLS == 0)
}

/// Whether the frequency table must be reset after `count` data symbols.
fn should_reset(count: u64) -> bool {
    count > 0 && count % EPOCH_SYMBOLS == 0
}

/// Compress `input` into `sink` using adaptive Huffman coding.
///
/// The input is consumed in a single pass; no pre-scan and no header.
/// Returns the sink once the EOF code and final padding are flushed.
pub fn compress<R: Read, W: Write>(input: R, sink: W) -> Result<W> {
    let mut freqs = FrequencyTable::flat(SYMBOL_LIMIT)?;
    let mut encoder = HuffmanEncoder::new(BitWriter::new(sink));
    encoder.set_code_tree(freqs.build_code_tree()?);

    // Number of data symbols encoded so far (the EOF marker not included)
    let mut count: u64 = 0;
    for byte in input.bytes() {
        let symbol = u32::from(byte?);
        encoder.write(symbol)?;
        count += 1;

        freqs.increment(symbol)?;
        if should_rebuild(count) {
            encoder.set_code_tree(freqs.build_code_tree()?);
        }
        if should_reset(count) {
            freqs = FrequencyTable::flat(SYMBOL_LIMIT)?;
        }
    }
    // EOF is encoded with whatever tree is active at this point
    encoder.write(EOF_SYMBOL)?;
    encoder.finish()
}

/// Decompress an adaptive Huffman stream from `source` into `sink`.
///
/// Replays the encoder's schedule step for step: every decoded symbol
/// feeds the same table updates and triggers the same rebuilds and
/// resets, at the same counter values.
pub fn decompress<R: Read, W: Write>(source: R, mut sink: W) -> Result<W> {
    let mut freqs = FrequencyTable::flat(SYMBOL_LIMIT)?;
    let mut decoder = HuffmanDecoder::new(BitReader::new(source));
    decoder.set_code_tree(freqs.build_code_tree()?);

    let mut count: u64 = 0;
    loop {
        let symbol = decoder.read()?;
        if symbol == EOF_SYMBOL {
            break;
        }
        sink.write_all(&[symbol as u8])?;
        count += 1;

        freqs.increment(symbol)?;
        if should_rebuild(count) {
            decoder.set_code_tree(freqs.build_code_tree()?);
        }
        if should_reset(count) {
            freqs = FrequencyTable::flat(SYMBOL_LIMIT)?;
        }
    }
    Ok(sink)
}
