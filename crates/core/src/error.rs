//! Error types for the huffcode codec.
//!
//! All library operations return structured errors rather than panicking.
//! Every error is fatal to the compress/decompress call that produced it:
//! a Huffman stream is only decodable when it is complete and exact, so
//! there are no retry or resynchronization paths.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Bit I/O: reading/writing individual bits over byte streams
/// - Construction: building frequency tables and code trees
/// - Format: code-length arrays that cannot describe a proper code tree
/// - Codec: encode/decode attempted in an invalid state
/// - I/O: the underlying byte source or sink failed
#[derive(Debug, Error)]
pub enum Error {
    /// Bit I/O operation failed (e.g., bit required but stream exhausted)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Frequency table or code tree construction failed
    #[error("construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// Canonical code lengths are malformed or unrepresentable
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Encoder or decoder used in an invalid state
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Symbol index outside the coded alphabet
    #[error("symbol {symbol} out of range (limit {limit})")]
    SymbolOutOfRange { symbol: u32, limit: u32 },

    /// Byte stream I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// A bit value other than 0 or 1 was passed to the writer
    #[error("invalid bit value {0}, must be 0 or 1")]
    InvalidBit(u8),

    /// Invalid bit count for a multi-bit operation (more than 64 bits)
    #[error("invalid bit count: {0}")]
    InvalidBitCount(u32),

    /// The stream ended where the protocol guarantees more bits
    #[error("unexpected end of bit stream")]
    UnexpectedEof,
}

/// Frequency table and code tree construction errors.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// The alphabet must contain at least 2 symbols
    #[error("at least 2 symbols needed, got {count}")]
    TooFewSymbols { count: usize },

    /// A symbol's frequency count cannot be incremented past u64::MAX
    #[error("maximum frequency reached for symbol {symbol}")]
    FrequencyOverflow { symbol: u32 },

    /// The same symbol value appears in more than one leaf
    #[error("symbol {symbol} has more than one code")]
    DuplicateLeaf { symbol: u32 },

    /// A code tree root must be an internal node
    #[error("code tree root is a leaf")]
    LeafAtRoot,
}

/// Canonical code format errors.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The length multiset leaves part of the code space unreachable
    #[error("under-full Huffman code tree")]
    UnderfullCode,

    /// The length multiset over-commits the code space
    #[error("over-full Huffman code tree")]
    OverfullCode,

    /// The static header stores lengths as single bytes, capping them at 255
    #[error("code length {length} for symbol {symbol} exceeds maximum 255")]
    CodeLengthTooLong { symbol: u32, length: u32 },
}

/// Encoder/decoder state errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// write()/read() called before a code tree was installed
    #[error("no active code tree")]
    NoActiveTree,

    /// The symbol has no leaf in the active tree (e.g., zero frequency)
    #[error("no code for symbol {0}")]
    NoCodeForSymbol(u32),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
