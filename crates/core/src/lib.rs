//! huffcode-core: Reference Huffman coding engine
//!
//! This library provides exact, bit-level compression and decompression
//! under two coding disciplines:
//! - **Static canonical Huffman coding**: frequencies computed from a full
//!   pre-scan, code lengths transmitted in a 257-byte header
//! - **Adaptive Huffman coding**: frequencies learned online, the code
//!   tree rebuilt at synchronized checkpoints by encoder and decoder
//!   alike, with nothing transmitted out of band
//!
//! # Architecture
//!
//! The engine is designed around clear module boundaries:
//! - `bitio`: MSB-first bit reading/writing over byte streams
//! - `freq`: symbol frequency accounting and optimal tree construction
//! - `tree`: code trees and the derived symbol-to-bit-path table
//! - `canonical`: codes described purely by per-symbol bit length
//! - `huffman`: one-symbol-at-a-time encoder/decoder with swappable trees
//! - `static_codec`: header-based single-pass protocol
//! - `adaptive_codec`: periodic-rebuild protocol with epoch resets
//! - `metrics`: observable run statistics for callers
//!
//! # Design Principles
//!
//! - **No panics**: library paths return structured errors
//! - **Deterministic**: ties in tree construction break by lowest symbol,
//!   so identical frequency tables always yield identical trees
//! - **Synchronized**: the adaptive rebuild schedule is derived by both
//!   sides from a shared counter, never signaled in the stream
//! - **Replace, never patch**: a code tree is built once, installed whole,
//!   and swapped out atomically at rebuild points

pub mod adaptive_codec;
pub mod bitio;
pub mod canonical;
pub mod error;
pub mod freq;
pub mod huffman;
pub mod metrics;
pub mod static_codec;
pub mod tree;

// Re-export commonly used types
pub use error::{Error, Result};

/// Number of symbols in the byte-oriented codec alphabet: the 256 byte
/// values plus the reserved end-of-stream marker.
pub const SYMBOL_LIMIT: u32 = 257;

/// The reserved end-of-stream symbol every encoder appends last.
pub const EOF_SYMBOL: u32 = 256;
