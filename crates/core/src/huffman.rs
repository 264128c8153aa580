//! One-symbol-at-a-time Huffman encoding and decoding.
//!
//! `HuffmanEncoder` and `HuffmanDecoder` wrap a bit stream together with a
//! *currently active* code tree. Neither is usable until a tree has been
//! installed with `set_code_tree`, and the caller may swap the tree
//! between symbols at any point, as long as encoder and decoder hold the
//! same tree at the same position in the bit stream. That swap is the
//! entire coordination mechanism of the adaptive codec: no bits are spent
//! signaling a rebuild.

use std::io::{Read, Write};

use crate::bitio::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::tree::{CodeTree, Node};

/// Encodes symbols onto a Huffman-coded bit stream. Not thread-safe.
#[derive(Debug)]
pub struct HuffmanEncoder<W: Write> {
    output: BitWriter<W>,
    code_tree: Option<CodeTree>,
}

impl<W: Write> HuffmanEncoder<W> {
    /// Construct an encoder writing to the given bit stream.
    ///
    /// No code tree is active yet; `write` fails until one is installed.
    pub fn new(output: BitWriter<W>) -> Self {
        Self {
            output,
            code_tree: None,
        }
    }

    /// Install `tree` as the active code tree, replacing any previous one.
    pub fn set_code_tree(&mut self, tree: CodeTree) {
        self.code_tree = Some(tree);
    }

    /// Encode one symbol, emitting its code bits in order.
    ///
    /// # Errors
    /// - `CodecError::NoActiveTree` if no tree has been installed
    /// - `CodecError::NoCodeForSymbol` if the symbol has no leaf
    /// - `Error::SymbolOutOfRange` / `Error::Io` as applicable
    pub fn write(&mut self, symbol: u32) -> Result<()> {
        let tree = self.code_tree.as_ref().ok_or(CodecError::NoActiveTree)?;
        for &bit in tree.get_code(symbol)? {
            self.output.write_bit(bit)?;
        }
        Ok(())
    }

    /// Finish the stream: pad the final byte with zeros, flush, and return
    /// the underlying byte sink.
    pub fn finish(self) -> Result<W> {
        self.output.finish()
    }
}

/// Decodes symbols from a Huffman-coded bit stream. Not thread-safe.
#[derive(Debug)]
pub struct HuffmanDecoder<R: Read> {
    input: BitReader<R>,
    code_tree: Option<CodeTree>,
}

impl<R: Read> HuffmanDecoder<R> {
    /// Construct a decoder reading from the given bit stream.
    ///
    /// No code tree is active yet; `read` fails until one is installed.
    pub fn new(input: BitReader<R>) -> Self {
        Self {
            input,
            code_tree: None,
        }
    }

    /// Install `tree` as the active code tree, replacing any previous one.
    pub fn set_code_tree(&mut self, tree: CodeTree) {
        self.code_tree = Some(tree);
    }

    /// Decode and return the next symbol.
    ///
    /// Walks from the root, following the left child on a 0 bit and the
    /// right child on a 1 bit, until a leaf is reached. A decodable stream
    /// always terminates on a symbol boundary, so running out of bits
    /// mid-walk is invalid input, not a normal end of stream.
    ///
    /// # Errors
    /// - `CodecError::NoActiveTree` if no tree has been installed
    /// - `BitIoError::UnexpectedEof` if the stream ends mid-symbol
    pub fn read(&mut self) -> Result<u32> {
        let tree = self.code_tree.as_ref().ok_or(CodecError::NoActiveTree)?;
        let mut node = tree.root();
        loop {
            match node {
                Node::Internal(left, right) => {
                    let bit = self.input.read_bit_no_eof()?;
                    node = if bit == 0 { left } else { right };
                }
                Node::Leaf(symbol) => return Ok(*symbol),
            }
        }
    }

    /// Consume the decoder and return the underlying bit stream.
    pub fn into_inner(self) -> BitReader<R> {
        self.input
    }
}
