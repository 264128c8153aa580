//! Canonical Huffman codes, described purely by per-symbol code length.
//!
//! A canonical code carries no information about the actual bit patterns:
//! those are reconstructed deterministically from the lengths alone, with
//! lexicographically lower codes assigned to symbols with lower code
//! lengths, breaking ties by lower symbol value. Length 0 means the symbol
//! has no code. For example:
//!
//! ```text
//! Code lengths:          Reconstructed codes:
//!   Symbol A: 1            Symbol A: 0
//!   Symbol B: 3            Symbol B: 110
//!   Symbol C: 0 (none)     Symbol C: (none)
//!   Symbol D: 2            Symbol D: 10
//!   Symbol E: 3            Symbol E: 111
//! ```
//!
//! Because only the lengths matter, a canonical code is the natural form
//! for transmitting a code in a compressed-stream header.

use crate::error::{ConstructionError, Error, FormatError, Result};
use crate::tree::{CodeTree, Node};

/// A canonical Huffman code. Immutable.
///
/// Construction validates that the multiset of lengths describes a
/// complete binary tree: neither under-full (part of the code space
/// unreachable) nor over-full (more leaves than the space can hold).
#[derive(Debug, Clone)]
pub struct CanonicalCode {
    code_lengths: Vec<u32>,
}

impl CanonicalCode {
    /// Construct a canonical code from an explicit array of code lengths.
    ///
    /// Examples of length arrays and their fate:
    /// - `[1, 1]`, `[2, 2, 1, 0, 0, 0]`, `[3, 3, 3, 3, 3, 3, 3, 3]` are valid
    /// - `[3, 0, 3]`, `[1, 2, 3]`, `[2, 2, 2]` are under-full
    /// - `[1, 1, 1]`, `[1, 1, 2, 2, 3, 3, 3, 3]` are over-full
    ///
    /// # Errors
    /// - `ConstructionError::TooFewSymbols` if fewer than 2 lengths are given
    /// - `FormatError::UnderfullCode` / `FormatError::OverfullCode` if the
    ///   lengths do not satisfy the Kraft equality for a full binary tree
    pub fn new(code_lengths: Vec<u32>) -> Result<Self> {
        if code_lengths.len() < 2 {
            return Err(ConstructionError::TooFewSymbols {
                count: code_lengths.len(),
            }
            .into());
        }
        validate_lengths(&code_lengths)?;
        Ok(Self { code_lengths })
    }

    /// Build a canonical code from an existing code tree.
    ///
    /// Records each leaf's depth as its symbol's code length. The values
    /// of the tree's codes are discarded; only the lengths survive.
    ///
    /// # Errors
    /// - `ConstructionError::TooFewSymbols` if the limit is below 2
    /// - `Error::SymbolOutOfRange` if a leaf symbol exceeds the limit
    /// - `ConstructionError::DuplicateLeaf` if a symbol occurs twice
    pub fn from_code_tree(tree: &CodeTree, symbol_limit: u32) -> Result<Self> {
        if symbol_limit < 2 {
            return Err(ConstructionError::TooFewSymbols {
                count: symbol_limit as usize,
            }
            .into());
        }
        let mut code_lengths = vec![0u32; symbol_limit as usize];
        record_leaf_depths(tree.root(), 0, &mut code_lengths)?;
        Ok(Self { code_lengths })
    }

    /// The number of symbols this code covers, at least 2.
    pub fn symbol_limit(&self) -> u32 {
        self.code_lengths.len() as u32
    }

    /// The code length of the given symbol; 0 means the symbol has no code.
    pub fn code_length(&self, symbol: u32) -> Result<u32> {
        match self.code_lengths.get(symbol as usize) {
            Some(&length) => Ok(length),
            None => Err(Error::SymbolOutOfRange {
                symbol,
                limit: self.symbol_limit(),
            }),
        }
    }

    /// Reconstruct the canonical code tree from the lengths alone.
    ///
    /// Descends from the deepest code length towards the root. At each
    /// depth, fresh leaves for symbols whose length equals that depth are
    /// appended in ascending symbol order, then all nodes carried up from
    /// the deeper level are paired two at a time into internal nodes. The
    /// combined list is carried to the next shallower level.
    ///
    /// # Errors
    /// `FormatError` if the lengths cannot form a tree. Codes built by the
    /// validating constructors never trigger this.
    pub fn to_code_tree(&self) -> Result<CodeTree> {
        let max_length = self.code_lengths.iter().copied().max().unwrap_or(0);

        let mut nodes: Vec<Node> = Vec::new();
        for depth in (0..=max_length).rev() {
            if nodes.len() % 2 != 0 {
                return Err(FormatError::UnderfullCode.into());
            }
            let mut merged: Vec<Node> = Vec::new();

            // Leaves for symbols whose code length equals this depth,
            // in ascending symbol order
            if depth > 0 {
                for (symbol, &length) in self.code_lengths.iter().enumerate() {
                    if length == depth {
                        merged.push(Node::Leaf(symbol as u32));
                    }
                }
            }

            // Pair up all nodes from the previous deeper level
            let mut carried = nodes.into_iter();
            while let (Some(left), Some(right)) = (carried.next(), carried.next()) {
                merged.push(Node::Internal(Box::new(left), Box::new(right)));
            }
            nodes = merged;
        }

        match nodes.len() {
            1 => {}
            0 => return Err(FormatError::UnderfullCode.into()),
            _ => return Err(FormatError::OverfullCode.into()),
        }
        let Some(root) = nodes.pop() else {
            unreachable!("length just checked");
        };
        CodeTree::new(root, self.symbol_limit())
    }
}

/// Check that a length multiset describes a complete binary tree.
///
/// Walks level counts from the deepest length upward, halving the running
/// node count each time the level gets shallower. An odd count at a
/// halving means an unpaired node (under-full); a count exceeding the
/// level's capacity, or a root count above 1, means too many leaves
/// (over-full).
fn validate_lengths(code_lengths: &[u32]) -> Result<()> {
    let mut sorted: Vec<u32> = code_lengths.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut current_level = sorted[0];
    let mut nodes_at_level: u64 = 0;
    for &length in &sorted {
        if length == 0 {
            break;
        }
        while length < current_level {
            if nodes_at_level % 2 != 0 {
                return Err(FormatError::UnderfullCode.into());
            }
            nodes_at_level /= 2;
            current_level -= 1;
        }
        nodes_at_level += 1;
        if current_level < 64 && nodes_at_level > 1u64 << current_level {
            return Err(FormatError::OverfullCode.into());
        }
    }
    while current_level > 0 {
        if nodes_at_level % 2 != 0 {
            return Err(FormatError::UnderfullCode.into());
        }
        nodes_at_level /= 2;
        current_level -= 1;
    }
    match nodes_at_level {
        1 => Ok(()),
        0 => Err(FormatError::UnderfullCode.into()),
        _ => Err(FormatError::OverfullCode.into()),
    }
}

// Recursive helper for from_code_tree.
fn record_leaf_depths(node: &Node, depth: u32, code_lengths: &mut [u32]) -> Result<()> {
    match node {
        Node::Internal(left, right) => {
            record_leaf_depths(left, depth + 1, code_lengths)?;
            record_leaf_depths(right, depth + 1, code_lengths)?;
            Ok(())
        }
        Node::Leaf(symbol) => {
            let index = *symbol as usize;
            if index >= code_lengths.len() {
                return Err(Error::SymbolOutOfRange {
                    symbol: *symbol,
                    limit: code_lengths.len() as u32,
                });
            }
            if code_lengths[index] != 0 {
                return Err(ConstructionError::DuplicateLeaf { symbol: *symbol }.into());
            }
            code_lengths[index] = depth;
            Ok(())
        }
    }
}
