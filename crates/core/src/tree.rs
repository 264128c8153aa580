//! Code trees: binary trees mapping symbols to prefix-free bit sequences.
//!
//! The path from the root to a leaf determines that leaf's symbol's code:
//! going to the left child appends a 0, going to the right child a 1.
//! A tree is built once (from a frequency table or from canonical code
//! lengths), is immutable afterwards, and is replaced whole when the code
//! changes.

use crate::error::{CodecError, ConstructionError, Error, Result};

/// A node of a code tree.
///
/// Internal nodes own exactly two children; leaves carry one symbol value.
/// Ownership is exclusive to the tree holding the node, so there is no
/// sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Two owned children: left (bit 0) and right (bit 1)
    Internal(Box<Node>, Box<Node>),
    /// A single symbol value
    Leaf(u32),
}

/// A binary tree representing a mapping between symbols and bit strings.
///
/// Constraints checked at construction:
/// - the root is an internal node
/// - every leaf symbol is below the symbol limit
/// - no symbol value appears in more than one leaf
///
/// Not every symbol value needs a leaf; such symbols are uncodable and
/// `get_code` fails for them.
#[derive(Debug, Clone)]
pub struct CodeTree {
    root: Node,
    /// Code for each symbol, or None if the symbol has no leaf.
    /// For example, if symbol 5 has code 10011, codes[5] is [1,0,0,1,1].
    codes: Vec<Option<Vec<u8>>>,
}

impl CodeTree {
    /// Construct a code tree from a root node and a symbol limit.
    ///
    /// Walks the tree once to derive the per-symbol code table.
    ///
    /// # Errors
    /// - `ConstructionError::TooFewSymbols` if the limit is below 2
    /// - `ConstructionError::LeafAtRoot` if the root is not internal
    /// - `ConstructionError::DuplicateLeaf` if a symbol has two leaves
    /// - `Error::SymbolOutOfRange` if a leaf symbol exceeds the limit
    pub fn new(root: Node, symbol_limit: u32) -> Result<Self> {
        if symbol_limit < 2 {
            return Err(ConstructionError::TooFewSymbols {
                count: symbol_limit as usize,
            }
            .into());
        }
        if matches!(root, Node::Leaf(_)) {
            return Err(ConstructionError::LeafAtRoot.into());
        }

        let mut codes = vec![None; symbol_limit as usize];
        let mut prefix = Vec::new();
        build_code_list(&root, &mut prefix, &mut codes)?;

        Ok(Self { root, codes })
    }

    /// The number of symbol values this tree can describe, at least 2.
    pub fn symbol_limit(&self) -> u32 {
        self.codes.len() as u32
    }

    /// The root node, always internal. Decoders walk from here.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The code for the given symbol as a slice of 0/1 bit values.
    ///
    /// # Errors
    /// - `Error::SymbolOutOfRange` if the symbol exceeds the limit
    /// - `CodecError::NoCodeForSymbol` if the symbol has no leaf
    pub fn get_code(&self, symbol: u32) -> Result<&[u8]> {
        match self.codes.get(symbol as usize) {
            None => Err(Error::SymbolOutOfRange {
                symbol,
                limit: self.symbol_limit(),
            }),
            Some(None) => Err(CodecError::NoCodeForSymbol(symbol).into()),
            Some(Some(bits)) => Ok(bits),
        }
    }
}

// Recursive helper for the constructor: records the root-to-leaf path of
// every leaf into the code table.
fn build_code_list(
    node: &Node,
    prefix: &mut Vec<u8>,
    codes: &mut [Option<Vec<u8>>],
) -> Result<()> {
    match node {
        Node::Internal(left, right) => {
            prefix.push(0);
            build_code_list(left, prefix, codes)?;
            prefix.pop();

            prefix.push(1);
            build_code_list(right, prefix, codes)?;
            prefix.pop();
            Ok(())
        }
        Node::Leaf(symbol) => {
            let index = *symbol as usize;
            if index >= codes.len() {
                return Err(Error::SymbolOutOfRange {
                    symbol: *symbol,
                    limit: codes.len() as u32,
                });
            }
            if codes[index].is_some() {
                return Err(ConstructionError::DuplicateLeaf { symbol: *symbol }.into());
            }
            codes[index] = Some(prefix.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(symbol: u32) -> Box<Node> {
        Box::new(Node::Leaf(symbol))
    }

    fn internal(left: Box<Node>, right: Box<Node>) -> Box<Node> {
        Box::new(Node::Internal(left, right))
    }

    #[test]
    fn test_codes_follow_paths() {
        //     .
        //    / \
        //   0   .
        //      / \
        //     1   2
        let root = Node::Internal(leaf(0), internal(leaf(1), leaf(2)));
        let tree = CodeTree::new(root, 4).unwrap();

        assert_eq!(tree.get_code(0).unwrap(), &[0]);
        assert_eq!(tree.get_code(1).unwrap(), &[1, 0]);
        assert_eq!(tree.get_code(2).unwrap(), &[1, 1]);
    }

    #[test]
    fn test_missing_symbol_has_no_code() {
        let root = Node::Internal(leaf(0), leaf(1));
        let tree = CodeTree::new(root, 4).unwrap();

        assert!(matches!(
            tree.get_code(3),
            Err(Error::Codec(CodecError::NoCodeForSymbol(3)))
        ));
        assert!(matches!(
            tree.get_code(4),
            Err(Error::SymbolOutOfRange { symbol: 4, limit: 4 })
        ));
    }

    #[test]
    fn test_duplicate_leaf_rejected() {
        let root = Node::Internal(leaf(1), leaf(1));
        assert!(matches!(
            CodeTree::new(root, 2),
            Err(Error::Construction(ConstructionError::DuplicateLeaf { symbol: 1 }))
        ));
    }

    #[test]
    fn test_symbol_over_limit_rejected() {
        let root = Node::Internal(leaf(0), leaf(9));
        assert!(matches!(
            CodeTree::new(root, 2),
            Err(Error::SymbolOutOfRange { symbol: 9, limit: 2 })
        ));
    }

    #[test]
    fn test_leaf_root_rejected() {
        assert!(matches!(
            CodeTree::new(Node::Leaf(0), 2),
            Err(Error::Construction(ConstructionError::LeafAtRoot))
        ));
    }

    #[test]
    fn test_symbol_limit_minimum() {
        let root = Node::Internal(leaf(0), leaf(1));
        assert!(matches!(
            CodeTree::new(root, 1),
            Err(Error::Construction(ConstructionError::TooFewSymbols { count: 1 }))
        ));
    }
}
