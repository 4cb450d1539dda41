//! This crate exposes a name-lookup dictionary built on a persistent Binary
//! Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and its
//! value and may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). The tree here never
//! rebalances, so inserting keys in sorted order makes it as tall as it is
//! long.
//!
//! ## Persistence
//!
//! Nodes are immutable. Inserting or removing a key rebuilds only the nodes on
//! the path from the root to the change and shares everything else with the
//! previous version of the tree, so every older version stays valid. See
//! [`tree::Tree`] for the persistent tree and [`dictionary::Dictionary`] for the
//! handle that tracks the current version.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod dictionary;
pub mod error;
pub mod key;
pub mod tree;

pub use dictionary::Dictionary;
pub use error::DictionaryError;
