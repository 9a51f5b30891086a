//! This crate exposes a binary relation over two ordered domains, stored in a
//! Binary Search Tree (BST).
//!
//! ## Relation
//!
//! A relation is a set of `(x, y)` pairs, for example countries and the
//! languages spoken in them. One `x` may be paired with many `y`s and one `y`
//! with many `x`s, but a given pair is stored at most once. Pairs can be
//! inserted, tested for, and deleted exactly, and they can also be looked up
//! or deleted in bulk by providing only one of the two elements.
//!
//! ## Composite order
//!
//! The tree orders its `Node`s by `x` first and breaks ties with `y`. The
//! usual BST invariants hold under that composite order:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold a pair less
//!    than its own pair.
//! 2. For every `Node`, all the `Node`s in its right subtree hold a pair
//!    greater than its own pair.
//!
//! The tree is not self-balancing. Lookups take `O(height)`, which is
//! `O(lg N)` for random insertion orders and `O(N)` for sorted ones. The
//! [`Relation`] trait is the seam where a balanced variant could be swapped in.
//!
//! # Examples
//!
//! ```
//! use relation::RelationTree;
//!
//! let mut spoken = RelationTree::new();
//! spoken.insert("France", "French");
//! spoken.insert("France", "Occitan");
//! spoken.insert("Belgium", "French");
//!
//! assert_eq!(spoken.determine_via_x(&"France"), vec![&"French", &"Occitan"]);
//! assert_eq!(spoken.determine_via_y(&"French"), vec![&"Belgium", &"France"]);
//!
//! spoken.delete_via_y(&"French");
//! assert_eq!(spoken.to_string(), "France - Occitan\n");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
pub mod parse;
pub mod relation;
pub mod tree;


pub use parse::ParseRelationError;
pub use relation::Relation;
pub use tree::{Iter, RelationTree};
