//! A duplicate-free ordered binary search tree with on-demand rebalancing.
//!
//! This crate provides [`BSTree`], an ordered set stored as a plain binary search tree. The tree
//! is never rebalanced behind your back: insertion and removal only do the local repair needed
//! to keep the values ordered, and [`balance`](BSTree::balance) or
//! [`rebalance`](BSTree::rebalance) rebuild it to the minimum possible height when asked.
//!
//! # Example
//!
//! ```
//! use bstree::BSTree;
//!
//! let mut tree: BSTree<_> = (1..=15).collect();
//! assert_eq!(tree.height(), 15);
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 4);
//!
//! assert!(tree.remove(&8));
//! assert!(!tree.insert(3));
//! assert_eq!(tree.len(), 14);
//!
//! // Walk the values with an explicit cursor.
//! let mut cursor = tree.cursor();
//! assert_eq!(cursor.value(), &1);
//! cursor.advance();
//! assert_eq!(cursor.value(), &2);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Borrowed lookups** - `contains`, `find` and `remove` accept any `Q` with `T: Borrow<Q>`
//! - **Memoized length** - Subtree sizes are cached and only recomputed along mutated paths
//! - **`tracing`** - Optional feature emitting `trace` events for structural repairs and rebuilds
//!
//! # Implementation
//!
//! Every node owns its children through `Box`, so there are no parent pointers and no unsafe
//! code. The tree recurses once per level for mutations, so a tree that was built from a long
//! sorted run should be rebalanced before heavy use.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod bstree;
pub mod cursor;

pub use bstree::BSTree;
pub use cursor::Cursor;
