//! An ordered container backed by a red-black search tree.
//!
//! ## Records and keys
//!
//! The tree stores client *records* and orders them by their *keys*. A
//! record exposes exactly one thing to the container, its key, and the
//! key type supplies the whole ordering contract: a total 3-way
//! comparator ([`Key::compare`]) and a policy for keys that compare as
//! equal ([`Key::DUPLICATES`]). The container never assumes that "left"
//! means "smaller"; ascending, descending, or any other total order is
//! the client's business.
//!
//! ## Balance
//!
//! Every record lives under a colored node, and a small family of local
//! rewrites keeps the tree red-black after each mutation:
//!
//! 1. No red node has a red child.
//! 2. Every root-to-leaf path crosses the same number of black nodes.
//! 3. The root is black.
//!
//! Together with the search-tree ordering these bound the height by
//! `2·log₂(n+1)`, so lookups, inserts, and removals stay `O(log n)` even
//! for adversarial insertion orders.
//!
//! ## Duplicates
//!
//! When a key's policy admits duplicates, equal records form a run in the
//! in-order sequence: FIFO keys append new duplicates at the right end of
//! the run (so the run reads in arrival order), LIFO keys at the left end
//! (so the run reads newest first). [`Tree::fetch`] and [`Tree::remove`]
//! always take the leftmost record of the run.

#![deny(missing_docs)]

mod balance;
mod delete;
mod diagram;
mod insert;
mod iter;
mod node;
mod query;
mod record;
mod tree;

#[cfg(test)]
mod test;

pub use iter::Iter;
pub use record::{Duplicates, Key, Placement, Record};
pub use tree::Tree;
