//! Key-driven read-only queries: membership, record lookup, and the
//! in-order neighbour searches. All of them descend without touching the
//! shape.

use crate::node::Subtree;
use crate::record::{Duplicates, Key, Placement, Record};

impl<R: Record> Subtree<R> {
    pub(crate) fn contains(&self, key: &R::Key) -> bool {
        let mut current = self;
        while let Subtree::Node(n) = current {
            match key.compare(n.record.key()) {
                Placement::BelongsLeft => current = &n.left,
                Placement::BelongsRight => current = &n.right,
                Placement::Matches => return true,
            }
        }
        false
    }

    /// The leftmost record matching `key`. Under `Refuse` the first match
    /// is the only one; under the duplicate-keeping policies the left
    /// subtree is tried first and this node is the fallback.
    pub(crate) fn fetch(&self, key: &R::Key) -> Option<&R> {
        let n = self.as_node()?;
        match key.compare(n.record.key()) {
            Placement::BelongsLeft => n.left.fetch(key),
            Placement::BelongsRight => n.right.fetch(key),
            Placement::Matches => match <R::Key as Key>::DUPLICATES {
                Duplicates::Refuse => Some(&n.record),
                Duplicates::Fifo | Duplicates::Lifo => {
                    n.left.fetch(key).or(Some(&n.record))
                }
            },
        }
    }

    /// Collects every record matching `key`, in in-order sequence. A
    /// matching node visits both of its subtrees; a non-matching node
    /// narrows to one side.
    pub(crate) fn fetch_all<'a>(&'a self, key: &R::Key, out: &mut Vec<&'a R>) {
        let Some(n) = self.as_node() else { return };
        match key.compare(n.record.key()) {
            Placement::BelongsLeft => n.left.fetch_all(key, out),
            Placement::BelongsRight => n.right.fetch_all(key, out),
            Placement::Matches => {
                n.left.fetch_all(key, out);
                out.push(&n.record);
                n.right.fetch_all(key, out);
            }
        }
    }

    /// The closest record strictly left of `key` in in-order sequence.
    /// Records matching `key` are skipped, so for a stored key this is
    /// the predecessor of its leftmost duplicate.
    pub(crate) fn left_neighbour(&self, key: &R::Key) -> Option<&R> {
        let mut best = None;
        let mut current = self;
        while let Subtree::Node(n) = current {
            match key.compare(n.record.key()) {
                Placement::BelongsRight => {
                    best = Some(&n.record);
                    current = &n.right;
                }
                Placement::BelongsLeft | Placement::Matches => current = &n.left,
            }
        }
        best
    }

    /// Mirror of [`left_neighbour`](Subtree::left_neighbour): the closest
    /// record strictly right of `key`.
    pub(crate) fn right_neighbour(&self, key: &R::Key) -> Option<&R> {
        let mut best = None;
        let mut current = self;
        while let Subtree::Node(n) = current {
            match key.compare(n.record.key()) {
                Placement::BelongsLeft => {
                    best = Some(&n.record);
                    current = &n.left;
                }
                Placement::BelongsRight | Placement::Matches => current = &n.right,
            }
        }
        best
    }
}
