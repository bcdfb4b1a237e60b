//! The insert engine: recursive descent, policy-directed placement of
//! duplicates, and red-balancing on the way back out.

use crate::node::Subtree;
use crate::record::{Duplicates, Key, Placement, Record};

/// What an insertion descent hands back up: the rebuilt subtree, plus the
/// incoming record when a `Refuse` key turned it away.
pub(crate) struct Insertion<R> {
    pub(crate) tree: Subtree<R>,
    pub(crate) rejected: Option<R>,
}

impl<R: Record> Subtree<R> {
    /// Inserts `record` below this subtree. New records enter as red
    /// leaves; each level rebuilds itself around the returned child and
    /// applies `red_balanced`. The caller blackens the root.
    pub(crate) fn insert_rec(self, record: R) -> Insertion<R> {
        let node = match self {
            Subtree::Leaf => {
                return Insertion {
                    tree: Subtree::red(record, Subtree::Leaf, Subtree::Leaf),
                    rejected: None,
                }
            }
            Subtree::Node(node) => node,
        };

        let go_left = match record.key().compare(node.record.key()) {
            Placement::BelongsLeft => true,
            Placement::BelongsRight => false,
            Placement::Matches => match <R::Key as Key>::DUPLICATES {
                Duplicates::Refuse => {
                    return Insertion {
                        tree: Subtree::Node(node),
                        rejected: Some(record),
                    }
                }
                // A LIFO duplicate goes left of its equals, a FIFO
                // duplicate right, so the leftmost equal is the newest
                // under LIFO and the oldest under FIFO.
                Duplicates::Lifo => true,
                Duplicates::Fifo => false,
            },
        };

        let (color, held, left, right) = (node.color, node.record, node.left, node.right);
        if go_left {
            let outcome = left.insert_rec(record);
            Insertion {
                tree: Subtree::node(color, held, outcome.tree, *right).red_balanced(),
                rejected: outcome.rejected,
            }
        } else {
            let outcome = right.insert_rec(record);
            Insertion {
                tree: Subtree::node(color, held, *left, outcome.tree).red_balanced(),
                rejected: outcome.rejected,
            }
        }
    }
}
