//! The delete engine: recursive descent, the `replace` splice at a match,
//! and black-height repair propagated upward through a `fix_height`
//! signal.

use crate::node::{Color, Node, Subtree};
use crate::record::{Duplicates, Key, Placement, Record};

/// What a deletion descent hands back up: the rebuilt subtree, whether it
/// is one black short of what stood here before, and the record that was
/// taken out.
pub(crate) struct Removal<R> {
    pub(crate) tree: Subtree<R>,
    pub(crate) fix_height: bool,
    pub(crate) removed: Option<R>,
}

impl<R> Removal<R> {
    fn untouched(tree: Subtree<R>) -> Self {
        Removal {
            tree,
            fix_height: false,
            removed: None,
        }
    }
}

impl<R: Record> Subtree<R> {
    /// Removes one record matching `key`, preferring the leftmost match
    /// in tree order when the policy admits duplicates. The caller
    /// blackens the root after a removal.
    pub(crate) fn remove_rec(self, key: &R::Key) -> Removal<R> {
        let node = match self {
            Subtree::Leaf => return Removal::untouched(Subtree::Leaf),
            Subtree::Node(node) => node,
        };

        match key.compare(node.record.key()) {
            Placement::BelongsLeft => node.left_delete(key),
            Placement::BelongsRight => node.right_delete(key),
            Placement::Matches => match <R::Key as Key>::DUPLICATES {
                Duplicates::Refuse => node.replace(),
                Duplicates::Fifo | Duplicates::Lifo => {
                    // Equal keys may sit deeper on the left; take the
                    // leftmost one and fall back to this node only when
                    // the left subtree holds no match.
                    let attempt = node.left_delete(key);
                    if attempt.removed.is_some() {
                        attempt
                    } else {
                        match attempt.tree {
                            Subtree::Node(unchanged) => unchanged.replace(),
                            tree => Removal::untouched(tree),
                        }
                    }
                }
            },
        }
    }
}

impl<R: Record> Node<R> {
    /// Removes the node itself: its subtrees are fused into one, and the
    /// result is one black short exactly when the node was black.
    fn replace(self) -> Removal<R> {
        Removal {
            fix_height: self.color == Color::Black,
            tree: self.left.fused(*self.right),
            removed: Some(self.record),
        }
    }

    /// Descends into the left subtree. A returning deficit rebuilds the
    /// node black and runs `left_balanced`; a red node absorbs the
    /// deficit by that recoloring, a black node passes it on.
    fn left_delete(self, key: &R::Key) -> Removal<R> {
        let Node {
            color,
            record,
            left,
            right,
        } = self;
        let outcome = left.remove_rec(key);
        if outcome.fix_height {
            Removal {
                tree: Subtree::black(record, outcome.tree, *right).left_balanced(),
                fix_height: color == Color::Black,
                removed: outcome.removed,
            }
        } else {
            Removal {
                tree: Subtree::node(color, record, outcome.tree, *right),
                fix_height: false,
                removed: outcome.removed,
            }
        }
    }

    /// Mirror of [`left_delete`](Node::left_delete).
    fn right_delete(self, key: &R::Key) -> Removal<R> {
        let Node {
            color,
            record,
            left,
            right,
        } = self;
        let outcome = right.remove_rec(key);
        if outcome.fix_height {
            Removal {
                tree: Subtree::black(record, *left, outcome.tree).right_balanced(),
                fix_height: color == Color::Black,
                removed: outcome.removed,
            }
        } else {
            Removal {
                tree: Subtree::node(color, record, *left, outcome.tree),
                fix_height: false,
                removed: outcome.removed,
            }
        }
    }
}
