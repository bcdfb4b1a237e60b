//! The local rewrites that keep the tree red-black.
//!
//! Three families: [`red_balanced`](Subtree::red_balanced) removes a
//! red-red violation introduced by a child, [`left_balanced`](Subtree::left_balanced)
//! and [`right_balanced`](Subtree::right_balanced) repair a child subtree
//! that came back from a deletion one black short, and
//! [`fused`](Subtree::fused) splices the two subtrees of a removed node
//! back into one. Each rewrite peeks at the colors it dispatches on, then
//! takes the matched nodes apart by value and rebuilds the balanced shape.

use crate::node::{Color, Subtree};

/// Which grandchild carries the red-red violation.
enum RedRed {
    LeftLeft,
    LeftRight,
    RightLeft,
    RightRight,
}

/// How a node with a short left child gets repaired.
enum ShortLeft {
    /// The short child came back red; blackening it restores the height.
    RedChild,
    /// Black sibling: recolor it red and resolve any red-red below it.
    BlackSibling,
    /// Red sibling with a black near grandchild: compound rotation.
    RedSibling,
}

/// Mirror of [`ShortLeft`] for a short right child.
enum ShortRight {
    RedChild,
    BlackSibling,
    RedSibling,
}

impl<R> Subtree<R> {
    fn red_red(&self) -> Option<RedRed> {
        let n = self.as_node()?;
        if let Some(l) = n.left.as_node() {
            if l.color == Color::Red {
                if l.left.is_red() {
                    return Some(RedRed::LeftLeft);
                }
                if l.right.is_red() {
                    return Some(RedRed::LeftRight);
                }
            }
        }
        if let Some(r) = n.right.as_node() {
            if r.color == Color::Red {
                if r.left.is_red() {
                    return Some(RedRed::RightLeft);
                }
                if r.right.is_red() {
                    return Some(RedRed::RightRight);
                }
            }
        }
        None
    }

    /// Rewrites any of the four red-red shapes to the balanced one:
    ///
    /// ```text
    ///       z            z          x            x
    ///      / \          / \        / \          / \
    ///     y   d        x   d      a   z        a   y          y
    ///    / \          / \            / \          / \   =>   / \
    ///   x   c        a   y          y   d        b   z      x   z
    ///  / \              / \        / \              / \
    /// a   b            b   c      b   c            c   d
    /// ```
    ///
    /// where the violating pair is red, producing `red(y)` over
    /// `black(x)` and `black(z)`. Any other shape is returned unchanged.
    pub(crate) fn red_balanced(self) -> Self {
        let Some(shape) = self.red_red() else {
            return self;
        };
        let root = self.into_node();
        match shape {
            RedRed::LeftLeft => {
                let l = root.left.into_node();
                let ll = l.left.into_node();
                Subtree::red(
                    l.record,
                    Subtree::black(ll.record, *ll.left, *ll.right),
                    Subtree::black(root.record, *l.right, *root.right),
                )
            }
            RedRed::LeftRight => {
                let l = root.left.into_node();
                let lr = l.right.into_node();
                Subtree::red(
                    lr.record,
                    Subtree::black(l.record, *l.left, *lr.left),
                    Subtree::black(root.record, *lr.right, *root.right),
                )
            }
            RedRed::RightLeft => {
                let r = root.right.into_node();
                let rl = r.left.into_node();
                Subtree::red(
                    rl.record,
                    Subtree::black(root.record, *root.left, *rl.left),
                    Subtree::black(r.record, *rl.right, *r.right),
                )
            }
            RedRed::RightRight => {
                let r = root.right.into_node();
                let rr = r.right.into_node();
                Subtree::red(
                    r.record,
                    Subtree::black(root.record, *root.left, *r.left),
                    Subtree::black(rr.record, *rr.left, *rr.right),
                )
            }
        }
    }

    fn short_left(&self) -> Option<ShortLeft> {
        let n = self.as_node()?;
        if n.left.is_red() {
            return Some(ShortLeft::RedChild);
        }
        let r = n.right.as_node()?;
        if r.color == Color::Black {
            return Some(ShortLeft::BlackSibling);
        }
        match r.left.as_node() {
            Some(rl) if rl.color == Color::Black => Some(ShortLeft::RedSibling),
            _ => None,
        }
    }

    /// Repairs a node whose left subtree is one black short. The deletion
    /// wrappers rebuild the node black before calling this; whether the
    /// deficit escapes upward is their decision, not this rewrite's.
    pub(crate) fn left_balanced(self) -> Self {
        let Some(shape) = self.short_left() else {
            return self;
        };
        let root = self.into_node();
        match shape {
            ShortLeft::RedChild => Subtree::red(
                root.record,
                (*root.left).paint(Color::Black),
                *root.right,
            ),
            ShortLeft::BlackSibling => Subtree::black(
                root.record,
                *root.left,
                (*root.right).paint(Color::Red),
            )
            .red_balanced(),
            ShortLeft::RedSibling => {
                let r = root.right.into_node();
                let rl = r.left.into_node();
                // The far sibling subtree is black under a red parent;
                // recoloring it red hands the inner rewrite a shape
                // red_balanced can finish.
                let inner = Subtree::black(
                    r.record,
                    *rl.right,
                    (*r.right).paint(Color::Red),
                )
                .red_balanced();
                Subtree::red(
                    rl.record,
                    Subtree::black(root.record, *root.left, *rl.left),
                    inner,
                )
            }
        }
    }

    fn short_right(&self) -> Option<ShortRight> {
        let n = self.as_node()?;
        if n.right.is_red() {
            return Some(ShortRight::RedChild);
        }
        let l = n.left.as_node()?;
        if l.color == Color::Black {
            return Some(ShortRight::BlackSibling);
        }
        match l.right.as_node() {
            Some(lr) if lr.color == Color::Black => Some(ShortRight::RedSibling),
            _ => None,
        }
    }

    /// Mirror of [`left_balanced`](Subtree::left_balanced) for a right
    /// subtree that is one black short.
    pub(crate) fn right_balanced(self) -> Self {
        let Some(shape) = self.short_right() else {
            return self;
        };
        let root = self.into_node();
        match shape {
            ShortRight::RedChild => Subtree::red(
                root.record,
                *root.left,
                (*root.right).paint(Color::Black),
            ),
            ShortRight::BlackSibling => Subtree::black(
                root.record,
                (*root.left).paint(Color::Red),
                *root.right,
            )
            .red_balanced(),
            ShortRight::RedSibling => {
                let l = root.left.into_node();
                let lr = l.right.into_node();
                let inner = Subtree::black(
                    l.record,
                    (*l.left).paint(Color::Red),
                    *lr.left,
                )
                .red_balanced();
                Subtree::red(
                    lr.record,
                    inner,
                    Subtree::black(root.record, *lr.right, *root.right),
                )
            }
        }
    }

    /// Merges the left and right subtrees of a removed node into one tree
    /// that keeps the ordering and the red-red invariant. When both
    /// inputs are black the result can be one black short at its top; the
    /// delete engine repairs that through its `fix_height` signal.
    pub(crate) fn fused(self, right: Subtree<R>) -> Subtree<R> {
        let (l, r) = match (self, right) {
            (Subtree::Leaf, r) => return r,
            (l, Subtree::Leaf) => return l,
            (Subtree::Node(l), Subtree::Node(r)) => (l, r),
        };
        match (l.color, r.color) {
            (Color::Black, Color::Red) => Subtree::red(
                r.record,
                Subtree::Node(l).fused(*r.left),
                *r.right,
            )
            .red_balanced(),
            (Color::Red, Color::Black) => Subtree::red(
                l.record,
                *l.left,
                l.right.fused(Subtree::Node(r)),
            )
            .red_balanced(),
            (Color::Red, Color::Red) => {
                let mid = l.right.fused(*r.left);
                match mid {
                    Subtree::Node(m) if m.color == Color::Red => Subtree::red(
                        m.record,
                        Subtree::red(l.record, *l.left, *m.left),
                        Subtree::red(r.record, *m.right, *r.right),
                    )
                    .red_balanced(),
                    mid => Subtree::red(
                        l.record,
                        *l.left,
                        Subtree::red(r.record, mid, *r.right),
                    )
                    .red_balanced(),
                }
            }
            (Color::Black, Color::Black) => {
                let mid = l.right.fused(*r.left);
                match mid {
                    Subtree::Node(m) if m.color == Color::Red => Subtree::red(
                        m.record,
                        Subtree::black(l.record, *l.left, *m.left),
                        Subtree::black(r.record, *m.right, *r.right),
                    )
                    .red_balanced(),
                    mid => Subtree::black(
                        l.record,
                        *l.left,
                        Subtree::red(r.record, mid, *r.right),
                    )
                    .red_balanced(),
                }
            }
        }
    }
}
