//! The public tree: a holder around the root subtree whose mutating
//! methods rebind the root to the rebuilt value.

use std::fmt;
use std::mem;

use crate::diagram;
use crate::iter::Iter;
use crate::node::Subtree;
use crate::record::Record;

/// A red-black search tree of records ordered by their keys' comparator.
///
/// The tree stays within the height bound `2·log₂(n+1)` after every
/// mutation. How equal keys are handled is decided by the key type's
/// [`Duplicates`](crate::Duplicates) policy; everything else about the
/// ordering belongs to the key's [`compare`](crate::Key::compare).
///
/// # Examples
///
/// ```
/// use rbtree::{Duplicates, Key, Placement, Record, Tree};
///
/// #[derive(Debug, PartialEq)]
/// struct Id(i32);
///
/// impl Key for Id {
///     const DUPLICATES: Duplicates = Duplicates::Refuse;
///
///     fn compare(&self, other: &Self) -> Placement {
///         match self.0.cmp(&other.0) {
///             std::cmp::Ordering::Less => Placement::BelongsLeft,
///             std::cmp::Ordering::Equal => Placement::Matches,
///             std::cmp::Ordering::Greater => Placement::BelongsRight,
///         }
///     }
/// }
///
/// #[derive(Debug, PartialEq)]
/// struct Item(Id, &'static str);
///
/// impl Record for Item {
///     type Key = Id;
///
///     fn key(&self) -> &Id {
///         &self.0
///     }
/// }
///
/// let mut tree = Tree::new();
/// assert!(tree.insert(Item(Id(2), "two")));
/// assert!(tree.insert(Item(Id(1), "one")));
/// assert!(tree.insert(Item(Id(3), "three")));
///
/// // A second record under an existing key is refused by this policy.
/// assert!(!tree.insert(Item(Id(2), "again")));
///
/// assert_eq!(tree.count(), 3);
/// assert_eq!(tree.fetch(&Id(2)), Some(&Item(Id(2), "two")));
/// assert_eq!(tree.map(|item| item.1), vec!["one", "two", "three"]);
///
/// assert_eq!(tree.remove(&Id(2)), Some(Item(Id(2), "two")));
/// assert_eq!(tree.fetch(&Id(2)), None);
/// ```
#[derive(Clone, PartialEq)]
pub struct Tree<R> {
    root: Subtree<R>,
}

impl<R> Tree<R> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Tree {
            root: Subtree::Leaf,
        }
    }

    /// Whether the tree holds no records.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// The number of stored records, counted by walking the tree.
    pub fn count(&self) -> usize {
        self.root.count()
    }

    /// The number of nodes on the longest root-to-leaf path: 0 when
    /// empty, 1 for a singleton.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// The record at the far left of the tree, if any.
    pub fn leftmost(&self) -> Option<&R> {
        self.root.leftmost()
    }

    /// The record at the far right of the tree, if any.
    pub fn rightmost(&self) -> Option<&R> {
        self.root.rightmost()
    }

    /// Iterates over the records in in-order sequence.
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(&self.root)
    }

    /// Projects every record through `f`, in in-order sequence.
    pub fn map<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&R) -> T,
    {
        let mut out = Vec::with_capacity(self.count());
        self.root.walk(&mut |record| out.push(f(record)));
        out
    }

    /// Renders the tree as an indented one-node-per-line diagram with
    /// each node's color, for inspection and debugging.
    pub fn diagram(&self) -> String
    where
        R: fmt::Debug,
    {
        diagram::render(&self.root)
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Subtree<R> {
        &self.root
    }
}

impl<R: Record> Tree<R> {
    /// Inserts a record. Returns `true` iff the tree grew by one record;
    /// a duplicate refused by the key's policy reports `false` and leaves
    /// the tree untouched.
    pub fn insert(&mut self, record: R) -> bool {
        let outcome = mem::take(&mut self.root).insert_rec(record);
        self.root = outcome.tree.blacken();
        outcome.rejected.is_none()
    }

    /// Inserts every record of a sequence, returning the refused ones in
    /// input order.
    pub fn insert_all<I>(&mut self, records: I) -> Vec<R>
    where
        I: IntoIterator<Item = R>,
    {
        let mut rejected = Vec::new();
        for record in records {
            let outcome = mem::take(&mut self.root).insert_rec(record);
            self.root = outcome.tree.blacken();
            rejected.extend(outcome.rejected);
        }
        rejected
    }

    /// Removes and returns one record matching `key`, or `None` if no
    /// record matches. When the policy admits duplicates, the leftmost
    /// matching record in tree order is taken.
    pub fn remove(&mut self, key: &R::Key) -> Option<R> {
        let outcome = mem::take(&mut self.root).remove_rec(key);
        self.root = if outcome.removed.is_some() {
            outcome.tree.blacken()
        } else {
            outcome.tree
        };
        outcome.removed
    }

    /// Removes every record matching `key`, in the order
    /// [`remove`](Tree::remove) would take them.
    pub fn remove_all(&mut self, key: &R::Key) -> Vec<R> {
        let mut removed = Vec::new();
        while let Some(record) = self.remove(key) {
            removed.push(record);
        }
        removed
    }

    /// Whether some stored record's key matches `key`.
    pub fn contains(&self, key: &R::Key) -> bool {
        self.root.contains(key)
    }

    /// The leftmost record whose key matches `key`, or `None`.
    ///
    /// Under the `Fifo` policy the leftmost equal record is the oldest;
    /// under `Lifo` it is the newest.
    pub fn fetch(&self, key: &R::Key) -> Option<&R> {
        self.root.fetch(key)
    }

    /// Every record whose key matches `key`, in in-order sequence.
    pub fn fetch_all(&self, key: &R::Key) -> Vec<&R> {
        let mut out = Vec::new();
        self.root.fetch_all(key, &mut out);
        out
    }

    /// The in-order neighbours of `key`: the closest record strictly to
    /// its left and the closest strictly to its right. Records whose keys
    /// match `key` are skipped on both sides; either side may be `None`.
    pub fn neighbours_for(&self, key: &R::Key) -> (Option<&R>, Option<&R>) {
        (self.root.left_neighbour(key), self.root.right_neighbour(key))
    }

    /// Like [`neighbours_for`](Tree::neighbours_for), but `None` unless
    /// `key` is actually stored.
    pub fn neighbours_of(&self, key: &R::Key) -> Option<(Option<&R>, Option<&R>)> {
        if self.contains(key) {
            Some(self.neighbours_for(key))
        } else {
            None
        }
    }
}

impl<R> Default for Tree<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: fmt::Debug> fmt::Debug for Tree<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, R> IntoIterator for &'a Tree<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Iter<'a, R> {
        self.iter()
    }
}

impl<R: Record> FromIterator<R> for Tree<R> {
    /// Builds a tree by inserting every record; refused duplicates are
    /// dropped.
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.insert_all(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::test::quick::{
        asc, assert_invariants, fifo, lifo, AscKey, FifoKey, LifoKey, Op,
    };

    fn tree_of(keys: &[i32]) -> Tree<crate::test::quick::AscRecord> {
        let mut tree = Tree::new();
        for &k in keys {
            tree.insert(asc(k));
        }
        tree
    }

    #[test]
    fn mixed_insertions_come_out_ordered_and_balanced() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(tree.map(|r| r.0 .0), vec![1, 3, 4, 5, 7, 8, 9]);
        assert!(tree.height() <= 6);
        assert_invariants(&tree);
    }

    #[test]
    fn ascending_run_stays_within_the_height_bound() {
        // A plain BST would degenerate to height 7 here.
        let tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.count(), 7);
        assert!(tree.height() <= 6);
        assert_invariants(&tree);
    }

    #[test]
    fn removing_the_root_keeps_the_rest() {
        let mut tree = tree_of(&[5, 3, 8]);
        assert_eq!(tree.remove(&AscKey(5)).map(|r| r.0 .0), Some(5));
        assert_eq!(tree.map(|r| r.0 .0), vec![3, 8]);
        assert_invariants(&tree);
    }

    #[test]
    fn fifo_duplicates_keep_arrival_order() {
        let mut tree = Tree::new();
        tree.insert(fifo(5, 'a'));
        tree.insert(fifo(5, 'b'));
        tree.insert(fifo(5, 'c'));

        let key = FifoKey(5);
        let tags: Vec<char> = tree.fetch_all(&key).iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec!['a', 'b', 'c']);

        assert_eq!(tree.remove(&key).map(|r| r.tag), Some('a'));
        assert_eq!(tree.remove(&key).map(|r| r.tag), Some('b'));
        assert_invariants(&tree);
    }

    #[test]
    fn lifo_duplicates_reverse_arrival_order() {
        let mut tree = Tree::new();
        tree.insert(lifo(5, 'a'));
        tree.insert(lifo(5, 'b'));
        tree.insert(lifo(5, 'c'));

        let key = LifoKey(5);
        let tags: Vec<char> = tree.fetch_all(&key).iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec!['c', 'b', 'a']);

        // The leftmost match is taken, which under this policy is the
        // newest record.
        assert_eq!(tree.remove(&key).map(|r| r.tag), Some('c'));
        assert_invariants(&tree);
    }

    #[test]
    fn churn_of_a_thousand_keys_holds_every_invariant() {
        // Deterministic shuffles: multiplying by numbers coprime to 1000
        // permutes 0..1000.
        let mut tree = Tree::new();
        for i in 0..1000u32 {
            tree.insert(asc((i * 617 % 1000) as i32));
            if i % 97 == 0 {
                assert_invariants(&tree);
            }
        }
        assert_eq!(tree.count(), 1000);

        for i in 0..1000u32 {
            let doomed = AscKey((i * 389 % 1000) as i32);
            assert!(tree.remove(&doomed).is_some());
            // Interleave inserts of fresh keys with the removals.
            tree.insert(asc(1000 + i as i32));
            if i % 97 == 0 {
                assert_invariants(&tree);
            }
        }
        assert_eq!(tree.count(), 1000);
        assert_invariants(&tree);
    }

    #[test]
    fn neighbours_skip_the_key_itself() {
        let tree = tree_of(&[10, 20, 30]);
        assert_eq!(
            tree.neighbours_for(&AscKey(20)),
            (tree.fetch(&AscKey(10)), tree.fetch(&AscKey(30)))
        );
        // For an absent key the neighbours bracket the gap, but
        // neighbours_of reports nothing.
        assert_eq!(
            tree.neighbours_for(&AscKey(25)),
            (tree.fetch(&AscKey(20)), tree.fetch(&AscKey(30)))
        );
        assert_eq!(tree.neighbours_of(&AscKey(25)), None);

        let (left, right) = tree.neighbours_of(&AscKey(10)).unwrap();
        assert_eq!(left, None);
        assert_eq!(right.map(|r| r.0 .0), Some(20));
    }

    #[test]
    fn neighbours_skip_duplicates_of_the_key() {
        let mut tree = Tree::new();
        for (k, t) in [(1, 'x'), (5, 'a'), (5, 'b'), (5, 'c'), (9, 'y')] {
            tree.insert(fifo(k, t));
        }
        let (left, right) = tree.neighbours_of(&FifoKey(5)).unwrap();
        assert_eq!(left.map(|r| r.key.0), Some(1));
        assert_eq!(right.map(|r| r.key.0), Some(9));
    }

    #[test]
    fn spine_ends_and_emptiness() {
        let mut tree = tree_of(&[4, 2, 6]);
        assert_eq!(tree.leftmost().map(|r| r.0 .0), Some(2));
        assert_eq!(tree.rightmost().map(|r| r.0 .0), Some(6));
        assert_eq!(tree.height(), 2);

        for k in [2, 4, 6] {
            tree.remove(&AscKey(k));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.leftmost(), None);
        assert_eq!(tree.rightmost(), None);
    }

    #[test]
    fn diagram_lists_every_node_with_its_color() {
        let tree = tree_of(&[2, 1, 3]);
        let diagram = tree.diagram();
        assert!(diagram.contains("(black)"));
        assert_eq!(diagram.lines().count(), 3);
        assert_eq!(Tree::<crate::test::quick::AscRecord>::new().diagram(), "(empty)\n");
    }

    #[quickcheck]
    fn invariants_survive_random_refuse_ops(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        for op in ops {
            match op {
                Op::Insert(k) => {
                    tree.insert(asc(k as i32));
                }
                Op::Remove(k) => {
                    tree.remove(&AscKey(k as i32));
                }
            }
            assert_invariants(&tree);
        }
        true
    }

    #[quickcheck]
    fn invariants_survive_duplicate_churn(ops: Vec<Op<i8>>) -> bool {
        // Squeezing the keyspace to eight values forces heavy duplicate
        // traffic through the FIFO insert and delete paths.
        let mut tree = Tree::new();
        let mut tag = 'a';
        for op in ops {
            match op {
                Op::Insert(k) => {
                    tree.insert(fifo((k % 8) as i32, tag));
                    tag = if tag == 'z' { 'a' } else { (tag as u8 + 1) as char };
                }
                Op::Remove(k) => {
                    tree.remove(&FifoKey((k % 8) as i32));
                }
            }
            assert_invariants(&tree);
        }
        true
    }

    #[quickcheck]
    fn round_trip_drains_to_empty(keys: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        let mut tag = 'a';
        for &k in &keys {
            tree.insert(lifo(k as i32, tag));
            tag = if tag == 'z' { 'a' } else { (tag as u8 + 1) as char };
        }
        for &k in &keys {
            assert!(tree.remove(&LifoKey(k as i32)).is_some());
        }
        tree.is_empty()
    }
}
