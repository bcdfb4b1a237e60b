//! The client-facing contract: what the tree needs to know about the
//! things it stores.
//!
//! The container is deliberately ignorant of what a record *is*. It sees
//! exactly one observable per record, its key, and it asks the key type
//! two things: how a probe key relates to a stored key (a 3-way
//! comparison) and what to do when two keys compare as equal (the
//! duplicates policy). Everything else about ordering lives with the
//! client.
//!
//! # Examples
//!
//! An ascending integer key that refuses duplicates:
//!
//! ```
//! use rbtree::{Duplicates, Key, Placement, Record};
//!
//! struct Id(u32);
//!
//! impl Key for Id {
//!     const DUPLICATES: Duplicates = Duplicates::Refuse;
//!
//!     fn compare(&self, other: &Self) -> Placement {
//!         match self.0.cmp(&other.0) {
//!             std::cmp::Ordering::Less => Placement::BelongsLeft,
//!             std::cmp::Ordering::Equal => Placement::Matches,
//!             std::cmp::Ordering::Greater => Placement::BelongsRight,
//!         }
//!     }
//! }
//!
//! struct User {
//!     id: Id,
//!     name: String,
//! }
//!
//! impl Record for User {
//!     type Key = Id;
//!
//!     fn key(&self) -> &Id {
//!         &self.id
//!     }
//! }
//! ```

/// Where a key belongs relative to another key.
///
/// This is the result of [`Key::compare`]. The labels are from the
/// comparator's point of view, not ascending/descending: the tree assumes
/// only that the relation is total, never that "left" means "smaller".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The probe key belongs in the left subtree of the compared key.
    BelongsLeft,
    /// The two keys are equal under the comparator.
    Matches,
    /// The probe key belongs in the right subtree of the compared key.
    BelongsRight,
}

/// What the tree does with a record whose key [`Matches`](Placement::Matches)
/// a stored record's key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Duplicates {
    /// Reject the new record; the tree keeps the one it has.
    Refuse,
    /// Keep both. A new duplicate is placed strictly to the right of every
    /// stored equal, so the leftmost equal record is the oldest.
    Fifo,
    /// Keep both. A new duplicate is placed strictly to the left of every
    /// stored equal, so the leftmost equal record is the newest.
    Lifo,
}

/// A key type: a total 3-way comparator plus a duplicates policy.
///
/// The comparator must be total, deterministic, and stable for as long as
/// a record carrying the key is stored. The tree does not detect
/// violations; an unstable comparator silently breaks the search-tree
/// ordering (see also the note on [`Record::key`]).
pub trait Key {
    /// The policy applied when an inserted key compares as
    /// [`Matches`](Placement::Matches) against a stored key.
    const DUPLICATES: Duplicates;

    /// The placement of `self` relative to `other`.
    fn compare(&self, other: &Self) -> Placement;
}

/// A record the tree can store: anything that exposes a [`Key`].
///
/// The tree consults the key at mutation time only. If the observable key
/// of a stored record later changes, the record is *not* repositioned;
/// that is contractual, intended for clients that remove and reinsert
/// records when their keys change.
pub trait Record {
    /// The key type this record is ordered by.
    type Key: Key;

    /// A view of this record's key.
    fn key(&self) -> &Self::Key;
}
