//! Polymorphic containment over runtime item collections.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

/// Collections a compiled predicate can be evaluated against.
///
/// Containment is deliberately three-way polymorphic, and the difference
/// is part of the observable contract:
///
/// - sets and sequences test **exact element equality**;
/// - raw text tests **substring** containment, so the key `"foo"` is
///   contained in `"foobarbaz"`.
///
/// # Examples
/// ```
/// use matchexpr::Items;
/// assert!(["foo", "bar"].contains_item("foo"));
/// assert!(!["foobarbaz"].contains_item("foo"));
/// assert!("foobarbaz".contains_item("foo"));
/// ```
pub trait Items {
    /// Whether `key` is contained in the collection.
    fn contains_item(&self, key: &str) -> bool;

    /// Whether the collection has no elements.
    fn is_empty(&self) -> bool;
}

impl Items for str {
    fn contains_item(&self, key: &str) -> bool {
        self.contains(key)
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl Items for String {
    fn contains_item(&self, key: &str) -> bool {
        self.as_str().contains_item(key)
    }

    fn is_empty(&self) -> bool {
        Items::is_empty(self.as_str())
    }
}

impl<S: AsRef<str>> Items for [S] {
    fn contains_item(&self, key: &str) -> bool {
        self.iter().any(|item| item.as_ref() == key)
    }

    fn is_empty(&self) -> bool {
        <[S]>::is_empty(self)
    }
}

impl<S: AsRef<str>, const N: usize> Items for [S; N] {
    fn contains_item(&self, key: &str) -> bool {
        self.as_slice().contains_item(key)
    }

    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<S: AsRef<str>> Items for Vec<S> {
    fn contains_item(&self, key: &str) -> bool {
        self.as_slice().contains_item(key)
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<S: Borrow<str> + Eq + Hash> Items for HashSet<S> {
    fn contains_item(&self, key: &str) -> bool {
        self.contains(key)
    }

    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<S: Borrow<str> + Ord> Items for BTreeSet<S> {
    fn contains_item(&self, key: &str) -> bool {
        self.contains(key)
    }

    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

impl<T: Items + ?Sized> Items for &T {
    fn contains_item(&self, key: &str) -> bool {
        (**self).contains_item(key)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}
