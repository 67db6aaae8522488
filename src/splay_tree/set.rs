use crate::splay_tree::node::Node;
use crate::splay_tree::tree::{self, Tree};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set of keys stored in a splay tree.
///
/// `insert`, `search`, and `remove` splay the key they look for to the root of the tree. If the key
/// is absent, the last node visited while looking for it becomes the root instead, so a failed
/// lookup still leaves a neighbour of the key at the top. Each of these runs in amortized
/// `O(log n)` time.
///
/// # Examples
/// ```
/// use splay_collections::splay_tree::SplaySet;
///
/// let mut set = SplaySet::new();
/// set.insert(1);
/// set.insert(5);
/// set.insert(3);
///
/// assert_eq!(set.search(&1), Some(&1));
/// assert_eq!(set.root(), Some(&1));
///
/// assert_eq!(set.search(&4), None);
/// assert_eq!(set.root(), Some(&5));
///
/// assert_eq!(set.remove(&3), Some(3));
/// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &5]);
/// ```
pub struct SplaySet<T> {
    tree: Tree<T>,
    len: usize,
}

impl<T> SplaySet<T> {
    /// Constructs a new, empty `SplaySet<T>`.
    pub fn new() -> Self {
        SplaySet { tree: None, len: 0 }
    }

    /// Returns the key at the root of the tree, which is the key touched by the most recent
    /// `insert`, `search`, or `remove`.
    pub fn root(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.key)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every key from the set.
    pub fn clear(&mut self) {
        debug!("clearing splay set with {} keys", self.len);
        tree::clear(&mut self.tree);
        self.len = 0;
    }

    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns an iterator over the keys in ascending order. Iterating does not splay.
    pub fn iter(&self) -> SplaySetIter<'_, T> {
        let mut iter = SplaySetIter { stack: Vec::new() };
        iter.push_left_spine(&self.tree);
        iter
    }
}

impl<T> SplaySet<T>
where
    T: Ord,
{
    /// Inserts `key` and splays it to the root. Returns `false` without modifying the set if `key`
    /// was already present; the existing node is splayed to the root in that case.
    ///
    /// # Examples
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert!(set.insert(2));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Looks up `key`, splaying it to the root if present or the last node visited if not.
    pub fn search<V>(&mut self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::search(&mut self.tree, key)
    }

    /// Removes `key` and returns it. The tree is splayed whether or not `key` was present.
    ///
    /// # Examples
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), Some(2));
    /// assert_eq!(set.remove(&2), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let removed = tree::remove(&mut self.tree, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Checks for `key` without restructuring the tree.
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::contains(&self.tree, key)
    }
}

impl<T> Drop for SplaySet<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T> Default for SplaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for SplaySet<T> {
    type IntoIter = SplaySetIntoIter<T>;
    type Item = T;

    fn into_iter(mut self) -> Self::IntoIter {
        SplaySetIntoIter {
            tree: self.tree.take(),
            len: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a SplaySet<T> {
    type IntoIter = SplaySetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `SplaySet<T>`.
///
/// This iterator traverses the keys of a set in ascending order.
pub struct SplaySetIntoIter<T> {
    tree: Tree<T>,
    len: usize,
}

impl<T> Iterator for SplaySetIntoIter<T> {
    type Item = T;

    // Rotating the minimum up the left spine and unlinking it flattens the tree once overall.
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut node = self.tree.take()?;
            if node.left.is_some() {
                node.rotate_right();
                self.tree = Some(node);
            } else {
                self.tree = node.right.take();
                self.len -= 1;
                return Some(node.key);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for SplaySetIntoIter<T> {}

impl<T> Drop for SplaySetIntoIter<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

/// An iterator for `SplaySet<T>`.
///
/// This iterator traverses the keys of a set in ascending order.
pub struct SplaySetIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> SplaySetIter<'a, T> {
    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Some(node) = tree {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, T> Iterator for SplaySetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.key)
    }
}

impl<T> FromIterator<T> for SplaySet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = SplaySet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for SplaySet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> fmt::Debug for SplaySet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
