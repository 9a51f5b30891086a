//! A mutable, unbalanced BST holding a relation of `(x, y)` pairs. Every node is owned by a single
//! slot (the root or a parent's child), and all deletions work by replacing the occupant of a
//! slot.
//!
//! # Examples
//!
//! ```
//! use relation::RelationTree;
//!
//! let mut tree = RelationTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&'a', &1));
//!
//! assert!(tree.insert('a', 1));
//! assert!(tree.contains(&'a', &1));
//!
//! // Inserting the same pair again changes nothing.
//! assert!(!tree.insert('a', 1));
//! assert_eq!(tree.len(), 1);
//!
//! tree.insert('a', 2);
//! tree.insert('b', 1);
//!
//! // Delete every pair with `'a'` in it.
//! assert_eq!(tree.delete_via_x(&'a'), 2);
//! assert_eq!(tree.to_string(), "b - 1\n");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::node::{splice, Link, Node};

/// A relation between `X`s and `Y`s, stored in a Binary Search Tree ordered by `x` and then `y`.
///
/// Equality of elements is decided by their [`Ord`] implementation alone.
pub struct RelationTree<X, Y> {
    root: Link<X, Y>,
    len: usize,
}

impl<X, Y> Default for RelationTree<X, Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X, Y> Drop for RelationTree<X, Y> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<X, Y> RelationTree<X, Y> {
    /// Generates a new, empty `RelationTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of pairs in the relation.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the relation holds no pairs at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns `true` if the exact pair `(x, y)` is in the relation.
    ///
    /// # Examples
    ///
    /// ```
    /// use relation::RelationTree;
    ///
    /// let mut tree = RelationTree::new();
    /// tree.insert(1, "one");
    ///
    /// assert!(tree.contains(&1, &"one"));
    /// assert!(!tree.contains(&1, &"uno"));
    /// ```
    pub fn contains(&self, x: &X, y: &Y) -> bool
    where
        X: Ord,
        Y: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match node.cmp_pair(x, y) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// Inserts the pair `(x, y)`. Returns `false`, leaving the tree untouched, if the pair was
    /// already present.
    pub fn insert(&mut self, x: X, y: Y) -> bool
    where
        X: Ord,
        Y: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => node.cmp_pair(&x, &y),
                None => {
                    *slot = Some(Node::new_boxed(x, y));
                    self.len += 1;
                    trace!(len = self.len, "inserted pair");
                    return true;
                }
            };
            if ordering == Ordering::Equal {
                return false;
            }
            slot = match slot {
                Some(node) => node.child_mut(ordering),
                None => return false,
            };
        }
    }

    /// Deletes the pair `(x, y)`. Returns `false` if there was no such pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use relation::RelationTree;
    ///
    /// let mut tree = RelationTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert!(tree.delete(&1, &2));
    /// assert!(!tree.contains(&1, &2));
    ///
    /// // A second delete is a no-op.
    /// assert!(!tree.delete(&1, &2));
    /// ```
    pub fn delete(&mut self, x: &X, y: &Y) -> bool
    where
        X: Ord,
        Y: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => node.cmp_pair(x, y),
                None => return false,
            };
            if ordering == Ordering::Equal {
                splice(slot);
                self.len -= 1;
                trace!(len = self.len, "deleted pair");
                return true;
            }
            slot = match slot {
                Some(node) => node.child_mut(ordering),
                None => return false,
            };
        }
    }

    /// Deletes every pair whose first element is `x` and returns how many were deleted.
    ///
    /// Nodes are removed top-down as the descent meets them. After each removal the node that
    /// moved into the vacated slot is examined again, since it may carry the same `x`.
    pub fn delete_via_x(&mut self, x: &X) -> usize
    where
        X: Ord,
        Y: Ord,
    {
        let mut removed = 0;
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => x.cmp(&node.x),
                None => break,
            };
            if ordering == Ordering::Equal {
                splice(slot);
                removed += 1;
                continue;
            }
            slot = match slot {
                Some(node) => node.child_mut(ordering),
                None => break,
            };
        }

        self.len -= removed;
        debug!(removed, len = self.len, "deleted pairs by first element");
        removed
    }

    /// Deletes every pair whose second element is `y` and returns how many were deleted.
    ///
    /// The tree isn't ordered by `y` alone so every node is visited. Whenever a slot's occupant
    /// is deleted, the replacement in the same slot is examined again before moving on to its
    /// children.
    pub fn delete_via_y(&mut self, y: &Y) -> usize
    where
        X: Ord,
        Y: Ord,
    {
        let mut removed = 0;
        let mut pending = vec![&mut self.root];
        while let Some(slot) = pending.pop() {
            while slot.as_deref().map_or(false, |n| y.cmp(&n.y) == Ordering::Equal) {
                splice(slot);
                removed += 1;
            }
            if let Some(node) = slot.as_deref_mut() {
                let Node { left, right, .. } = node;
                pending.push(right);
                pending.push(left);
            }
        }

        self.len -= removed;
        debug!(removed, len = self.len, "deleted pairs by second element");
        removed
    }

    /// Returns every `y` paired with `x`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use relation::RelationTree;
    ///
    /// let mut tree = RelationTree::new();
    /// tree.insert("France", "Occitan");
    /// tree.insert("France", "French");
    /// tree.insert("Belgium", "French");
    ///
    /// assert_eq!(tree.determine_via_x(&"France"), vec![&"French", &"Occitan"]);
    /// assert!(tree.determine_via_x(&"Spain").is_empty());
    /// ```
    pub fn determine_via_x(&self, x: &X) -> Vec<&Y>
    where
        X: Ord,
    {
        let mut found = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            // Subtrees on the far side of a non-matching node can't hold `x`, so only matching
            // nodes are stacked up for in-order emission.
            while let Some(node) = current {
                current = match x.cmp(&node.x) {
                    Ordering::Less => node.left.as_deref(),
                    Ordering::Greater => node.right.as_deref(),
                    Ordering::Equal => {
                        stack.push(node);
                        node.left.as_deref()
                    }
                };
            }
            match stack.pop() {
                Some(node) => {
                    found.push(&node.y);
                    current = node.right.as_deref();
                }
                None => break,
            }
        }

        found
    }

    /// Returns every `x` paired with `y`, in ascending order. This walks the whole tree.
    pub fn determine_via_y(&self, y: &Y) -> Vec<&X>
    where
        Y: Ord,
    {
        self.iter()
            .filter(|&(_, other)| y.cmp(other) == Ordering::Equal)
            .map(|(x, _)| x)
            .collect()
    }

    /// Removes every pair, releasing the whole tree.
    pub fn empty(&mut self) {
        let removed = self.len;
        self.teardown();
        debug!(removed, "emptied relation");
    }

    /// Same as [`RelationTree::empty`].
    pub fn clear(&mut self) {
        self.empty();
    }

    /// An in-order iterator over the pairs, i.e. in ascending composite order.
    pub fn iter(&self) -> Iter<'_, X, Y> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Writes every pair in ascending order, one `x - y` per line.
    pub fn write_to<W>(&self, mut writer: W) -> io::Result<()>
    where
        W: Write,
        X: fmt::Display,
        Y: fmt::Display,
    {
        for (x, y) in self {
            writeln!(writer, "{} - {}", x, y)?;
        }

        Ok(())
    }

    /// Prints every pair to stdout in ascending order, one `x - y` per line.
    ///
    /// A closed or broken stdout is ignored, the same as for any other diagnostic print.
    pub fn print(&self)
    where
        X: fmt::Display,
        Y: fmt::Display,
    {
        let stdout = io::stdout();
        let _ = self.write_to(stdout.lock());
    }

    /// Drops every node using an explicit stack so that degenerate trees can't overflow the call
    /// stack the way a recursive drop would.
    fn teardown(&mut self) {
        let mut stack: Vec<Box<Node<X, Y>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Whether the whole tree satisfies the composite-order invariant and `len` matches the
    /// number of nodes.
    #[cfg(test)]
    pub(crate) fn is_ordered(&self) -> bool
    where
        X: Ord,
        Y: Ord,
    {
        let pairs: Vec<_> = self.iter().collect();
        let sorted = pairs
            .windows(2)
            .all(|w| w[0].0.cmp(w[1].0).then_with(|| w[0].1.cmp(w[1].1)) == Ordering::Less);

        sorted && pairs.len() == self.len
    }
}

impl<X, Y> fmt::Display for RelationTree<X, Y>
where
    X: fmt::Display,
    Y: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, y) in self {
            writeln!(f, "{} - {}", x, y)?;
        }

        Ok(())
    }
}

impl<X, Y> fmt::Debug for RelationTree<X, Y>
where
    X: fmt::Debug,
    Y: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<X, Y> Extend<(X, Y)> for RelationTree<X, Y>
where
    X: Ord,
    Y: Ord,
{
    fn extend<I: IntoIterator<Item = (X, Y)>>(&mut self, pairs: I) {
        for (x, y) in pairs {
            self.insert(x, y);
        }
    }
}

impl<X, Y> FromIterator<(X, Y)> for RelationTree<X, Y>
where
    X: Ord,
    Y: Ord,
{
    fn from_iter<I: IntoIterator<Item = (X, Y)>>(pairs: I) -> Self {
        let mut tree = Self::new();
        tree.extend(pairs);
        tree
    }
}

impl<'a, X, Y> IntoIterator for &'a RelationTree<X, Y> {
    type Item = (&'a X, &'a Y);
    type IntoIter = Iter<'a, X, Y>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over the pairs of a [`RelationTree`]. Created by [`RelationTree::iter`].
pub struct Iter<'a, X, Y> {
    stack: Vec<&'a Node<X, Y>>,
    remaining: usize,
}

impl<'a, X, Y> Iter<'a, X, Y> {
    fn push_left_spine(&mut self, mut current: Option<&'a Node<X, Y>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, X, Y> Iterator for Iter<'a, X, Y> {
    type Item = (&'a X, &'a Y);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.x, &node.y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<X, Y> ExactSizeIterator for Iter<'_, X, Y> {}

impl<X, Y> FusedIterator for Iter<'_, X, Y> {}
