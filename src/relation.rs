//! The operations every relation container supports, independent of how it stores its pairs.

use std::fmt;

use crate::tree::RelationTree;

/// A binary relation: a set of `(x, y)` pairs, each stored at most once.
///
/// [`RelationTree`] is the provided implementation. Code that only needs the relation semantics
/// can be written against this trait so that a balanced container could be used instead.
///
/// # Examples
///
/// ```
/// use relation::{Relation, RelationTree};
///
/// fn languages_of<R: Relation<&'static str, &'static str>>(r: &R) -> usize {
///     r.determine_via_x(&"Switzerland").len()
/// }
///
/// let mut r = RelationTree::new();
/// Relation::insert(&mut r, "Switzerland", "German");
/// Relation::insert(&mut r, "Switzerland", "Romansh");
/// assert_eq!(languages_of(&r), 2);
/// ```
pub trait Relation<X, Y> {
    /// Whether the exact pair `(x, y)` is in the relation.
    fn contains(&self, x: &X, y: &Y) -> bool;

    /// Every `y` paired with `x`.
    fn determine_via_x(&self, x: &X) -> Vec<&Y>;

    /// Every `x` paired with `y`.
    fn determine_via_y(&self, y: &Y) -> Vec<&X>;

    /// Removes every pair.
    fn empty(&mut self);

    /// Adds the pair `(x, y)`, doing nothing if it's already there. Returns whether the pair was
    /// added.
    fn insert(&mut self, x: X, y: Y) -> bool;

    /// Removes the pair `(x, y)` if present. Returns whether anything was removed.
    fn delete(&mut self, x: &X, y: &Y) -> bool;

    /// Removes every pair with first element `x`, returning how many were removed.
    fn delete_via_x(&mut self, x: &X) -> usize;

    /// Removes every pair with second element `y`, returning how many were removed.
    fn delete_via_y(&mut self, y: &Y) -> usize;

    /// Prints every pair to stdout, one `x - y` per line.
    fn print(&self)
    where
        X: fmt::Display,
        Y: fmt::Display;
}

impl<X, Y> Relation<X, Y> for RelationTree<X, Y>
where
    X: Ord,
    Y: Ord,
{
    fn contains(&self, x: &X, y: &Y) -> bool {
        RelationTree::contains(self, x, y)
    }

    fn determine_via_x(&self, x: &X) -> Vec<&Y> {
        RelationTree::determine_via_x(self, x)
    }

    fn determine_via_y(&self, y: &Y) -> Vec<&X> {
        RelationTree::determine_via_y(self, y)
    }

    fn empty(&mut self) {
        RelationTree::empty(self)
    }

    fn insert(&mut self, x: X, y: Y) -> bool {
        RelationTree::insert(self, x, y)
    }

    fn delete(&mut self, x: &X, y: &Y) -> bool {
        RelationTree::delete(self, x, y)
    }

    fn delete_via_x(&mut self, x: &X) -> usize {
        RelationTree::delete_via_x(self, x)
    }

    fn delete_via_y(&mut self, y: &Y) -> usize {
        RelationTree::delete_via_y(self, y)
    }

    fn print(&self)
    where
        X: fmt::Display,
        Y: fmt::Display,
    {
        RelationTree::print(self)
    }
}
