use std::cmp::Ordering;

/// An owned, possibly empty, subtree. Every `Node` is owned by exactly one `Link`: either the
/// tree's root or one of its parent's children.
pub(crate) type Link<X, Y> = Option<Box<Node<X, Y>>>;

/// One stored pair and its two children.
///
/// `Node` deliberately has no `Drop` impl so that a detached node can be destructured. Tearing
/// down whole subtrees is left to [`RelationTree`](crate::RelationTree), which does it without
/// recursion.
pub(crate) struct Node<X, Y> {
    pub(crate) x: X,
    pub(crate) y: Y,
    pub(crate) left: Link<X, Y>,
    pub(crate) right: Link<X, Y>,
}

impl<X, Y> Node<X, Y> {
    pub(crate) fn new_boxed(x: X, y: Y) -> Box<Self> {
        Box::new(Node {
            x,
            y,
            left: None,
            right: None,
        })
    }

    /// Compares the given pair against this node's pair, `x` first and `y` on ties.
    pub(crate) fn cmp_pair(&self, x: &X, y: &Y) -> Ordering
    where
        X: Ord,
        Y: Ord,
    {
        x.cmp(&self.x).then_with(|| y.cmp(&self.y))
    }

    /// The child slot to descend into for a key that compared as `ordering` against this node.
    pub(crate) fn child_mut(&mut self, ordering: Ordering) -> &mut Link<X, Y> {
        match ordering {
            Ordering::Less => &mut self.left,
            Ordering::Equal | Ordering::Greater => &mut self.right,
        }
    }

    /// Removes this node from its position and returns whatever should take its place in the
    /// parent's slot.
    ///
    /// With fewer than two children the remaining child (if any) moves up. With two children
    /// this node stays where it is and takes over the pair of its in-order successor, which is
    /// unhooked from the right subtree instead.
    pub(crate) fn delete_topmost(mut self: Box<Self>) -> Link<X, Y> {
        if self.left.is_none() {
            return self.right.take();
        }
        if self.right.is_none() {
            return self.left.take();
        }

        if let Some(successor) = take_leftmost(&mut self.right) {
            let Node { x, y, .. } = *successor;
            self.x = x;
            self.y = y;
        }

        Some(self)
    }

    /// Checks this node against its direct children. Only used in debug builds, after a splice
    /// has put a different pair (or a different child) in place.
    fn is_locally_ordered(&self) -> bool
    where
        X: Ord,
        Y: Ord,
    {
        let left_ok = self
            .left
            .as_deref()
            .map_or(true, |l| self.cmp_pair(&l.x, &l.y) == Ordering::Less);
        let right_ok = self
            .right
            .as_deref()
            .map_or(true, |r| self.cmp_pair(&r.x, &r.y) == Ordering::Greater);

        left_ok && right_ok
    }
}

/// Detaches the leftmost node of the subtree in `slot`. The detached node never has a left
/// child, so its right child (if any) takes over the vacated slot.
///
/// Returns `None` only when `slot` is empty.
pub(crate) fn take_leftmost<X, Y>(slot: &mut Link<X, Y>) -> Option<Box<Node<X, Y>>> {
    let mut slot = slot;
    while slot.as_ref().map_or(false, |n| n.left.is_some()) {
        slot = match slot {
            Some(node) => &mut node.left,
            None => return None,
        };
    }

    let mut leftmost = slot.take()?;
    *slot = leftmost.right.take();
    Some(leftmost)
}

/// Deletes the node occupying `slot`, putting its replacement in the same slot. Returns whether
/// there was anything to delete.
pub(crate) fn splice<X, Y>(slot: &mut Link<X, Y>) -> bool
where
    X: Ord,
    Y: Ord,
{
    let Some(node) = slot.take() else {
        return false;
    };
    *slot = node.delete_topmost();

    if cfg!(debug_assertions) {
        if let Some(replacement) = slot.as_deref() {
            assert!(replacement.is_locally_ordered());
        }
    }

    true
}
