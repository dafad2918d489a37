use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::{Ordering, max};
use core::mem;

use super::size::CachedSize;

/// An owned, optional child subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A binary search tree node, and by extension the subtree rooted at it.
///
/// A node without a value is only ever observed as the root of an empty tree: every child that
/// loses its last value is pruned from its parent before the mutating call returns.
#[derive(Clone)]
pub(crate) struct Node<T> {
    value: Option<T>,
    left: Link<T>,
    right: Link<T>,
    // Occupied nodes in this subtree; stale after any mutation below this node.
    size: CachedSize,
}

impl<T> Node<T> {
    /// Creates a new unoccupied node.
    pub(crate) const fn new() -> Self {
        Self {
            value: None,
            left: None,
            right: None,
            size: CachedSize::stale(),
        }
    }

    #[inline]
    pub(crate) fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Returns true if this node holds a value.
    #[inline]
    pub(crate) const fn is_occupied(&self) -> bool {
        self.value.is_some()
    }

    /// Returns true if this node holds no value and has no children.
    #[inline]
    pub(crate) const fn is_vacant(&self) -> bool {
        self.value.is_none() && self.left.is_none() && self.right.is_none()
    }

    /// Returns the number of values in this subtree, refreshing stale caches on the way.
    pub(crate) fn len(&self) -> usize {
        if self.value.is_none() {
            return 0;
        }
        if let Some(len) = self.size.get() {
            return len;
        }
        let len = 1 + self.left().map_or(0, Node::len) + self.right().map_or(0, Node::len);
        self.size.set(len);
        len
    }

    /// Returns the number of levels in this subtree.
    pub(crate) fn height(&self) -> usize {
        if self.value.is_none() {
            return 0;
        }
        1 + max(self.left().map_or(0, Node::height), self.right().map_or(0, Node::height))
    }

    pub(crate) fn first(&self) -> Option<&T> {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node.value()
    }

    pub(crate) fn last(&self) -> Option<&T> {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node.value()
    }

    /// Removes and returns the smallest value in this subtree.
    pub(crate) fn pop_first(&mut self) -> Option<T> {
        if self.left.is_none() {
            return self.remove_here();
        }
        let popped = Self::prune_after(&mut self.left, Node::pop_first);
        if popped.is_some() {
            self.size.invalidate();
        }
        popped
    }

    /// Removes and returns the largest value in this subtree.
    pub(crate) fn pop_last(&mut self) -> Option<T> {
        if self.right.is_none() {
            return self.remove_here();
        }
        let popped = Self::prune_after(&mut self.right, Node::pop_last);
        if popped.is_some() {
            self.size.invalidate();
        }
        popped
    }

    /// Moves every value of this subtree into `out`, in ascending order.
    pub(crate) fn into_sorted(self, out: &mut Vec<T>) {
        let Node {
            value,
            left,
            right,
            ..
        } = self;
        if let Some(left) = left {
            (*left).into_sorted(out);
        }
        out.extend(value);
        if let Some(right) = right {
            (*right).into_sorted(out);
        }
    }

    /// Removes this node's own value and repairs the subtree around the hole.
    ///
    /// A lone child replaces the node wholesale. With two children the in-order successor is
    /// popped from the right subtree and takes the value's place.
    fn remove_here(&mut self) -> Option<T> {
        let removed = match (self.left.take(), self.right.take()) {
            (None, None) => self.value.take(),
            (Some(child), None) | (None, Some(child)) => mem::replace(self, *child).value,
            (Some(left), Some(mut right)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("remove: promoting in-order successor");

                let successor = right.pop_first();
                debug_assert!(successor.is_some(), "occupied right subtree has no minimum");
                self.left = Some(left);
                if !right.is_vacant() {
                    self.right = Some(right);
                }
                mem::replace(&mut self.value, successor)
            }
        };
        self.size.invalidate();
        removed
    }

    /// Runs `f` on the child behind `link`, then drops the child if `f` left it vacant.
    fn prune_after<R>(link: &mut Link<T>, f: impl FnOnce(&mut Node<T>) -> Option<R>) -> Option<R> {
        let child = link.as_deref_mut()?;
        let result = f(child);
        if child.is_vacant() {
            *link = None;
        }
        result
    }
}

impl<T: Ord> Node<T> {
    /// Inserts `value`, returning false if an equal value is already present.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        let Some(current) = self.value.as_ref() else {
            self.value = Some(value);
            self.size.invalidate();
            return true;
        };
        let link = match value.cmp(current) {
            Ordering::Equal => return false,
            Ordering::Less => &mut self.left,
            Ordering::Greater => &mut self.right,
        };
        let inserted = link.get_or_insert_with(|| Box::new(Node::new())).insert(value);
        if inserted {
            self.size.invalidate();
        }
        inserted
    }

    /// Removes and returns the value equal to `value`, if present.
    pub(crate) fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let ordering = value.cmp(self.value.as_ref()?.borrow());
        let removed = match ordering {
            Ordering::Equal => return self.remove_here(),
            Ordering::Less => Self::prune_after(&mut self.left, |left| left.remove(value)),
            Ordering::Greater => Self::prune_after(&mut self.right, |right| right.remove(value)),
        };
        if removed.is_some() {
            self.size.invalidate();
        }
        removed
    }

    /// Returns the stored value equal to `value`, if present.
    pub(crate) fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut node = self;
        loop {
            let current = node.value.as_ref()?;
            let next = match value.cmp(current.borrow()) {
                Ordering::Equal => return Some(current),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
            node = next?;
        }
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new()
    }
}
