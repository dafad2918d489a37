use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::raw::Node;

mod balance;

/// An ordered set based on an unbalanced binary search tree that is rebalanced on request.
///
/// Values are kept in ascending order and stored at most once. Insertion and removal never
/// restructure the tree beyond what is needed to keep it ordered, so the shape depends on the
/// insertion order: inserting values in sorted order degrades the tree into a chain. Call
/// [`balance`] or [`rebalance`] to rebuild the tree to the minimum possible height.
///
/// The number of values is memoized per subtree. A mutation only discards the memoized counts
/// on the path from the changed node to the root, and [`len`] recomputes just those.
///
/// It is a logic error for a value to be modified in such a way that its ordering relative to
/// any other value, as determined by the [`Ord`] trait, changes while it is in the tree. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
///
/// Operations recurse once per level of the tree. Extremely deep trees, such as a long run of
/// sorted insertions that was never rebalanced, can exhaust the stack.
///
/// [`balance`]: BSTree::balance
/// [`rebalance`]: BSTree::rebalance
/// [`len`]: BSTree::len
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use bstree::BSTree;
///
/// let mut tree = BSTree::new();
/// tree.insert(5);
/// tree.insert(6);
/// tree.insert(8);
/// tree.insert(2);
///
/// assert_eq!(tree.len(), 4);
/// assert!(tree.contains(&6));
/// assert_eq!(tree.to_vec(), [2, 5, 6, 8]);
///
/// tree.remove(&2);
/// assert_eq!(format!("{tree:?}"), "[5, 6, 8]");
/// ```
pub struct BSTree<T> {
    root: Node<T>,
}

/// An iterator over the values of a `BSTree` in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`BSTree`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use bstree::BSTree;
///
/// let tree = BSTree::from([3, 1, 2]);
/// let mut iter = tree.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: BSTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    cursor: Cursor<'a, T>,
    remaining: usize,
}

/// An owning iterator over the values of a `BSTree` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`BSTree`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: BSTree#method.into_iter
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> BSTree<T> {
    /// Makes a new, empty `BSTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree: BSTree<i32> = BSTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        BSTree {
            root: Node::new(),
        }
    }

    /// Returns the number of values in the tree.
    ///
    /// Counts that were discarded by a mutation are recomputed and memoized, so repeated calls
    /// without intervening mutations are O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns `true` if the tree contains no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.root.is_occupied()
    }

    /// Returns the number of levels in the tree, `0` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let tree = BSTree::from([1, 2, 3, 4]);
    /// assert_eq!(tree.height(), 4);
    /// assert_eq!(tree.balance().height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Clears the tree, removing all values.
    pub fn clear(&mut self) {
        self.root = Node::new();
    }

    /// Returns a reference to the smallest value in the tree, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let tree = BSTree::from([2, 1, 3]);
    /// assert_eq!(tree.first(), Some(&1));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.root.first()
    }

    /// Returns a reference to the largest value in the tree, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.root.last()
    }

    /// Removes and returns the smallest value in the tree, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree = BSTree::from([2, 1]);
    /// assert_eq!(tree.pop_first(), Some(1));
    /// assert_eq!(tree.pop_first(), Some(2));
    /// assert_eq!(tree.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<T> {
        self.root.pop_first()
    }

    /// Removes and returns the largest value in the tree, if any.
    pub fn pop_last(&mut self) -> Option<T> {
        self.root.pop_last()
    }

    /// Returns a [`Cursor`] positioned at the smallest value.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.root)
    }

    /// Gets an iterator that visits the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let tree = BSTree::from([3, 1, 2]);
    /// let values: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.cursor(),
            remaining: self.len(),
        }
    }

    /// Copies the values into a `Vec` in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Moves the values into a `Vec` in ascending order.
    fn into_vec(self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        self.root.into_sorted(&mut values);
        values
    }
}

impl<T: Ord> BSTree<T> {
    /// Adds a value to the tree.
    ///
    /// Returns whether the value was newly inserted. If an equal value is already present the
    /// tree is left unchanged and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.root.insert(value)
    }

    /// Removes a value from the tree. Returns whether the value was present.
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering on the
    /// borrowed form *must* match the ordering on the value type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree = BSTree::from([5, 6, 8, 2]);
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.to_vec(), [5, 6, 8]);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.root.remove(value).is_some()
    }

    /// Removes and returns the value in the tree equal to the given one, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree = BSTree::from([1, 2, 3]);
    /// assert_eq!(tree.take(&2), Some(2));
    /// assert_eq!(tree.take(&2), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.root.remove(value)
    }

    /// Returns `true` if the tree contains a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let tree = BSTree::from([1, 2, 3]);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&4));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.root.get(value).is_some()
    }

    /// Returns a reference to the stored value equal to `value`, if any.
    ///
    /// Useful when the stored type carries more than its ordering key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let tree = BSTree::from([(1, "one"), (2, "two")]);
    /// assert_eq!(tree.find(&(2, "two")), Some(&(2, "two")));
    /// assert_eq!(tree.find(&(3, "three")), None);
    /// ```
    pub fn find<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.root.get(value)
    }
}

impl<T: Clone> Clone for BSTree<T> {
    fn clone(&self) -> Self {
        BSTree {
            root: self.root.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for BSTree<T> {
    fn eq(&self, other: &BSTree<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BSTree<T> {}

impl<T: fmt::Debug> fmt::Debug for BSTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Writes the values in ascending order as `[a, b, c]`.
impl<T: fmt::Display> fmt::Display for BSTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

impl<T> Default for BSTree<T> {
    fn default() -> Self {
        BSTree::new()
    }
}

impl<T: Ord> FromIterator<T> for BSTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BSTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BSTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for BSTree<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// Inserts the array's values in array order.
///
/// ```
/// use bstree::BSTree;
///
/// let tree1 = BSTree::from([1, 2, 3, 4]);
/// let tree2: BSTree<_> = [1, 2, 3, 4].into();
/// assert_eq!(tree1, tree2);
/// ```
impl<T: Ord, const N: usize> From<[T; N]> for BSTree<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for BSTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `BSTree`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let tree = BSTree::from([3, 1, 2, 4]);
    /// let v: Vec<_> = tree.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a BSTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.cursor.get()?;
        self.cursor.advance();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("cursor", &self.cursor).field("remaining", &self.remaining).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}
