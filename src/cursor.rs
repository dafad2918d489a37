//! Explicit in-order cursors over a [`BSTree`](crate::BSTree).

use alloc::boxed::Box;
use core::fmt;
use core::mem;

use crate::raw::Node;

/// A forward-only cursor over the values of a [`BSTree`](crate::BSTree) in ascending order.
///
/// This `struct` is created by the [`cursor`] method on [`BSTree`]. Unlike [`Iter`], a cursor
/// separates reading the current value from moving past it: [`has_value`] reports whether the
/// cursor still points at a value, [`value`] reads it and [`advance`] moves to the next one.
///
/// A cursor is single-pass. Once it has moved past the last value it stays there; build a new
/// cursor to walk the tree again. It borrows the tree for its whole lifetime, so the tree cannot
/// be mutated while a cursor is alive.
///
/// # Examples
///
/// ```
/// use bstree::BSTree;
///
/// let tree = BSTree::from([5, 6, 8, 2]);
/// let mut cursor = tree.cursor();
/// let mut seen = Vec::new();
/// while cursor.has_value() {
///     seen.push(*cursor.value());
///     cursor.advance();
/// }
/// assert_eq!(seen, [2, 5, 6, 8]);
/// ```
///
/// [`cursor`]: crate::BSTree::cursor
/// [`BSTree`]: crate::BSTree
/// [`Iter`]: crate::bstree::Iter
/// [`has_value`]: Cursor::has_value
/// [`value`]: Cursor::value
/// [`advance`]: Cursor::advance
#[must_use = "cursors are lazy and do nothing unless advanced"]
pub struct Cursor<'a, T> {
    node: &'a Node<T>,
    position: Position<'a, T>,
}

// Where a cursor stands relative to its own node. The child cursors are boxed because each one
// nests the cursors of its own subtree.
enum Position<'a, T> {
    // Delegating to the left subtree.
    Before(Box<Cursor<'a, T>>),
    At,
    // Delegating to the right subtree.
    After(Box<Cursor<'a, T>>),
    Done,
}

impl<'a, T> Cursor<'a, T> {
    /// Creates a cursor positioned at the smallest value under `node`.
    pub(crate) fn new(node: &'a Node<T>) -> Self {
        let position = match node.left().map(Cursor::new) {
            Some(left) if left.has_value() => Position::Before(Box::new(left)),
            _ if node.is_occupied() => Position::At,
            _ => Position::Done,
        };
        Self {
            node,
            position,
        }
    }

    /// Returns true if the cursor points at a value, i.e. [`value`](Cursor::value) will not
    /// panic.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let empty: BSTree<i32> = BSTree::new();
    /// assert!(!empty.cursor().has_value());
    ///
    /// let tree = BSTree::from([1]);
    /// let mut cursor = tree.cursor();
    /// assert!(cursor.has_value());
    /// cursor.advance();
    /// assert!(!cursor.has_value());
    /// ```
    #[must_use]
    pub fn has_value(&self) -> bool {
        !matches!(self.position, Position::Done)
    }

    /// Returns the value under the cursor, or `None` once the cursor is past the end.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        match &self.position {
            Position::Before(child) | Position::After(child) => child.get(),
            Position::At => self.node.value(),
            Position::Done => None,
        }
    }

    /// Returns the value under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor has moved past the last value. Check
    /// [`has_value`](Cursor::has_value) first, or use [`get`](Cursor::get).
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let tree = BSTree::from([3, 1, 2]);
    /// let cursor = tree.cursor();
    /// assert_eq!(cursor.value(), &1);
    /// ```
    #[must_use]
    pub fn value(&self) -> &'a T {
        self.get().expect("`Cursor::value()` - cursor is past the end!")
    }

    /// Moves the cursor to the next value in ascending order. Has no effect once the cursor is
    /// past the end.
    pub fn advance(&mut self) {
        self.position = match mem::replace(&mut self.position, Position::Done) {
            Position::Before(mut left) => {
                left.advance();
                if left.has_value() {
                    Position::Before(left)
                } else {
                    Position::At
                }
            }
            Position::At => match self.node.right().map(Cursor::new) {
                Some(right) if right.has_value() => Position::After(Box::new(right)),
                _ => Position::Done,
            },
            Position::After(mut right) => {
                right.advance();
                if right.has_value() {
                    Position::After(right)
                } else {
                    Position::Done
                }
            }
            Position::Done => Position::Done,
        };
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("value", &self.get()).finish()
    }
}
