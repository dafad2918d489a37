use alloc::vec::Vec;
use core::mem;

use super::BSTree;

impl<T: Ord + Clone> BSTree<T> {
    /// Returns a copy of the tree rebuilt to the minimum possible height.
    ///
    /// The values are read out in ascending order, then the middle value of each run is inserted
    /// before the runs on either side of it. A tree of `n` values comes back with a height of
    /// `ceil(log2(n + 1))`. The original tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let chain: BSTree<_> = (0..7).collect();
    /// assert_eq!(chain.height(), 7);
    ///
    /// let balanced = chain.balance();
    /// assert_eq!(balanced.height(), 3);
    /// assert_eq!(balanced, chain);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n) time, O(n) extra space.
    #[must_use]
    pub fn balance(&self) -> Self {
        let mut sorted: Vec<Option<T>> = self.iter().cloned().map(Some).collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(len = sorted.len(), "balance: rebuilding from sorted values");

        let mut balanced = BSTree::new();
        balanced.insert_midpoints(&mut sorted);
        balanced
    }
}

impl<T: Ord> BSTree<T> {
    /// Rebuilds the tree in place to the minimum possible height.
    ///
    /// Same result as [`balance`](BSTree::balance) without requiring `T: Clone`: the values are
    /// moved out of the old tree and into the new one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree: BSTree<_> = (0..100).map(|i| i.to_string()).collect();
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 7);
    /// assert_eq!(tree.len(), 100);
    /// ```
    pub fn rebalance(&mut self) {
        let mut sorted: Vec<Option<T>> = mem::take(self).into_vec().into_iter().map(Some).collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(len = sorted.len(), "rebalance: rebuilding in place");

        self.insert_midpoints(&mut sorted);
    }

    /// Inserts the middle of `sorted`, then the middles of the runs below and above it.
    fn insert_midpoints(&mut self, sorted: &mut [Option<T>]) {
        let (lower, upper) = sorted.split_at_mut(sorted.len() / 2);
        let Some((middle, higher)) = upper.split_first_mut() else {
            return;
        };
        if let Some(value) = middle.take() {
            self.insert(value);
        }
        self.insert_midpoints(lower);
        self.insert_midpoints(higher);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    /// Minimum height of a binary tree holding `n` values: `ceil(log2(n + 1))`.
    fn min_height(n: usize) -> usize {
        (usize::BITS - n.leading_zeros()) as usize
    }

    #[test]
    fn balances_every_small_size() {
        for n in 0..=64 {
            let chain: BSTree<usize> = (0..n).collect();
            let balanced = chain.balance();
            assert_eq!(balanced.height(), min_height(n), "n = {n}");
            assert_eq!(balanced.len(), n);
            assert_eq!(balanced.to_vec(), chain.to_vec());
        }
    }

    #[test]
    fn balance_leaves_original_untouched() {
        let chain: BSTree<i32> = (0..10).rev().collect();
        let balanced = chain.balance();
        assert_eq!(chain.height(), 10);
        assert_eq!(balanced.height(), 4);
        assert_eq!(chain, balanced);
    }

    #[test]
    fn balanced_root_is_the_midpoint() {
        let balanced = BSTree::from([1, 2, 3, 4, 5, 6]).balance();
        assert_eq!(balanced.root.value(), Some(&4));
    }

    #[test]
    fn balance_empty_tree() {
        let empty: BSTree<i32> = BSTree::new();
        let balanced = empty.balance();
        assert!(balanced.is_empty());
        assert_eq!(balanced.height(), 0);
    }

    #[test]
    fn rebalance_in_place_without_clone() {
        struct Token(u32);
        impl PartialEq for Token {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Token {}
        impl PartialOrd for Token {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Token {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut tree: BSTree<Token> = (0..31).map(Token).collect();
        assert_eq!(tree.height(), 31);
        tree.rebalance();
        assert_eq!(tree.height(), 5);
        assert_eq!(tree.len(), 31);
        assert!(tree.iter().map(|token| token.0).eq(0..31));
    }

    #[test]
    fn rebalanced_tree_stays_mutable() {
        let mut tree: BSTree<String> = ["d", "a", "c", "b", "e"].iter().map(ToString::to_string).collect();
        tree.rebalance();
        assert!(tree.remove("c"));
        assert!(tree.insert("f".to_string()));
        assert!(!tree.insert("a".to_string()));
        assert_eq!(tree.to_vec(), ["a", "b", "d", "e", "f"]);
    }
}
