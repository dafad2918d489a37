use core::cell::Cell;
use core::num::NonZero;

/// Memoized number of occupied nodes in a subtree.
///
/// A count of zero doubles as the "stale" marker, so an empty subtree and an invalidated one
/// look the same. Both recompute to the right answer; an empty subtree just never stays cached.
#[derive(Clone, Debug, Default)]
#[repr(transparent)]
pub(crate) struct CachedSize(Cell<Option<NonZero<usize>>>);

impl CachedSize {
    /// Creates a cache in the stale state.
    #[inline]
    pub(crate) const fn stale() -> Self {
        Self(Cell::new(None))
    }

    /// Returns the cached count, or `None` if it must be recomputed.
    #[inline]
    pub(crate) fn get(&self) -> Option<usize> {
        self.0.get().map(NonZero::get)
    }

    /// Stores a freshly computed count. Storing zero leaves the cache stale.
    #[inline]
    pub(crate) fn set(&self, size: usize) {
        self.0.set(NonZero::new(size));
    }

    #[inline]
    pub(crate) fn invalidate(&self) {
        self.0.set(None);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // The stale marker lives in the `NonZero` niche.
    assert_eq_size!(CachedSize, usize);

    #[test]
    fn starts_stale() {
        assert_eq!(CachedSize::stale().get(), None);
        assert_eq!(CachedSize::default().get(), None);
    }

    #[test]
    fn zero_is_indistinguishable_from_stale() {
        let size = CachedSize::stale();
        size.set(0);
        assert_eq!(size.get(), None);
    }

    proptest! {
        #[test]
        fn set_then_invalidate(size in 1..=usize::MAX) {
            let cache = CachedSize::stale();
            cache.set(size);
            prop_assert_eq!(cache.get(), Some(size));
            cache.invalidate();
            prop_assert_eq!(cache.get(), None);
        }
    }
}
