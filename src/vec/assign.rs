// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedStackVec};

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Replaces the contents with `count` clones of `value`.
    ///
    /// The previous elements are dropped. Returns [`Error::Full`] (and
    /// changes nothing, previous contents included) if `count > N`.
    #[inline]
    pub fn assign(&mut self, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if count > N {
            return Err(Error::Full);
        }
        self.clear();
        while self.len < count {
            // Cannot fail: `count <= N` was checked above.
            self.push(value.clone())?;
        }
        Ok(())
    }

    /// Constructs a vector holding `count` clones of `value`.
    ///
    /// Returns [`Error::Full`] if `count > N`.
    #[inline]
    pub fn try_from_elem(count: usize, value: T) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.assign(count, value)?;
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::FixedStackVec;
    use core::cell::Cell;

    #[test]
    fn test_assign_replaces_contents() {
        let mut v: FixedStackVec<i32, 4> = FixedStackVec::try_from(&[1, 2, 3][..]).unwrap();
        v.assign(2, 9).unwrap();
        assert_eq!(v.as_slice(), &[9, 9]);
    }

    #[test]
    fn test_assign_over_capacity_is_noop() {
        let mut v: FixedStackVec<i32, 3> = FixedStackVec::try_from(&[1, 2][..]).unwrap();
        assert_eq!(v.assign(4, 9), Err(crate::Error::Full));
        assert_eq!(v.as_slice(), &[1, 2], "failed assign must keep the old contents");
    }

    #[test]
    fn test_assign_drops_previous_elements() {
        #[derive(Clone)]
        struct Counted<'a>(&'a Cell<usize>);
        impl Drop for Counted<'_> {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let counter = Cell::new(0);
        let mut v: FixedStackVec<Counted<'_>, 4> = FixedStackVec::new();
        v.push(Counted(&counter)).unwrap();
        v.push(Counted(&counter)).unwrap();

        v.assign(1, Counted(&counter)).unwrap();
        // The two originals plus the `value` prototype itself.
        assert_eq!(counter.get(), 3);
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_try_from_elem() {
        let v = FixedStackVec::<i32, 4>::try_from_elem(3, 7).unwrap();
        assert_eq!(v.as_slice(), &[7, 7, 7]);

        let empty = FixedStackVec::<i32, 4>::try_from_elem(0, 7).unwrap();
        assert!(empty.is_empty());

        assert_eq!(
            FixedStackVec::<i32, 2>::try_from_elem(3, 7).unwrap_err(),
            crate::Error::Full
        );
    }
}
