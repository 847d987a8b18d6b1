// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedStackVec};

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Shrinks to `new_len` if `new_len < len`, dropping the cut-off
    /// elements immediately; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let old = self.len;
        // Shrink first so a panicking destructor cannot leave dead slots
        // inside the live prefix.
        self.len = new_len;
        // SAFETY: slots `[new_len, old)` held live elements and are dropped
        // exactly once.
        unsafe {
            self.buf.drop_range(new_len, old);
        }
    }

    /// Resizes to `new_len`, filling with clones of `value` when growing.
    ///
    /// Shrinking drops the cut-off elements immediately. Returns
    /// [`Error::Full`] (and changes nothing) if `new_len > N`.
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len > N {
            return Err(Error::Full);
        }
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        while self.len < new_len {
            // Cannot fail: `new_len <= N` was checked above.
            self.push(value.clone())?;
        }
        Ok(())
    }

    /// Resizes to `new_len`, filling new slots with `T::default()` when
    /// growing.
    ///
    /// Shrinking drops the cut-off elements immediately. Returns
    /// [`Error::Full`] (and changes nothing) if `new_len > N`.
    #[inline]
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        if new_len > N {
            return Err(Error::Full);
        }
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        while self.len < new_len {
            // Cannot fail: `new_len <= N` was checked above.
            self.push(T::default())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::FixedStackVec;
    use core::cell::Cell;

    struct Counted<'a>(&'a Cell<usize>);
    impl Drop for Counted<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_truncate_and_resize() {
        let mut v: FixedStackVec<i32, 5> = FixedStackVec::new();
        v.extend_from_slice(&[1, 2, 3, 4]).unwrap();
        v.truncate(2);
        assert_eq!(v.as_slice(), &[1, 2]);
        v.resize(5, 9).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 9, 9, 9]);
        v.resize(3, 0).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 9]);
        let mut w: FixedStackVec<i32, 3> = FixedStackVec::new();
        assert_eq!(w.resize(4, 7), Err(crate::Error::Full));
    }

    #[test]
    fn test_truncate_past_len_is_noop() {
        let mut v: FixedStackVec<i32, 4> = FixedStackVec::try_from(&[1, 2][..]).unwrap();
        v.truncate(4);
        assert_eq!(v.as_slice(), &[1, 2]);
        v.truncate(2);
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_resize_default_grows_with_defaults() {
        let mut v: FixedStackVec<i32, 5> = FixedStackVec::try_from(&[7, 8][..]).unwrap();
        v.resize_default(4).unwrap();
        assert_eq!(v.as_slice(), &[7, 8, 0, 0]);
        v.resize_default(1).unwrap();
        assert_eq!(v.as_slice(), &[7]);
        assert_eq!(v.resize_default(6), Err(crate::Error::Full));
        assert_eq!(v.as_slice(), &[7]);
    }

    #[test]
    fn test_shrink_drops_cut_off_elements_immediately() {
        let counter = Cell::new(0);
        let mut v: FixedStackVec<Counted<'_>, 5> = FixedStackVec::new();
        for _ in 0..4 {
            v.push(Counted(&counter)).unwrap();
        }

        v.truncate(1);
        assert_eq!(counter.get(), 3, "shrinking must not defer destruction");
        assert_eq!(v.len(), 1);

        drop(v);
        assert_eq!(counter.get(), 4);
    }

    #[test]
    fn test_resize_err_is_noop() {
        let mut v: FixedStackVec<i32, 2> = FixedStackVec::try_from(&[1][..]).unwrap();
        assert_eq!(v.resize(3, 9), Err(crate::Error::Full));
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn test_resize_to_same_len_is_noop() {
        let mut v: FixedStackVec<i32, 3> = FixedStackVec::try_from(&[1, 2, 3][..]).unwrap();
        assert!(v.is_full());
        v.resize(3, 9).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }
}
