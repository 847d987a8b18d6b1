// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedStackVec};

// Core imports
use core::mem::ManuallyDrop;
use core::ptr;

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Clones the contents into a vector of a different capacity `M`.
    ///
    /// The current **length** is checked against `M` at runtime; whether
    /// `M` is larger or smaller than `N` proves nothing about whether the
    /// elements fit. Returns [`Error::Full`] when `len > M`, leaving `self`
    /// untouched.
    #[inline]
    pub fn try_to_capacity<const M: usize>(&self) -> Result<FixedStackVec<T, M>, Error>
    where
        T: Clone,
    {
        FixedStackVec::try_from(self.as_slice())
    }

    /// Moves the contents into a vector of a different capacity `M`.
    ///
    /// The current **length** is checked against `M` at runtime, regardless
    /// of how `N` and `M` relate. On overflow the untouched source is
    /// handed back in `Err`, so a failed conversion loses nothing.
    #[inline]
    pub fn try_into_capacity<const M: usize>(self) -> Result<FixedStackVec<T, M>, Self> {
        if self.len > M {
            return Err(self);
        }

        let this = ManuallyDrop::new(self);
        let mut out: FixedStackVec<T, M> = FixedStackVec::new();
        // SAFETY: `this.len <= M`, the buffers are distinct, and `this` is
        // never dropped, so each live element moves exactly once.
        unsafe {
            ptr::copy_nonoverlapping(this.buf.as_ptr(), out.buf.as_mut_ptr(), this.len);
        }
        out.len = this.len;
        Ok(out)
    }
}
