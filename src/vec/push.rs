// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedStackVec};

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Pushes `v` if not full; returns [`Error::Full`] otherwise.
    ///
    /// The value is constructed directly in the first vacant slot.
    #[inline]
    pub fn push(&mut self, v: T) -> Result<(), Error> {
        if self.len == N {
            return Err(Error::Full);
        }

        // SAFETY: `len < N` and the slot at `len` is vacant by invariant.
        unsafe {
            self.buf.write(self.len, v);
        }

        self.len += 1;
        Ok(())
    }

    /// Pushes `v` if not full; if at capacity, drops `v` and returns `false`.
    #[inline]
    #[must_use]
    pub fn push_truncated(&mut self, v: T) -> bool {
        if self.len == N {
            return false;
        }
        // SAFETY: `len < N` and the slot at `len` is vacant by invariant.
        unsafe {
            self.buf.write(self.len, v);
        }
        self.len += 1;
        true
    }
}
