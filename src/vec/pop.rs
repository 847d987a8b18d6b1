// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedStackVec;

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// Ownership of the value moves to the caller; the slot becomes vacant.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: before the decrement `len` was the live count, so the
            // slot at the new `len` is live and is read out exactly once.
            let out = unsafe { self.buf.read(self.len) };
            Some(out)
        }
    }
}
