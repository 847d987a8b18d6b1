// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedStackVec};

// Core imports
use core::mem::ManuallyDrop;
use core::ptr;

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Converts to `[T; N]` when **full** (`len == N`), otherwise returns
    /// [`Error::InvalidLen`] (and drops the vector's contents as usual).
    #[inline]
    pub fn try_into_array(self) -> Result<[T; N], Error> {
        if self.len != N {
            return Err(Error::InvalidLen);
        }

        let this = ManuallyDrop::new(self);
        // SAFETY: `len == N`, so every slot is live; `this` is never
        // dropped, so each element is moved out exactly once.
        Ok(unsafe { ptr::read(this.buf.as_ptr() as *const [T; N]) })
    }
}
