// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{storage::Slots, vec::FixedStackVec};

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Constructs an empty vector. No element is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: Slots::new(),
            len: 0,
        }
    }
}
