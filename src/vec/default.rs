// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedStackVec;

impl<T, const N: usize> Default for FixedStackVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
