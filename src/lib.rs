// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-stack-vec`
//!
//! A `no_std`, fixed-capacity, stack-based vector for **any** element type,
//! including types that own resources.
//!
//! The core type, [`FixedStackVec<T, N>`], stores up to `N` elements inline
//! in a buffer it owns and tracks a logical length `len ∈ 0..=N`. It never
//! allocates and never grows. Slots below `len` each hold exactly one live
//! value; slots at and beyond `len` hold none, so destructors run exactly
//! once per element no matter how elements enter or leave the vector.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment.
//! - You know capacities at compile time.
//! - You want predictable, allocation-free behavior and can work with a
//!   fixed maximum length.
//! - Your elements have destructors (boxes, handles, guards) and you still
//!   want them inline in a fixed-size buffer.
//!
//! It may not be the best fit if:
//!
//! - You need very large capacities or large element types (moving the
//!   vector moves the whole buffer).
//! - You need dynamic growth; prefer `Vec` there.
//!
//! ## High-level semantics
//!
//! - Capacity is fixed at compile time (`FixedStackVec::<T, N>::CAPACITY == N`).
//! - Length is a logical prefix: only indices `< len` hold live values.
//! - No heap allocations are performed.
//! - Operations that may exceed capacity come in two flavors:
//!   - **Fallible**: return [`Error::Full`] on overflow (or hand the
//!     rejected value or source back) and leave the vector unchanged (e.g.
//!     [`FixedStackVec::push`], [`FixedStackVec::insert`],
//!     [`FixedStackVec::extend_from_slice`], [`FixedStackVec::resize`],
//!     [`FixedStackVec::assign`], [`TryFrom<&[T]>`](TryFrom),
//!     [`FixedStackVec::try_from_iter`],
//!     [`FixedStackVec::try_extend_from_iter`],
//!     [`FixedStackVec::try_to_capacity`],
//!     [`FixedStackVec::try_into_capacity`]).
//!   - **Truncating**: silently ignore extra elements (e.g.
//!     [`FixedStackVec::push_truncated`],
//!     [`FixedStackVec::extend_from_slice_truncated`],
//!     [`FixedStackVec::from_slice_truncated`],
//!     [`FromIterator<T>`](core::iter::FromIterator), and
//!     [`Extend<T>`](core::iter::Extend)).
//!
//! ## Range and indexing behavior
//!
//! `FixedStackVec` intentionally follows Rust slice and `Vec` semantics for
//! all **indexing** and **range-based** operations:
//!
//! - Indexing (`v[i]`, `v[start..end]`, …) **panics** on out-of-bounds or
//!   inverted ranges, exactly like built-in slices.
//! - [`FixedStackVec::drain`] behaves like `Vec::drain`: invalid ranges
//!   panic, `start == end` is an empty iterator, valid ranges remove the
//!   elements and shift the tail left.
//!
//! Only **range/index errors** panic. Capacity-related failures never
//! panic: they return [`Error::Full`] or silently truncate (depending on
//! the method, see above).
//!
//! ## Iteration
//!
//! Forward iteration borrows the live prefix as a slice
//! ([`FixedStackVec::iter`], [`FixedStackVec::iter_mut`]); by-value
//! iteration moves elements out ([`IntoIterator`], dropping whatever is not
//! consumed). Reverse iteration has dedicated cursors, [`RevIter`] and
//! [`RevIterMut`], which walk the elements back to front and additionally
//! support address-based comparison, indexed offset, and distance between
//! two cursors; see the [`rev`](crate::rev) module docs.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `FixedStackVec<T, N>`.
//!   - Serializes as a plain sequence; deserialization rejects sequences
//!     longer than `N`.
//!
//! ## Example
//!
//! ```rust
//! use fixed_stack_vec::FixedStackVec;
//!
//! let mut v: FixedStackVec<String, 4> = FixedStackVec::new();
//! v.push("a".to_string()).unwrap();
//! v.push("b".to_string()).unwrap();
//! v.insert(1, "between".to_string()).unwrap();
//! assert_eq!(v.len(), 3);
//!
//! let reversed: Vec<&str> = v.rev_iter().map(|s| s.as_str()).collect();
//! assert_eq!(reversed, ["b", "between", "a"]);
//! ```
//!
//! See [`FixedStackVec`] for detailed behavior, including indexing
//! semantics, iterator behavior, and complexity notes.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
pub mod rev;
#[cfg(feature = "serde")]
mod serde;
mod storage;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use rev::{RevIter, RevIterMut};
pub use vec::FixedStackVec;
