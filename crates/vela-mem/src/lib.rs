//! Growable contiguous array with checked, allocator-aware growth.
//!
//! [`GrowVec`] owns one buffer obtained from an [`Allocator`]. Every
//! operation that may grow the buffer returns [`AllocationError`] instead of
//! aborting, and leaves the vector untouched when it fails. Index misuse is
//! reported as [`BoundsError`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod capacity_policy;
pub mod vec_types;

mod errors;
mod allocator;
mod global_alloc;

pub use errors::{AllocationError, BoundsError};
pub use allocator::Allocator;
pub use global_alloc::{GlobalAlloc, GLOBAL_ALLOC};
pub use capacity_policy::CapacityPolicy;
pub use vec_types::{GrowVec, GlobalVec, Cursor};
