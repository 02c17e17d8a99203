//! A growable contiguous sequence container with an explicit failure channel.
//!
//! # Purpose
//! This crate provides [`DynArray`](contiguous::DynArray), an array-like container whose capacity
//! is managed independently of its logical length, built on top of
//! [`RawBlock`](contiguous::RawBlock), an owner of uninitialized slot storage that never runs an
//! element constructor or destructor itself. The split keeps every question about element lifetime
//! in exactly one place, which is what makes the failure-safety contract of the mutating
//! operations tractable.
//!
//! # Error Handling
//! Unlike [`Vec`], nothing here aborts on an unsatisfiable allocation: raw storage requests
//! surface [`AllocError`](contiguous::AllocError) and element construction surfaces
//! [`ConstructError`](construct::ConstructError), combined into
//! [`AllocOrConstruct`](contiguous::AllocOrConstruct) where both can occur. Every multi-step
//! operation either completes or puts the container back exactly as it was, destroying only what
//! it had already built in new storage along the way. Operations documented as never failing
//! contain no fallible step at all.
//!
//! Element capabilities are modelled by the [`construct`] traits rather than by [`Clone`] and
//! [`Default`] directly, so that duplication and default construction are allowed to fail. The
//! common standard types implement them out of the box.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod construct;
pub mod contiguous;

pub(crate) mod util;
