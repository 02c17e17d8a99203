//! Fallible element capabilities: [`TryClone`] and [`TryDefault`], with [`ConstructError`] as
//! their shared failure value.
//!
//! The contiguous containers in this crate are polymorphic over what their element type can do:
//! default construction, duplication, or neither. Both capabilities are allowed to fail, which
//! [`Clone`] and [`Default`] cannot express, so the containers bound on these traits instead.
//! Implementations are provided for the common standard types; element types whose construction
//! can actually fail (or whose relocation policy differs from the default) implement them by
//! hand.

mod clone;
mod default;
mod error;
mod tests;

pub use clone::*;
pub use default::*;
pub use error::*;
