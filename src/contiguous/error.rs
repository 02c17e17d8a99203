//! Error types for the contiguous containers.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::construct::ConstructError;

/// A raw storage request that could not be satisfied, either because the global allocator
/// refused it or because `cap` slots of the element type would exceed [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    /// The slot count that was requested.
    pub cap: usize,
}

impl Display for AllocError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to allocate storage for {} elements!", self.cap)
    }
}

impl Error for AllocError {}

/// The failure of any container operation that both allocates and constructs elements.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum AllocOrConstruct {
    /// Raw storage could not be obtained.
    Alloc(AllocError),
    /// An element could not be built.
    Construct(ConstructError),
}
