use super::ConstructError;

/// Fallible duplication, plus the per-type relocation policy consulted whenever a container has
/// to carry live values into fresh storage.
///
/// This is [`Clone`] with permission to fail. There is no blanket impl over `Clone`, since
/// coherence would then forbid any type from implementing the trait directly; instead the common
/// standard types are covered explicitly below and everything else implements it by hand,
/// trivially for types whose duplication cannot fail.
///
/// # Examples
/// ```
/// # use dyn_array::construct::{ConstructError, TryClone};
/// struct Licensed {
///     seats: u32,
/// }
///
/// impl TryClone for Licensed {
///     fn try_clone(&self) -> Result<Self, ConstructError> {
///         match self.seats.checked_sub(1) {
///             Some(seats) => Ok(Licensed { seats }),
///             None => Err(ConstructError::new("no seats left")),
///         }
///     }
/// }
/// ```
pub trait TryClone: Sized {
    /// Whether reallocation may transfer values of this type with a bitwise move rather than
    /// cloning them into the new block and dropping the originals.
    ///
    /// A move can never fail, so it is the default. A type sets this to `false` when every
    /// duplicate of a value has to be observable, or is allowed to fail; relocation then goes
    /// through [`try_clone`](TryClone::try_clone) element by element and the old storage stays
    /// valid until the whole transfer has succeeded. The constant is resolved once per element
    /// type at monomorphization; there is no per-call decision.
    const MOVE_ON_RELOCATE: bool = true;

    /// Returns a duplicate of the value, or the reason one could not be made.
    fn try_clone(&self) -> Result<Self, ConstructError>;

    /// Copy-assigns `source` onto `self`, reusing `self`'s storage where the implementation can.
    ///
    /// On failure `self` must be left holding a valid value, though not necessarily its original
    /// one. The provided implementation only overwrites `self` once a full duplicate exists.
    fn try_clone_from(&mut self, source: &Self) -> Result<(), ConstructError> {
        *self = source.try_clone()?;
        Ok(())
    }
}

macro_rules! infallible_try_clone {
    ($($type:ty),* $(,)?) => {$(
        impl TryClone for $type {
            fn try_clone(&self) -> Result<Self, ConstructError> {
                Ok(self.clone())
            }

            fn try_clone_from(&mut self, source: &Self) -> Result<(), ConstructError> {
                self.clone_from(source);
                Ok(())
            }
        }
    )*};
}

infallible_try_clone! {
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    String,
}

impl<T: ?Sized> TryClone for &T {
    fn try_clone(&self) -> Result<Self, ConstructError> {
        Ok(*self)
    }
}

impl<T: TryClone> TryClone for Option<T> {
    // An Option relocates however its payload does.
    const MOVE_ON_RELOCATE: bool = T::MOVE_ON_RELOCATE;

    fn try_clone(&self) -> Result<Self, ConstructError> {
        match self {
            Some(value) => Ok(Some(value.try_clone()?)),
            None => Ok(None),
        }
    }
}

impl<T: TryClone> TryClone for Box<T> {
    fn try_clone(&self) -> Result<Self, ConstructError> {
        Ok(Box::new(self.as_ref().try_clone()?))
    }
}
