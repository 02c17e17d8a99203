use super::ConstructError;

/// Fallible default construction: [`Default`] with permission to fail.
///
/// The containers bound on this trait when an operation has to conjure values out of nothing,
/// such as [`DynArray::with_len`](crate::contiguous::DynArray::with_len) and
/// [`DynArray::resize`](crate::contiguous::DynArray::resize). As with
/// [`TryClone`](super::TryClone) there is no blanket impl over [`Default`]; the common standard
/// types are covered explicitly and everything else implements the trait by hand.
pub trait TryDefault: Sized {
    /// Returns the default value for the type, or the reason one could not be made.
    fn try_default() -> Result<Self, ConstructError>;
}

macro_rules! infallible_try_default {
    ($($type:ty),* $(,)?) => {$(
        impl TryDefault for $type {
            fn try_default() -> Result<Self, ConstructError> {
                Ok(<$type>::default())
            }
        }
    )*};
}

infallible_try_default! {
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    String,
}

impl<T> TryDefault for Option<T> {
    fn try_default() -> Result<Self, ConstructError> {
        Ok(None)
    }
}

impl<T: TryDefault> TryDefault for Box<T> {
    fn try_default() -> Result<Self, ConstructError> {
        Ok(Box::new(T::try_default()?))
    }
}
