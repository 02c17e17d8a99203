use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::contiguous::AllocError;

/// An owner of a single contiguous allocation sized for a fixed number of element slots, all of
/// them uninitialized as far as this type is concerned.
///
/// A RawBlock hands out addresses and deallocates on drop; it never runs an element constructor
/// or destructor. Whoever places values into its slots owns their lifecycle completely, which is
/// the entire point: the split lets [`DynArray`](super::DynArray) reason about partially
/// initialized storage during fallible multi-step operations without the storage owner getting
/// in the way.
///
/// A RawBlock is movable but deliberately not clonable: duplicating raw storage without knowing
/// which slots hold live values cannot be done soundly.
///
/// # Examples
/// ```
/// # use dyn_array::contiguous::RawBlock;
/// let block: RawBlock<u64> = RawBlock::allocate(4)?;
/// assert_eq!(block.cap(), 4);
/// # Ok::<(), dyn_array::contiguous::AllocError>(())
/// ```
pub struct RawBlock<T> {
    ptr: NonNull<T>,
    cap: usize,
    _phantom: PhantomData<T>,
}

// SAFETY: A RawBlock uniquely owns its allocation; sending it to another thread sends the storage
// of any T values its owner placed there, so the bound follows the element type.
unsafe impl<T: Send> Send for RawBlock<T> {}
// SAFETY: RawBlock's API exposes no interior mutability; shared references only read the pointer
// and capacity.
unsafe impl<T: Sync> Sync for RawBlock<T> {}

impl<T> RawBlock<T> {
    /// Creates the empty block: capacity 0, no allocation, dangling base address.
    ///
    /// # Examples
    /// ```
    /// # use dyn_array::contiguous::RawBlock;
    /// let block: RawBlock<u8> = RawBlock::new();
    /// assert_eq!(block.cap(), 0);
    /// ```
    pub const fn new() -> RawBlock<T> {
        RawBlock {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates uninitialized storage for exactly `cap` elements, aligned for `T`.
    ///
    /// A capacity of 0 and zero-sized element types produce the no-allocation state, still
    /// reporting the requested capacity. Either the whole request succeeds or nothing is
    /// allocated.
    ///
    /// # Errors
    /// Returns [`AllocError`] if the global allocator refuses the request or the layout would
    /// exceed [`isize::MAX`] bytes.
    pub fn allocate(cap: usize) -> Result<RawBlock<T>, AllocError> {
        if cap == 0 || size_of::<T>() == 0 {
            return Ok(RawBlock {
                ptr: NonNull::dangling(),
                cap,
                _phantom: PhantomData,
            });
        }

        let layout = Layout::array::<T>(cap).map_err(|_| AllocError { cap })?;

        // SAFETY: The layout has non-zero size because both zero capacity and zero-sized types
        // are guarded against above.
        let raw_ptr: *mut T = unsafe { alloc::alloc(layout).cast() };

        match NonNull::new(raw_ptr) {
            Some(ptr) => Ok(RawBlock {
                ptr,
                cap,
                _phantom: PhantomData,
            }),
            None => Err(AllocError { cap }),
        }
    }

    /// Returns the number of element slots the block covers, initialized or not.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the base address of the block. Dangling (but well-aligned) when `cap == 0` or `T`
    /// is zero-sized.
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the address of slot `offset`.
    ///
    /// The one-past-end offset is a valid argument for address arithmetic but the resulting
    /// pointer must never be dereferenced. Checked with a debug assertion only.
    pub fn offset(&self, offset: usize) -> *mut T {
        debug_assert!(
            offset <= self.cap,
            "offset {} past the end of a block with {} slots",
            offset,
            self.cap
        );

        // SAFETY: offset <= cap keeps the result inside (or one past) the allocation, and an
        // allocated block covers at most isize::MAX bytes.
        unsafe { self.ptr.add(offset).as_ptr() }
    }

    /// Returns a handle to slot `index`. Checked with a debug assertion only.
    ///
    /// Reading the slot as a live element is only sound if the caller placed one there and has
    /// not since moved it out.
    pub fn slot(&self, index: usize) -> NonNull<T> {
        debug_assert!(
            index < self.cap,
            "slot {} out of bounds for a block with {} slots",
            index,
            self.cap
        );

        // SAFETY: index < cap keeps the result inside the allocation.
        unsafe { self.ptr.add(index) }
    }

    /// Exchanges the storage of two blocks: base address and capacity only, no element transfer.
    pub fn swap(&mut self, other: &mut RawBlock<T>) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.cap, &mut other.cap);
    }
}

impl<T> Default for RawBlock<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBlock<T> {
    fn drop(&mut self) {
        if self.cap == 0 || size_of::<T>() == 0 {
            return;
        }

        // The layout was validated when the block was allocated.
        let Ok(layout) = Layout::array::<T>(self.cap) else {
            return;
        };

        // SAFETY: ptr was allocated in the global allocator with exactly this layout, and
        // zero-sized layouts never reach this point. Element slots are released as raw bytes;
        // destroying any live values in them is the owner's job, done before the block drops.
        unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
    }
}

impl<T> Debug for RawBlock<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBlock")
            .field("cap", &self.cap)
            .finish_non_exhaustive()
    }
}
