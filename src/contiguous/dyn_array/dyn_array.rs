use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::construct::{ConstructError, TryClone, TryDefault};
use crate::contiguous::{AllocError, AllocOrConstruct, RawBlock};

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, layered over a single [`RawBlock<T>`].
///
/// Slots `[0, len)` hold live values and slots `[len, cap)` are uninitialized raw memory; the
/// container is the only thing that ever constructs or destroys an element inside its block.
/// Capacity is managed independently of length and is exactly what was requested: growth
/// doubles, but [`reserve`](DynArray::reserve) and [`with_cap`](DynArray::with_cap) allocate the
/// given slot count, nothing more.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynArray.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second DynArray.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `resize` | `O(n)` |
/// | `assign_from` | `O(n+m)` |
/// | `take` / `swap` | `O(1)` |
///
/// \* Amortized; a push that exhausts capacity relocates every element first.
///
/// \** `O(1)` when the requested capacity is already available.
///
/// # Failure Safety
/// Every fallible operation that has placed elements into *new* storage before committing will,
/// on a partial failure, destroy exactly what it had already built there, release the new block
/// and re-raise the failure, leaving the container as it was. Old storage is never modified
/// until an operation has committed. Operations documented as never failing (`pop`, `remove`,
/// `swap`, `take`, `truncate`, dropping) contain no fallible step at all.
///
/// # Iterator Invalidation
/// Any operation that reallocates or shifts elements (`reserve`, `shrink_to_fit`, `resize`, a
/// growing `push`/`emplace_back`, `insert`, `emplace`, `remove`) invalidates previously
/// obtained element addresses. Safe code is covered by the borrow checker; holders of raw
/// pointers are on their own.
pub struct DynArray<T> {
    pub(crate) buf: RawBlock<T>,
    pub(crate) len: usize,
}

impl<T> DynArray<T> {
    /// Creates a new DynArray with length and capacity 0. Storage is allocated once elements
    /// arrive or capacity is requested.
    ///
    /// # Examples
    /// ```
    /// # use dyn_array::contiguous::DynArray;
    /// let arr: DynArray<u8> = DynArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub const fn new() -> DynArray<T> {
        DynArray {
            buf: RawBlock::new(),
            len: 0,
        }
    }

    /// Creates an empty DynArray with capacity exactly equal to the provided value.
    ///
    /// # Errors
    /// Returns [`AllocError`](crate::contiguous::AllocError) if the storage request cannot be
    /// satisfied.
    ///
    /// # Examples
    /// ```
    /// # use dyn_array::contiguous::DynArray;
    /// let arr: DynArray<u8> = DynArray::with_cap(5)?;
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 5);
    /// # Ok::<(), dyn_array::contiguous::AllocError>(())
    /// ```
    pub fn with_cap(cap: usize) -> Result<DynArray<T>, AllocError> {
        Ok(DynArray {
            buf: RawBlock::allocate(cap)?,
            len: 0,
        })
    }

    /// Returns the number of live elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity: the number of allocated slots, live or not.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns true if the DynArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pops the last value off the end, returning it. Never fails; `None` when empty.
    ///
    /// # Examples
    /// ```
    /// # use dyn_array::contiguous::DynArray;
    /// let mut arr = DynArray::new();
    /// arr.push(1_u8)?;
    /// assert_eq!(arr.pop(), Some(1));
    /// assert_eq!(arr.pop(), None);
    /// # Ok::<(), dyn_array::contiguous::AllocOrConstruct>(())
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, so the slot is already outside the live range.
            self.len -= 1;

            // SAFETY: Slot len held the last live value; reading it moves it out and the
            // container no longer counts it.
            Some(unsafe { self.buf.slot(self.len).read() })
        }
    }

    /// Removes and returns the element at the provided index, shifting the values after it one
    /// slot left to fill the gap. Never fails: an out-of-range index, which includes any index
    /// on an empty DynArray, is a no-op returning `None`.
    ///
    /// # Examples
    /// ```
    /// # use dyn_array::contiguous::DynArray;
    /// let mut arr = DynArray::try_from(&[1, 2, 3, 4][..])?;
    /// assert_eq!(arr.remove(1), Some(2));
    /// assert_eq!(&*arr, &[1, 3, 4]);
    /// assert_eq!(arr.remove(10), None);
    /// # Ok::<(), dyn_array::contiguous::AllocOrConstruct>(())
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        // SAFETY: index < len, so the slot holds a live value. Reading it leaves the slot
        // logically dead until the shift below refills it.
        let value = unsafe { self.buf.slot(index).read() };

        // SAFETY: Source and destination both lie within the allocation and copy handles the
        // overlap; [index + 1, len) moves one slot left over the vacated position.
        unsafe {
            ptr::copy(
                self.buf.offset(index + 1),
                self.buf.offset(index),
                self.len - index - 1,
            );
        }
        self.len -= 1;

        Some(value)
    }

    /// Appends a value without ever reallocating, handing it back if there is no spare slot.
    ///
    /// This is the append available to element types with no duplication facility at all: pair
    /// it with [`with_cap`](DynArray::with_cap) to batch moves into pre-sized storage.
    pub fn push_within_cap(&mut self, value: T) -> Result<(), T> {
        if self.len == self.cap() {
            return Err(value);
        }

        // SAFETY: len < cap, so slot len is allocated and uninitialized.
        unsafe { self.buf.slot(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Moves the contents out, leaving `self` empty with no capacity. O(1), never fails.
    ///
    /// # Examples
    /// ```
    /// # use dyn_array::contiguous::DynArray;
    /// let mut arr = DynArray::try_from(&[1, 2][..])?;
    /// let taken = arr.take();
    /// assert!(arr.is_empty());
    /// assert_eq!(&*taken, &[1, 2]);
    /// # Ok::<(), dyn_array::contiguous::AllocOrConstruct>(())
    /// ```
    pub fn take(&mut self) -> DynArray<T> {
        mem::replace(self, DynArray::new())
    }

    /// Exchanges the contents of two DynArrays: block and length only, no element transfer.
    /// O(1), never fails.
    pub fn swap(&mut self, other: &mut DynArray<T>) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Shortens the DynArray to `new_len` elements, dropping the surplus tail one value at a
    /// time from the end. A `new_len` of at least the current length is a no-op. Never fails.
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            self.len -= 1;

            // SAFETY: The slot at the decremented len held the last live value.
            unsafe { ptr::drop_in_place(self.buf.offset(self.len)) }
        }
    }

    pub(crate) fn check_index(&self, index: usize) {
        assert!(
            index <= self.len,
            "index {} out of bounds for insertion into a collection with {} elements",
            index,
            self.len
        );
    }

    fn grown_cap(&self) -> usize {
        cmp::max(1, self.len.saturating_mul(GROWTH_FACTOR))
    }
}

/// Carries `count` live values from `src` into the raw slots at `dst`, by the element type's
/// relocation policy.
///
/// On the move path the transfer is bitwise and infallible and the source slots are dead
/// afterwards. On the clone path a failure at element `i` drops the `i` clones already placed at
/// `dst` and every source value stays live; on success the source values are also still live and
/// the caller must destroy them before releasing their storage.
///
/// # Safety
/// `src` must address `count` live values and `dst` `count` raw slots, in distinct allocations.
unsafe fn relocate<T: TryClone>(
    src: *const T,
    dst: *mut T,
    count: usize,
) -> Result<(), ConstructError> {
    if T::MOVE_ON_RELOCATE {
        // SAFETY: The ranges are in distinct allocations and each spans count slots.
        unsafe { ptr::copy_nonoverlapping(src, dst, count) };
        return Ok(());
    }

    for i in 0..count {
        // SAFETY: Source slot i holds a live value.
        let cloned = unsafe { (*src.add(i)).try_clone() };

        match cloned {
            // SAFETY: Destination slot i is raw and in bounds.
            Ok(value) => unsafe { dst.add(i).write(value) },
            Err(error) => {
                for already_placed in 0..i {
                    // SAFETY: Slots [0, i) of dst were initialized by earlier iterations.
                    unsafe { ptr::drop_in_place(dst.add(already_placed)) }
                }
                return Err(error);
            }
        }
    }

    Ok(())
}

impl<T: TryClone> DynArray<T> {
    /// Ensures capacity for at least `new_cap` elements, allocating a block of exactly that many
    /// slots and relocating the live values into it. A `new_cap` within the current capacity
    /// changes nothing observable. On failure the DynArray is untouched.
    pub fn reserve(&mut self, new_cap: usize) -> Result<(), AllocOrConstruct> {
        if new_cap <= self.cap() {
            return Ok(());
        }

        let new_buf = RawBlock::allocate(new_cap)?;

        // SAFETY: [0, len) are live in the old block and raw in the new, and len <= new_cap.
        let relocated = unsafe { relocate(self.buf.as_ptr(), new_buf.as_ptr(), self.len) };
        relocated?;

        self.replace_buf(new_buf);
        Ok(())
    }

    /// Relocates into a block of exactly `len` slots, releasing the spare capacity.
    pub fn shrink_to_fit(&mut self) -> Result<(), AllocOrConstruct> {
        if self.cap() == self.len {
            return Ok(());
        }

        let new_buf = RawBlock::allocate(self.len)?;

        // SAFETY: As in reserve; the new block has exactly len slots.
        let relocated = unsafe { relocate(self.buf.as_ptr(), new_buf.as_ptr(), self.len) };
        relocated?;

        self.replace_buf(new_buf);
        Ok(())
    }

    /// Push the provided value onto the end, growing capacity to `max(1, 2 × len)` if no spare
    /// slot exists. Amortized O(1).
    ///
    /// On failure the DynArray is unchanged and the value is dropped; use
    /// [`push_within_cap`](DynArray::push_within_cap) to get the value back instead.
    ///
    /// # Examples
    /// ```
    /// # use dyn_array::contiguous::DynArray;
    /// let mut arr = DynArray::new();
    /// for i in 0..=5_u8 {
    ///     arr.push(i)?;
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5]);
    /// # Ok::<(), dyn_array::contiguous::AllocOrConstruct>(())
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), AllocOrConstruct> {
        self.emplace_back(move || Ok(value)).map(|_| ())
    }

    /// Constructs a new element directly at the end of the DynArray, returning a reference to
    /// it. The constructor runs exactly once, against the slot's commit point; if it fails, the
    /// DynArray is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use dyn_array::contiguous::DynArray;
    /// let mut arr = DynArray::try_from(&[10_u32][..])?;
    /// let new = arr.emplace_back(|| Ok(20))?;
    /// *new += 1;
    /// assert_eq!(&*arr, &[10, 21]);
    /// # Ok::<(), dyn_array::contiguous::AllocOrConstruct>(())
    /// ```
    pub fn emplace_back(
        &mut self,
        build: impl FnOnce() -> Result<T, ConstructError>,
    ) -> Result<&mut T, AllocOrConstruct> {
        self.emplace(self.len, build)
    }

    /// Inserts the provided value at the given index, shifting the values from there on one
    /// slot right. `index == len` appends.
    ///
    /// On failure the DynArray is unchanged and the value is dropped.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use dyn_array::contiguous::DynArray;
    /// let mut arr = DynArray::try_from(&[1, 2, 4][..])?;
    /// arr.insert(2, 3)?;
    /// assert_eq!(&*arr, &[1, 2, 3, 4]);
    /// # Ok::<(), dyn_array::contiguous::AllocOrConstruct>(())
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), AllocOrConstruct> {
        self.emplace(index, move || Ok(value)).map(|_| ())
    }

    /// Constructs a new element directly at the given index, shifting the values from there on
    /// one slot right and returning a reference to it. `index == len` appends.
    ///
    /// The constructor runs before anything moves, so a construction failure leaves the
    /// DynArray untouched. Without a spare slot, the element is built at its target offset in
    /// the new block before the others are carried over; a relocation failure then tears down
    /// only what was already placed in that block and the old storage stays as it was.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn emplace(
        &mut self,
        index: usize,
        build: impl FnOnce() -> Result<T, ConstructError>,
    ) -> Result<&mut T, AllocOrConstruct> {
        self.check_index(index);

        if self.len == self.cap() {
            self.grow_and_place(index, build)?;
        } else {
            let value = build()?;

            // SAFETY: There is a spare slot past the live range, so shifting [index, len) one
            // slot right stays in bounds; copy moves backwards over the overlap, and the gap
            // then takes the new value.
            unsafe {
                ptr::copy(
                    self.buf.offset(index),
                    self.buf.offset(index + 1),
                    self.len - index,
                );
                self.buf.slot(index).write(value);
            }
            self.len += 1;
        }

        // SAFETY: A live value now sits at index.
        Ok(unsafe { &mut *self.buf.offset(index) })
    }

    /// Pushes every value the iterator yields, stopping at the first failure.
    pub fn try_extend<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) -> Result<(), AllocOrConstruct> {
        for value in iter {
            self.push(value)?;
        }
        Ok(())
    }

    /// Copy-assigns the contents of `other` onto `self`, reusing existing element storage where
    /// capacity allows.
    ///
    /// When `other` does not fit in the current capacity, a complete independent copy is built
    /// first and swapped in, so a failure leaves `self` untouched. Within capacity, the shared
    /// prefix is copy-assigned element by element and the surplus (of either side) is dropped or
    /// clone-constructed; a failure partway through that path leaves `self` valid but partially
    /// assigned, exactly as wide as the successful prefix.
    ///
    /// # Examples
    /// ```
    /// # use dyn_array::contiguous::DynArray;
    /// let source = DynArray::try_from(&[1, 2, 3][..])?;
    /// let mut target = DynArray::new();
    /// target.assign_from(&source)?;
    /// assert_eq!(target, source);
    /// # Ok::<(), dyn_array::contiguous::AllocOrConstruct>(())
    /// ```
    pub fn assign_from(&mut self, other: &DynArray<T>) -> Result<(), AllocOrConstruct> {
        if other.len > self.cap() {
            // Copy-and-swap: the old contents die with `copy` on the way out.
            let mut copy = DynArray::cloned_from_slice(other)?;
            self.swap(&mut copy);
            return Ok(());
        }

        if self.len > other.len {
            self.truncate(other.len);
        }

        for (target, source) in self.iter_mut().zip(other.iter()) {
            target.try_clone_from(source)?;
        }

        for source in &other[self.len..] {
            // SAFETY: Slot len is raw: len < other.len <= cap. Incrementing per element keeps
            // the live-range invariant exact if a later clone fails.
            unsafe { self.buf.slot(self.len).write(source.try_clone()?) };
            self.len += 1;
        }

        Ok(())
    }

    pub(crate) fn cloned_from_slice(source: &[T]) -> Result<DynArray<T>, AllocOrConstruct> {
        let mut array = DynArray {
            buf: RawBlock::allocate(source.len())?,
            len: 0,
        };

        for value in source {
            // SAFETY: Slot len is raw and within capacity. len tracks every constructed slot,
            // so dropping the partial array on failure tears down exactly the clones made so
            // far and retains no storage.
            unsafe { array.buf.slot(array.len).write(value.try_clone()?) };
            array.len += 1;
        }

        Ok(array)
    }

    /// Allocates a grown block, constructs the new element at `index` in it, carries the prefix
    /// and suffix over around it, and commits. Each phase tears down only what it had already
    /// constructed in the new block when a later phase fails; the old block stays intact until
    /// the very end.
    fn grow_and_place(
        &mut self,
        index: usize,
        build: impl FnOnce() -> Result<T, ConstructError>,
    ) -> Result<(), AllocOrConstruct> {
        let new_buf = RawBlock::allocate(self.grown_cap())?;

        // The new element goes in before anything is carried over, so a relocation failure can
        // never leave it half-owned. If its construction fails, the empty block is simply
        // released again.
        // SAFETY: index <= len < the grown capacity, and every slot of the new block is raw.
        unsafe { new_buf.slot(index).write(build()?) };

        // SAFETY: The prefix [0, index) is live in the old block and its destination is raw.
        if let Err(error) = unsafe { relocate(self.buf.as_ptr(), new_buf.as_ptr(), index) } {
            // SAFETY: Only the new element has been constructed in the new block; relocate
            // already unwound its partial clones.
            unsafe { ptr::drop_in_place(new_buf.offset(index)) };
            return Err(error.into());
        }

        // SAFETY: The suffix [index, len) is live in the old block; its destination
        // [index + 1, len + 1) is raw and in bounds of the grown block.
        if let Err(error) = unsafe {
            relocate(
                self.buf.offset(index),
                new_buf.offset(index + 1),
                self.len - index,
            )
        } {
            // A failure implies the clone path, so the old values are all still live; drop the
            // prefix clones and the new element, i.e. everything this call built in new_buf.
            for already_placed in 0..=index {
                // SAFETY: Slots [0, index] of the new block hold the prefix clones and the new
                // element.
                unsafe { ptr::drop_in_place(new_buf.offset(already_placed)) };
            }
            return Err(error.into());
        }

        self.replace_buf(new_buf);
        self.len += 1;
        Ok(())
    }

    /// Commits `new_buf` as the backing block after a successful relocation. On the clone path
    /// the old values are still live and dropped here; on the move path their slots are already
    /// dead. The old allocation rides out on `new_buf`'s drop.
    fn replace_buf(&mut self, mut new_buf: RawBlock<T>) {
        if !T::MOVE_ON_RELOCATE {
            for i in 0..self.len {
                // SAFETY: The clone path left [0, len) of the old block live.
                unsafe { ptr::drop_in_place(self.buf.offset(i)) }
            }
        }

        self.buf.swap(&mut new_buf);
    }
}

impl<T: TryDefault> DynArray<T> {
    /// Creates a DynArray of exactly `n` default-constructed elements, with `len == cap == n`.
    ///
    /// A construction failure partway destroys the already-built prefix and retains nothing.
    ///
    /// # Examples
    /// ```
    /// # use dyn_array::contiguous::DynArray;
    /// let arr: DynArray<u32> = DynArray::with_len(3)?;
    /// assert_eq!(&*arr, &[0, 0, 0]);
    /// assert_eq!(arr.cap(), 3);
    /// # Ok::<(), dyn_array::contiguous::AllocOrConstruct>(())
    /// ```
    pub fn with_len(n: usize) -> Result<DynArray<T>, AllocOrConstruct> {
        let mut array = DynArray {
            buf: RawBlock::allocate(n)?,
            len: 0,
        };

        while array.len < n {
            // SAFETY: Slot len is raw and within capacity; len tracks every constructed slot,
            // so dropping the partial array on failure tears down exactly the built prefix.
            unsafe { array.buf.slot(array.len).write(T::try_default()?) };
            array.len += 1;
        }

        Ok(array)
    }
}

impl<T: TryClone + TryDefault> DynArray<T> {
    /// Resizes to exactly `new_len` elements: shrinking drops the surplus tail one value at a
    /// time, growing reserves `new_len` capacity and default-constructs the new trailing slots.
    ///
    /// If a default construction fails partway, the partially-built tail is destroyed and the
    /// original elements stay put; the capacity keeps whatever the reserve committed.
    pub fn resize(&mut self, new_len: usize) -> Result<(), AllocOrConstruct> {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        let old_len = self.len;
        self.reserve(new_len)?;

        while self.len < new_len {
            match T::try_default() {
                Ok(value) => {
                    // SAFETY: Slot len is raw: old_len <= len < new_len <= cap.
                    unsafe { self.buf.slot(self.len).write(value) };
                    self.len += 1;
                }
                Err(error) => {
                    self.truncate(old_len);
                    return Err(error.into());
                }
            }
        }

        Ok(())
    }
}

impl<T: TryClone> TryClone for DynArray<T> {
    /// Copy-constructs an independent DynArray, cloning each element in order. If any clone
    /// fails, everything already built is destroyed, no storage is retained and the failure
    /// propagates. An allocation failure is coarsened into a [`ConstructError`] here; use
    /// [`assign_from`](DynArray::assign_from) where the full error split matters.
    fn try_clone(&self) -> Result<Self, ConstructError> {
        DynArray::cloned_from_slice(self).map_err(|error| match error {
            AllocOrConstruct::Alloc(_) => ConstructError::new("storage allocation failed"),
            AllocOrConstruct::Construct(error) => error,
        })
    }
}

impl<T: TryClone> TryFrom<&[T]> for DynArray<T> {
    type Error = AllocOrConstruct;

    /// Clones a slice into a freshly allocated DynArray of matching capacity.
    fn try_from(value: &[T]) -> Result<Self, AllocOrConstruct> {
        DynArray::cloned_from_slice(value)
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // Drop the live values in place; the block then releases the raw storage without
        // touching element slots.
        for i in 0..self.len {
            // SAFETY: [0, len) are live.
            unsafe { ptr::drop_in_place(self.buf.offset(i)) }
        }
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: [0, len) are live, contiguous and properly aligned, and the allocation spans
        // at most isize::MAX bytes.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As in Deref; the mutable borrow of self makes the slice exclusive.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && **self == **other
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
