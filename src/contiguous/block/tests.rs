#![cfg(test)]

use super::*;
use crate::contiguous::AllocError;
use crate::util::instrument::{Ledger, Probe, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_empty_block() {
    let block: RawBlock<u32> = RawBlock::new();
    assert_eq!(block.cap(), 0);

    let allocated: RawBlock<u32> = RawBlock::allocate(0).expect("zero capacity never allocates");
    assert_eq!(allocated.cap(), 0);
    assert_eq!(
        allocated.as_ptr(),
        block.as_ptr(),
        "Zero-capacity blocks should share the dangling base address."
    );
}

#[test]
fn test_allocate_and_address() {
    let block: RawBlock<u64> = RawBlock::allocate(4).expect("small allocation should succeed");
    assert_eq!(block.cap(), 4);

    let base = block.as_ptr();
    assert_eq!(block.offset(0), base);
    assert_eq!(
        block.offset(4),
        base.wrapping_add(4),
        "The one-past-end offset should be valid for address arithmetic."
    );
    assert_eq!(block.slot(2).as_ptr(), base.wrapping_add(2));
}

#[test]
fn test_slot_roundtrip() {
    let block: RawBlock<u32> = RawBlock::allocate(3).expect("small allocation should succeed");

    for i in 0..3 {
        // SAFETY: i < cap and u32 needs no drop; the block outlives the writes.
        unsafe { block.slot(i).write(i as u32 * 10) };
    }
    for i in 0..3 {
        // SAFETY: A value was placed in every slot above.
        assert_eq!(unsafe { block.slot(i).read() }, i as u32 * 10);
    }
}

#[test]
fn test_swap() {
    let mut a: RawBlock<u8> = RawBlock::allocate(2).expect("small allocation should succeed");
    let mut b: RawBlock<u8> = RawBlock::allocate(5).expect("small allocation should succeed");
    let (a_ptr, b_ptr) = (a.as_ptr(), b.as_ptr());

    a.swap(&mut b);
    assert_eq!(a.cap(), 5);
    assert_eq!(b.cap(), 2);
    assert_eq!(a.as_ptr(), b_ptr, "Swap should exchange the handles, not the bytes.");
    assert_eq!(b.as_ptr(), a_ptr);
}

#[test]
fn test_move_transfers_ownership() {
    let block: RawBlock<u16> = RawBlock::allocate(3).expect("small allocation should succeed");
    let base = block.as_ptr();

    let moved = block;
    assert_eq!(moved.as_ptr(), base, "Moving a block should not reallocate.");
    assert_eq!(moved.cap(), 3);
}

#[test]
fn test_zst_support() {
    let block: RawBlock<ZeroSizedType> = RawBlock::allocate(1000).expect("ZSTs never allocate");
    assert_eq!(block.cap(), 1000);
    assert_eq!(
        block.as_ptr(),
        RawBlock::<ZeroSizedType>::new().as_ptr(),
        "A zero-sized element block should keep the dangling base address."
    );
}

#[test]
fn test_layout_overflow() {
    assert_eq!(
        RawBlock::<u64>::allocate(usize::MAX).map(|block| block.cap()),
        Err(AllocError { cap: usize::MAX }),
        "An impossible layout should surface as an error, not a panic."
    );
}

#[test]
fn test_drop_releases_storage_only() {
    let ledger = Ledger::new();
    let block: RawBlock<Probe> = RawBlock::allocate(2).expect("small allocation should succeed");

    // SAFETY: Both slots are in bounds and raw; the values are read back out below, so nothing
    // is leaked or dropped twice.
    unsafe {
        block.slot(0).write(Probe::new(&ledger, 0));
        block.slot(1).write(Probe::new(&ledger, 1));
    }
    assert_eq!(ledger.live(), 2);

    // SAFETY: Each slot holds the live value placed there, moved out exactly once.
    let (first, second) = unsafe { (block.slot(0).read(), block.slot(1).read()) };

    drop(block);
    assert_eq!(
        ledger.drops(),
        0,
        "Dropping a block must never run element destructors."
    );

    drop(first);
    drop(second);
    assert_eq!(ledger.live(), 0, "Construction and destruction should balance.");
}

#[test]
#[cfg(debug_assertions)]
fn test_debug_bounds() {
    assert_panics!({
        let block: RawBlock<u32> = RawBlock::allocate(2).expect("small allocation should succeed");
        block.offset(3)
    });
    assert_panics!({
        let block: RawBlock<u32> = RawBlock::allocate(2).expect("small allocation should succeed");
        block.slot(2)
    });
}
