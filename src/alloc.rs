//! Allocator strategies.
//!
//! Every container in this crate routes its allocations through a [`RawAlloc`]
//! strategy chosen at construction time. A strategy hands out raw, uninitialized
//! storage; the container alone decides which slots hold live elements and runs
//! their constructors and destructors. The default strategy is [`Global`], the
//! process heap.

use core::alloc::Layout;
use core::fmt;
use core::ptr::NonNull;
use std::alloc::{alloc, dealloc};

/// Error returned when a strategy cannot satisfy an allocation request.
///
/// Fallible container entry points (`try_reserve`, `try_with_capacity`) surface
/// this and leave the container exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    /// The layout that could not be satisfied.
    pub layout: Layout,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "allocation of {} bytes (align {}) failed",
            self.layout.size(),
            self.layout.align()
        )
    }
}

impl std::error::Error for AllocError {}

/// A source of raw storage.
///
/// Implementations hand out blocks of uninitialized memory. No element
/// lifecycle is implied: the caller constructs values into the block and must
/// destroy them before returning it.
///
/// # Safety
///
/// An implementation must return blocks that are valid for reads and writes of
/// `layout.size()` bytes at `layout.align()` alignment, and that stay valid
/// until passed back to [`deallocate`](RawAlloc::deallocate) on the same
/// strategy. Two live blocks must not overlap.
pub unsafe trait RawAlloc {
    /// Allocates a block of memory for `layout`.
    ///
    /// `layout` must have a non-zero size; containers never ask a strategy for
    /// empty blocks.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Returns a block previously obtained from [`allocate`](RawAlloc::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by `allocate` on this same strategy with
    /// this same `layout`, and must not be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The process heap, via `std::alloc`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Global;

unsafe impl RawAlloc for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() > 0);
        // Safety: layout has non-zero size
        let ptr = unsafe { alloc(layout) };
        NonNull::new(ptr).ok_or(AllocError { layout })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // Safety: forwarded from the caller's contract
        unsafe { dealloc(ptr.as_ptr(), layout) }
    }
}
