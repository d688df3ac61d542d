//! Raw uninitialized storage.
//!
//! [`RawBuffer`] owns a contiguous run of `MaybeUninit<T>` slots obtained from
//! an allocator strategy. It tracks no element lifecycle whatsoever: dropping
//! it frees the allocation and nothing else. Containers layered on top decide
//! which slots are live and are responsible for constructing and destroying
//! the values in them.

use core::alloc::Layout;
use core::mem::MaybeUninit;
use core::ptr::{self, NonNull};

use crate::alloc::{AllocError, RawAlloc};

/// An owned, uninitialized, contiguous allocation of `cap` slots of `T`.
///
/// Never reads or drops element values. Zero-capacity buffers (and buffers of
/// zero-sized types) hold a dangling, well-aligned pointer and perform no
/// allocator calls.
pub(crate) struct RawBuffer<T, A: RawAlloc> {
    ptr: NonNull<MaybeUninit<T>>,
    cap: usize,
    alloc: A,
}

impl<T, A: RawAlloc> RawBuffer<T, A> {
    /// Creates an empty buffer that has performed no allocation.
    pub(crate) const fn new(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
        }
    }

    /// Creates a buffer with exactly `capacity` slots.
    pub(crate) fn with_capacity(capacity: usize, alloc: A) -> Result<Self, AllocError> {
        let mut buf = Self::new(alloc);
        // Safety: zero live elements in an empty buffer
        unsafe { buf.reallocate(capacity, 0)? };
        Ok(buf)
    }

    /// Number of slots.
    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    /// Pointer to the first slot.
    #[inline]
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr() as *mut T
    }

    /// The strategy this buffer allocates through.
    #[inline]
    pub(crate) const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Replaces the allocation with one of `new_cap` slots, moving the bits of
    /// the first `live` slots across.
    ///
    /// The old allocation is released only after the copy, so a failed
    /// allocation leaves the buffer untouched. Moving bits cannot fail
    /// partway: the elements' new home is adopted in a single step.
    ///
    /// # Safety
    ///
    /// `live` must not exceed `new_cap` or the current capacity, and exactly
    /// the first `live` slots may be treated as initialized by the caller.
    pub(crate) unsafe fn reallocate(
        &mut self,
        new_cap: usize,
        live: usize,
    ) -> Result<(), AllocError> {
        debug_assert!(live <= new_cap);
        debug_assert!(live <= self.cap);

        let new_layout = Self::layout(new_cap);
        let new_ptr: NonNull<MaybeUninit<T>> = if new_layout.size() == 0 {
            NonNull::dangling()
        } else {
            self.alloc.allocate(new_layout)?.cast()
        };

        // Safety: both regions cover at least `live` slots and cannot overlap
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), live);
        }

        let old_layout = Self::layout(self.cap);
        if old_layout.size() != 0 {
            // Safety: the old block came from this strategy with this layout
            unsafe {
                self.alloc.deallocate(self.ptr.cast(), old_layout);
            }
        }

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    fn layout(capacity: usize) -> Layout {
        Layout::array::<MaybeUninit<T>>(capacity).expect("capacity overflow")
    }
}

impl<T, A: RawAlloc> Drop for RawBuffer<T, A> {
    fn drop(&mut self) {
        let layout = Self::layout(self.cap);
        if layout.size() != 0 {
            // Safety: the block came from this strategy with this layout
            unsafe {
                self.alloc.deallocate(self.ptr.cast(), layout);
            }
        }
    }
}

// Safety: the buffer uniquely owns its allocation
unsafe impl<T: Send, A: RawAlloc + Send> Send for RawBuffer<T, A> {}
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for RawBuffer<T, A> {}
