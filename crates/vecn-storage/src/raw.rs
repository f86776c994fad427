//! An owning block of uninitialized memory with placement construction.
//!
//! [`RawStorage`] separates allocation from element construction: memory
//! for `cap` elements is reserved up front, and elements are constructed
//! in place one at a time, strictly from index 0 upward. On drop, exactly
//! the constructed prefix is destroyed, then the block is released — this
//! holds even when a constructor panics partway through filling, because
//! `len` only counts elements that finished construction.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

/// An owning, fixed-capacity block of possibly-uninitialized elements.
///
/// Invariant: indices `[0, len)` hold live `T`s; `[len, cap)` is raw
/// uninitialized memory. Construction is strictly sequential —
/// [`push`](RawStorage::push) fills the next free slot — and there is no
/// removal short of dropping the whole block.
///
/// `RawStorage` is move-only. Duplicating a buffer is the owner's job
/// (allocate fresh, copy element by element); a `Clone` here would hide
/// a deep copy behind an innocent-looking call.
pub struct RawStorage<T> {
    /// Start of the block. Dangling when no allocation was made.
    ptr: NonNull<T>,
    /// Number of element slots reserved.
    cap: usize,
    /// Number of leading slots holding constructed values.
    len: usize,
    /// The block logically owns `T`s (drop check).
    _marker: PhantomData<T>,
}

impl<T> RawStorage<T> {
    /// Reserve uninitialized memory for exactly `cap` elements.
    ///
    /// No element is constructed. `cap == 0` (or a zero-sized `T`)
    /// performs no allocation and cannot fail. Allocation failure is
    /// fatal ([`alloc::handle_alloc_error`]); there is no recovery path.
    pub fn with_capacity(cap: usize) -> Self {
        if cap == 0 || mem::size_of::<T>() == 0 {
            return Self {
                ptr: NonNull::dangling(),
                cap,
                len: 0,
                _marker: PhantomData,
            };
        }
        let layout = Layout::array::<T>(cap).expect("capacity overflows the address space");
        // SAFETY: cap > 0 and T is not zero-sized, so layout has non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            alloc::handle_alloc_error(layout);
        };
        Self {
            ptr,
            cap,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Placement-construct `value` in the next free slot.
    ///
    /// # Panics
    ///
    /// Panics if the storage is already full. The owner constructs
    /// exactly `cap` elements; overfilling is a bug, not a recoverable
    /// condition.
    pub fn push(&mut self, value: T) {
        assert!(
            self.len < self.cap,
            "RawStorage overfilled: capacity {}",
            self.cap
        );
        // SAFETY: len < cap, so the slot is inside the reserved block and
        // not yet constructed. ptr::write does not drop the old contents.
        unsafe { ptr::write(self.ptr.as_ptr().add(self.len), value) };
        self.len += 1;
    }

    /// View of the constructed prefix `[0, len)`.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) holds constructed elements by invariant.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Mutable view of the constructed prefix `[0, len)`.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: [0, len) holds constructed elements, and `&mut self`
        // guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Number of constructed elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no element has been constructed yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots reserved.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// True when every reserved slot holds a constructed element.
    pub fn is_full(&self) -> bool {
        self.len == self.cap
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        // SAFETY: [0, len) holds constructed elements; each is destroyed
        // exactly once, in index order.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len)) };
        if self.cap != 0 && mem::size_of::<T>() != 0 {
            let layout =
                Layout::array::<T>(self.cap).expect("layout was computed at allocation time");
            // SAFETY: ptr was allocated in with_capacity with this exact layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("elements", &self.as_slice())
            .field("capacity", &self.cap)
            .finish()
    }
}

// SAFETY: RawStorage exclusively owns its elements; sending the block
// sends the Ts with it.
unsafe impl<T: Send> Send for RawStorage<T> {}

// SAFETY: shared access only ever exposes `&T`.
unsafe impl<T: Sync> Sync for RawStorage<T> {}
