use std::alloc::{alloc, dealloc, Layout};

use core::{
    mem,
    cell::Cell,
    ptr::{self, NonNull},
};

use vela_mem::Allocator;

#[inline(always)]
fn align_up(addr: usize, align: usize) -> Option<usize> {
    debug_assert!(align.is_power_of_two());
    Some(addr.checked_add(align - 1)? & !(align - 1))
}

/// Bump allocator over one fixed block.
///
/// Allocation fails once the block is exhausted, freeing is a no-op and the
/// most recent allocation can grow in place.
pub struct ArenaAlloc {
    data: NonNull<u8>,
    size: usize,
    pos: Cell<usize>,
    guard_active: Cell<bool>,
}

impl ArenaAlloc {

    pub fn new(size: usize) -> Option<Self> {
        if size == 0 {
            return None
        }
        let layout = Layout::from_size_align(size, mem::align_of::<usize>()).ok()?;
        let ptr = unsafe { alloc(layout) };
        Some(
            Self {
                data: NonNull::new(ptr)?,
                size,
                pos: Cell::new(0),
                guard_active: Cell::new(false),
            }
        )
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn used(&self) -> usize {
        self.pos.get()
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.size - self.used()
    }

    #[inline(always)]
    pub fn full(&self) -> bool {
        self.used() >= self.size
    }

    /// Resets the bump position to 0.
    ///
    /// Taking `&mut self` guarantees no vector or guard still borrows the arena.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.pos.set(0);
    }

    #[inline(always)]
    fn base(&self) -> usize {
        self.data.as_ptr() as usize
    }

    fn bump(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        let start = self.base() + self.used();
        let aligned_start = align_up(start, align)?;
        let end = aligned_start.checked_add(size)?;
        if end > self.base() + self.size {
            return None
        }
        self.pos.set(end - self.base());
        NonNull::new(aligned_start as *mut u8)
    }

    fn grow_last(
        &self,
        ptr: NonNull<u8>,
        old_size: usize,
        new_size: usize,
    ) -> Option<NonNull<u8>>
    {
        let start = ptr.as_ptr() as usize;
        if start + old_size != self.base() + self.used() {
            return None
        }
        let end = start.checked_add(new_size)?;
        if end > self.base() + self.size {
            return None
        }
        self.pos.set(end - self.base());
        Some(ptr)
    }
}

impl Allocator for ArenaAlloc {

    #[inline(always)]
    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        if self.guard_active.get() {
            return None
        }
        self.bump(size, align)
    }

    #[inline(always)]
    unsafe fn free_raw(&self, _ptr: NonNull<u8>, _size: usize, _align: usize) {}

    unsafe fn reallocate_raw(
        &self,
        ptr: NonNull<u8>,
        old_size: usize,
        new_size: usize,
        align: usize,
    ) -> Option<NonNull<u8>>
    {
        if self.guard_active.get() {
            return None
        }
        if let Some(ptr) = self.grow_last(ptr, old_size, new_size) {
            return Some(ptr)
        }
        let new = self.bump(new_size, align)?;
        unsafe {
            ptr::copy_nonoverlapping(ptr.as_ptr(), new.as_ptr(), old_size.min(new_size));
        }
        Some(new)
    }
}

impl Drop for ArenaAlloc {

    fn drop(&mut self) {
        unsafe {
            let layout = Layout::from_size_align_unchecked(self.size, mem::align_of::<usize>());
            dealloc(self.data.as_ptr(), layout);
        }
    }
}

/// Scoped allocations on an [`ArenaAlloc`].
///
/// Everything allocated through the guard is released when it drops. The
/// arena itself refuses allocations, returning `None`, while a guard is alive.
pub struct ArenaGuard<'a> {
    pos_rollback: usize,
    arena: &'a ArenaAlloc,
}

impl<'a> ArenaGuard<'a> {

    /// `None` if `arena` already has a live guard.
    #[inline(always)]
    pub fn new(arena: &'a ArenaAlloc) -> Option<Self> {
        if arena.guard_active.get() {
            return None
        }
        arena.guard_active.set(true);
        Some(Self {
            pos_rollback: arena.used(),
            arena,
        })
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.arena.size()
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.arena.remaining()
    }
}

impl<'a> Allocator for ArenaGuard<'a> {

    #[inline(always)]
    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        self.arena.bump(size, align)
    }

    #[inline(always)]
    unsafe fn free_raw(&self, _ptr: NonNull<u8>, _size: usize, _align: usize) {}

    unsafe fn reallocate_raw(
        &self,
        ptr: NonNull<u8>,
        old_size: usize,
        new_size: usize,
        align: usize,
    ) -> Option<NonNull<u8>>
    {
        if let Some(ptr) = self.arena.grow_last(ptr, old_size, new_size) {
            return Some(ptr)
        }
        let new = self.arena.bump(new_size, align)?;
        unsafe {
            ptr::copy_nonoverlapping(ptr.as_ptr(), new.as_ptr(), old_size.min(new_size));
        }
        Some(new)
    }
}

impl<'a> Drop for ArenaGuard<'a> {

    fn drop(&mut self) {
        self.arena.pos.set(self.pos_rollback);
        self.arena.guard_active.set(false);
    }
}
