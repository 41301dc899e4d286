use core::{
    ptr::{self, NonNull},
    mem,
};

/// Raw memory source backing a [`GrowVec`](crate::GrowVec).
///
/// Every method is `unsafe`: callers promise that `ptr`, `size` and `align`
/// describe a block previously returned by the same allocator.
pub trait Allocator {

    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>>;

    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize);

    /// Moves the block at `ptr` into a block of `new_size` bytes.
    ///
    /// Returns `None` without touching the old block if the new one can't be
    /// provided. The default allocates, copies `old_size` bytes and frees.
    unsafe fn reallocate_raw(
        &self,
        ptr: NonNull<u8>,
        old_size: usize,
        new_size: usize,
        align: usize,
    ) -> Option<NonNull<u8>>
    {
        let new = unsafe { self.allocate_raw(new_size, align)? };
        unsafe {
            ptr::copy_nonoverlapping(
                ptr.as_ptr(),
                new.as_ptr(),
                old_size.min(new_size),
            );
            self.free_raw(ptr, old_size, align);
        }
        Some(new)
    }

    unsafe fn allocate_uninit<T>(&self, count: usize) -> Option<NonNull<T>> {
        let size = mem::size_of::<T>().checked_mul(count)?;
        let align = mem::align_of::<T>();
        unsafe { self.allocate_raw(size, align).map(|ptr| ptr.cast::<T>()) }
    }

    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let size = mem::size_of::<T>() * count;
        let align = mem::align_of::<T>();
        unsafe { self.free_raw(ptr.cast::<u8>(), size, align) }
    }
}
