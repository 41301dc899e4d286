use alloc::alloc::{Layout, alloc, dealloc, realloc};

use core::ptr::NonNull;

use crate::Allocator;

/// Forwards to the process-wide allocator.
pub struct GlobalAlloc;

pub static GLOBAL_ALLOC: GlobalAlloc = GlobalAlloc;

impl Allocator for GlobalAlloc {

    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        let layout = Layout::from_size_align(size, align).ok()?;
        if layout.size() == 0 {
            return None
        }
        NonNull::new(unsafe { alloc(layout) })
    }

    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize) {
        let layout = match Layout::from_size_align(size, align) {
            Ok(l) => l,
            Err(_) => {
                debug_assert!(false, "freeing a block with an invalid layout");
                return
            },
        };
        unsafe { dealloc(ptr.as_ptr(), layout) }
    }

    unsafe fn reallocate_raw(
        &self,
        ptr: NonNull<u8>,
        old_size: usize,
        new_size: usize,
        align: usize,
    ) -> Option<NonNull<u8>>
    {
        let layout = Layout::from_size_align(old_size, align).ok()?;
        if new_size == 0 || Layout::from_size_align(new_size, align).is_err() {
            return None
        }
        // realloc leaves the old block alone when it returns null
        NonNull::new(unsafe { realloc(ptr.as_ptr(), layout, new_size) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realloc_keeps_prefix() {
        unsafe {
            let ptr = GLOBAL_ALLOC.allocate_uninit::<u32>(4).unwrap();
            for i in 0..4 {
                ptr.add(i).write(i as u32 * 3);
            }
            let grown = GLOBAL_ALLOC
                .reallocate_raw(ptr.cast(), 16, 64, core::mem::align_of::<u32>())
                .unwrap()
                .cast::<u32>();
            for i in 0..4 {
                assert_eq!(grown.add(i).read(), i as u32 * 3);
            }
            GLOBAL_ALLOC.free_uninit(grown, 16);
        }
    }

    #[test]
    fn zero_sized_request_is_refused() {
        unsafe {
            assert!(GLOBAL_ALLOC.allocate_raw(0, 1).is_none());
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid layout")]
    fn free_with_invalid_layout_asserts() {
        unsafe { GLOBAL_ALLOC.free_raw(NonNull::dangling(), 8, 3) }
    }
}
