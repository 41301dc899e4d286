use core::{
    ptr::NonNull,
    marker::PhantomData,
    mem::size_of,
    fmt,
};

use super::Iter;

/// Pointer-like position inside the live elements of a vector.
///
/// Obtained from [`GrowVec::begin`](crate::GrowVec::begin) and
/// [`GrowVec::end`](crate::GrowVec::end). A cursor borrows its vector, so no
/// push, pop, reserve or clear can happen while it is alive.
pub struct Cursor<'a, T> {
    ptr: NonNull<T>,
    base: NonNull<T>,
    end: NonNull<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Cursor<'a, T> {

    /// # Safety
    /// `base..end` must be the live range of a vector borrowed for `'a` and
    /// `ptr` must lie inside `base..=end`.
    #[inline(always)]
    pub(crate) unsafe fn new(ptr: NonNull<T>, base: NonNull<T>, end: NonNull<T>) -> Self {
        Self {
            ptr,
            base,
            end,
            _marker: PhantomData,
        }
    }

    /// Element under the cursor, `None` at the one-past-the-end position.
    #[inline(always)]
    pub fn get(&self) -> Option<&'a T> {
        if self.ptr == self.end {
            None
        }
        else {
            Some(unsafe { self.ptr.as_ref() })
        }
    }

    /// Cursor one slot further; stays put at the end position.
    #[inline(always)]
    pub fn advance(self) -> Self {
        if self.ptr == self.end {
            return self
        }
        Self {
            ptr: unsafe { self.ptr.add(1) },
            ..self
        }
    }

    /// Index of the slot under the cursor.
    #[inline(always)]
    pub fn offset(&self) -> usize {
        (self.ptr.as_ptr() as usize - self.base.as_ptr() as usize) / size_of::<T>()
    }

    /// Iterates `[self, end)`.
    ///
    /// `None` if `end` belongs to another vector or comes before `self`.
    pub fn until(self, end: Cursor<'a, T>) -> Option<Iter<'a, T>> {
        if self.base != end.base || self.ptr > end.ptr {
            return None
        }
        Some(unsafe { Iter::new(self.ptr, end.ptr) })
    }
}

unsafe impl<'a, T: Sync> Send for Cursor<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Cursor<'a, T> {}

impl<'a, T> Clone for Cursor<'a, T> {

    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> PartialEq for Cursor<'a, T> {

    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T> fmt::Debug for Cursor<'a, T> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("at_end", &(self.ptr == self.end))
            .finish()
    }
}
