use core::{
    ptr::NonNull,
    marker::PhantomData,
    mem::size_of,
};

pub struct Shared;
pub struct Unique;

/// Walks the half-open pointer range `[ptr, end)`.
pub struct IterBase<'a, T, Access> {
    ptr: NonNull<T>,
    end: NonNull<T>,
    _markers: PhantomData<(&'a T, Access)>,
}

impl<'a, T, Access> IterBase<'a, T, Access> {

    /// # Safety
    /// `ptr..end` must cover initialized elements of one allocation that
    /// outlives `'a`, and `end` must not precede `ptr`.
    #[inline(always)]
    pub(crate) unsafe fn new(ptr: NonNull<T>, end: NonNull<T>) -> Self {
        Self {
            ptr,
            end,
            _markers: PhantomData,
        }
    }

    #[inline(always)]
    fn remaining(&self) -> usize {
        (self.end.as_ptr() as usize - self.ptr.as_ptr() as usize) / size_of::<T>()
    }
}

pub type Iter<'a, T> = IterBase<'a, T, Shared>;
pub type IterMut<'a, T> = IterBase<'a, T, Unique>;

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}
unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}
unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {

    fn clone(&self) -> Self {
        Self {
            ptr: self.ptr,
            end: self.end,
            _markers: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {

    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            let item = unsafe { self.ptr.as_ref() };
            self.ptr = unsafe { self.ptr.add(1) };
            Some(item)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {

    fn next_back(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            self.end = unsafe { self.end.sub(1) };
            Some(unsafe { self.end.as_ref() })
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {

    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            let item = unsafe { self.ptr.as_mut() };
            self.ptr = unsafe { self.ptr.add(1) };
            Some(item)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {

    fn next_back(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            self.end = unsafe { self.end.sub(1) };
            Some(unsafe { self.end.as_mut() })
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}
