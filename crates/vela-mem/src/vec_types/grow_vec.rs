use core::{
    alloc::Layout,
    fmt,
    marker::PhantomData,
    mem::size_of,
    ops::{Index, IndexMut, Deref, DerefMut},
    ptr::{self, NonNull},
    slice,
};

use crate::{
    allocator::Allocator,
    capacity_policy::{CapacityPolicy, Amortized},
    errors::{AllocationError, BoundsError},
    global_alloc::{GlobalAlloc, GLOBAL_ALLOC},
    size_of,
    const_assert,
};

use super::{
    Cursor,
    Iter,
    IterMut,
};

use AllocationError::{Overflow, OutOfMemory};
use BoundsError::OutOfBounds;

/// Growable, contiguous array of `T` backed by `Alloc`.
///
/// Slots `[0, len)` are live, `[len, capacity)` are uninitialized. A buffer
/// exists iff `capacity > 0`; an empty vector never touches its allocator.
/// Growth is decided by `Pol`, which defaults to [`Amortized`].
///
/// Zero-sized element types are rejected at compile time.
pub struct GrowVec<'alloc, T, Alloc = GlobalAlloc, Pol = Amortized>
    where
        Alloc: Allocator,
        Pol: CapacityPolicy,
{
    data: NonNull<T>,
    capacity: usize,
    len: usize,
    alloc: &'alloc Alloc,
    _markers: PhantomData<(T, Pol)>,
}

pub type GlobalVec<T> = GrowVec<'static, T, GlobalAlloc, Amortized>;

const_assert!(size_of!(GlobalVec<u32>) == size_of!(Option<GlobalVec<u32>>));

unsafe impl<'alloc, T, Alloc, Pol> Send for GrowVec<'alloc, T, Alloc, Pol>
    where
        T: Send,
        Alloc: Allocator + Sync,
        Pol: CapacityPolicy,
{}

unsafe impl<'alloc, T, Alloc, Pol> Sync for GrowVec<'alloc, T, Alloc, Pol>
    where
        T: Sync,
        Alloc: Allocator + Sync,
        Pol: CapacityPolicy,
{}

impl<T, Pol: CapacityPolicy> GrowVec<'static, T, GlobalAlloc, Pol> {

    /// Empty vector on the global allocator. Does not allocate.
    #[inline(always)]
    pub fn new() -> Self {
        Self::new_in(&GLOBAL_ALLOC)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        Self::with_capacity_in(capacity, &GLOBAL_ALLOC)
    }
}

impl<T, Pol: CapacityPolicy> Default for GrowVec<'static, T, GlobalAlloc, Pol> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<'alloc, T, Alloc, Pol> GrowVec<'alloc, T, Alloc, Pol>
    where
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    const NOT_ZERO_SIZED: () = assert!(
        size_of::<T>() != 0,
        "zero-sized element types are not supported",
    );

    /// Empty vector that will allocate from `alloc` once it grows.
    #[inline(always)]
    pub fn new_in(alloc: &'alloc Alloc) -> Self {
        let () = Self::NOT_ZERO_SIZED;
        Self {
            data: NonNull::dangling(),
            capacity: 0,
            len: 0,
            alloc,
            _markers: PhantomData,
        }
    }

    pub fn with_capacity_in(
        capacity: usize,
        alloc: &'alloc Alloc,
    ) -> Result<Self, AllocationError>
    {
        let mut vec = Self::new_in(alloc);
        vec.reserve(capacity)?;
        Ok(vec)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn allocator(&self) -> &'alloc Alloc {
        self.alloc
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    /// Makes room for at least `additional` more elements.
    ///
    /// Does nothing when `additional` is zero or when the current capacity
    /// already exceeds `len + additional`. Otherwise the capacity policy picks
    /// the new capacity and the buffer is reallocated with the live elements
    /// kept at their offsets.
    ///
    /// # Errors
    /// [`Overflow`] if the new capacity, or its size in bytes, can't be
    /// represented. [`OutOfMemory`] if the allocator refuses the block. In both
    /// cases the vector is unchanged.
    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocationError> {
        if additional == 0 {
            return Ok(())
        }
        let required = self.len.checked_add(additional).ok_or(Overflow)?;
        if self.capacity > required {
            return Ok(())
        }
        // never below `required`, whatever the policy returns
        let new_capacity = Pol::grow(self.capacity, additional)
            .ok_or(Overflow)?
            .max(required);
        let new_layout = Layout::array::<T>(new_capacity).map_err(|_| Overflow)?;
        let data =
            if self.capacity == 0 {
                unsafe { self.alloc.allocate_raw(new_layout.size(), new_layout.align()) }
            }
            else {
                // fits, the current capacity was laid out the same way
                let old_size = self.capacity * size_of::<T>();
                unsafe { self.alloc.reallocate_raw(
                    self.data.cast(),
                    old_size,
                    new_layout.size(),
                    new_layout.align(),
                )}
            };
        let data = data.ok_or(OutOfMemory)?;
        self.data = data.cast();
        self.capacity = new_capacity;
        debug_assert!(self.len <= self.capacity);
        Ok(())
    }

    /// Drops every live element. The buffer and capacity are kept.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.data.as_ptr(), len));
        }
    }

    /// Appends `value`, growing the buffer if needed.
    ///
    /// On failure the vector is unchanged and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<(), AllocationError> {
        self.reserve(1)?;
        unsafe { self.data.add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Drops the last element.
    pub fn pop(&mut self) -> Result<(), BoundsError> {
        if self.len == 0 {
            return Err(OutOfBounds { index: 0, len: 0 })
        }
        self.len -= 1;
        unsafe { self.data.add(self.len).drop_in_place() };
        Ok(())
    }

    /// Replaces the element at `index`, dropping the old one.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), BoundsError> {
        self.check_index(index)?;
        unsafe { *self.data.add(index).as_ptr() = value };
        Ok(())
    }

    /// Clone of the element at `index`.
    pub fn get(&self, index: usize) -> Result<T, BoundsError>
        where
            T: Clone
    {
        self.check_index(index)?;
        Ok(unsafe { self.data.add(index).as_ref() }.clone())
    }

    /// Cursor at the first element, equal to [`end`](Self::end) when empty.
    #[inline(always)]
    pub fn begin(&self) -> Cursor<'_, T> {
        unsafe { Cursor::new(self.data, self.data, self.end_ptr()) }
    }

    /// Cursor one past the last live element.
    #[inline(always)]
    pub fn end(&self) -> Cursor<'_, T> {
        let end = self.end_ptr();
        unsafe { Cursor::new(end, self.data, end) }
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            None
        }
        else {
            unsafe { Some(self.data.add(self.len - 1).as_ref()) }
        }
    }

    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        }
        else {
            unsafe { Some(self.data.add(self.len - 1).as_mut()) }
        }
    }

    pub fn contains(&self, value: &T) -> bool
        where
            T: PartialEq
    {
        self.iter().any(|v| v == value)
    }

    /// Appends clones of `values` after a single up-front reservation.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), AllocationError>
        where
            T: Clone
    {
        self.reserve(values.len())?;
        for value in values {
            unsafe { self.data.add(self.len).write(value.clone()) };
            self.len += 1;
        }
        Ok(())
    }

    /// Copy of the live elements in a new buffer from the same allocator.
    pub fn try_clone(&self) -> Result<Self, AllocationError>
        where
            T: Clone
    {
        let mut vec = Self::new_in(self.alloc);
        vec.extend_from_slice(self.as_slice())?;
        Ok(vec)
    }

    /// Drops the live elements and hands the buffer back to the allocator.
    ///
    /// The vector is left empty with no allocation and may be reused.
    pub fn destroy(&mut self) {
        self.clear();
        if self.capacity != 0 {
            unsafe { self.alloc.free_uninit(self.data, self.capacity) };
        }
        self.capacity = 0;
        self.data = NonNull::dangling();
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T> {
        unsafe { Iter::new(self.data, self.end_ptr()) }
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        unsafe { IterMut::new(self.data, self.end_ptr()) }
    }

    #[inline(always)]
    fn end_ptr(&self) -> NonNull<T> {
        unsafe { self.data.add(self.len) }
    }

    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<(), BoundsError> {
        if index >= self.len {
            return Err(OutOfBounds { index, len: self.len })
        }
        Ok(())
    }
}

impl<'alloc, T, Alloc, Pol> Drop for GrowVec<'alloc, T, Alloc, Pol>
    where
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    #[inline(always)]
    fn drop(&mut self) {
        self.destroy()
    }
}

impl<'alloc, T, Alloc, Pol> Index<usize> for GrowVec<'alloc, T, Alloc, Pol>
    where
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_ref() }
    }
}

impl<'alloc, T, Alloc, Pol> IndexMut<usize> for GrowVec<'alloc, T, Alloc, Pol>
    where
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_mut() }
    }
}

impl<'alloc, T, Alloc, Pol> AsRef<[T]> for GrowVec<'alloc, T, Alloc, Pol>
    where
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'alloc, T, Alloc, Pol> AsMut<[T]> for GrowVec<'alloc, T, Alloc, Pol>
    where
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'alloc, T, Alloc, Pol> Deref for GrowVec<'alloc, T, Alloc, Pol>
    where
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<'alloc, T, Alloc, Pol> DerefMut for GrowVec<'alloc, T, Alloc, Pol>
    where
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'vec, 'alloc, T, Alloc, Pol> IntoIterator for &'vec GrowVec<'alloc, T, Alloc, Pol>
    where
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    type Item = &'vec T;
    type IntoIter = Iter<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'vec, 'alloc, T, Alloc, Pol> IntoIterator for &'vec mut GrowVec<'alloc, T, Alloc, Pol>
    where
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    type Item = &'vec mut T;
    type IntoIter = IterMut<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'alloc, T, Alloc, Pol> fmt::Debug for GrowVec<'alloc, T, Alloc, Pol>
    where
        T: fmt::Debug,
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, 'b, T, AllocA, PolA, AllocB, PolB> PartialEq<GrowVec<'b, T, AllocB, PolB>>
    for GrowVec<'a, T, AllocA, PolA>
    where
        T: PartialEq,
        AllocA: Allocator,
        PolA: CapacityPolicy,
        AllocB: Allocator,
        PolB: CapacityPolicy,
{

    #[inline(always)]
    fn eq(&self, other: &GrowVec<'b, T, AllocB, PolB>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'alloc, T, Alloc, Pol> Eq for GrowVec<'alloc, T, Alloc, Pol>
    where
        T: Eq,
        Alloc: Allocator,
        Pol: CapacityPolicy,
{}

impl<'alloc, T, Alloc, Pol> PartialEq<[T]> for GrowVec<'alloc, T, Alloc, Pol>
    where
        T: PartialEq,
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    #[inline(always)]
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<'alloc, T, Alloc, Pol, const N: usize> PartialEq<[T; N]> for GrowVec<'alloc, T, Alloc, Pol>
    where
        T: PartialEq,
        Alloc: Allocator,
        Pol: CapacityPolicy,
{

    #[inline(always)]
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::capacity_policy::Exact;

    #[derive(Default)]
    struct CountingAlloc {
        allocations: Cell<usize>,
        reallocations: Cell<usize>,
        frees: Cell<usize>,
        fail: Cell<bool>,
    }

    impl CountingAlloc {

        fn growths(&self) -> usize {
            self.allocations.get() + self.reallocations.get()
        }
    }

    impl Allocator for CountingAlloc {

        unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
            if self.fail.get() {
                return None
            }
            self.allocations.set(self.allocations.get() + 1);
            unsafe { GLOBAL_ALLOC.allocate_raw(size, align) }
        }

        unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize) {
            self.frees.set(self.frees.get() + 1);
            unsafe { GLOBAL_ALLOC.free_raw(ptr, size, align) }
        }

        unsafe fn reallocate_raw(
            &self,
            ptr: NonNull<u8>,
            old_size: usize,
            new_size: usize,
            align: usize,
        ) -> Option<NonNull<u8>>
        {
            if self.fail.get() {
                return None
            }
            self.reallocations.set(self.reallocations.get() + 1);
            unsafe { GLOBAL_ALLOC.reallocate_raw(ptr, old_size, new_size, align) }
        }
    }

    struct DropCounter<'a>(&'a Cell<usize>);

    impl Drop for DropCounter<'_> {

        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn new_does_not_allocate() {
        let alloc = CountingAlloc::default();
        let vec: GrowVec<'_, u32, CountingAlloc> = GrowVec::new_in(&alloc);
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
        assert!(vec.is_empty());
        drop(vec);
        assert_eq!(alloc.growths(), 0);
        assert_eq!(alloc.frees.get(), 0);
    }

    #[test]
    fn reserve_zero_is_noop() {
        let alloc = CountingAlloc::default();
        let mut vec: GrowVec<'_, u32, CountingAlloc> = GrowVec::new_in(&alloc);
        assert_eq!(vec.reserve(0), Ok(()));
        assert_eq!(vec.capacity(), 0);
        assert_eq!(alloc.growths(), 0);
    }

    #[test]
    fn reserve_uses_larger_of_request_and_half_capacity() {
        let mut vec: GlobalVec<u32> = GlobalVec::new();
        vec.reserve(10).unwrap();
        assert_eq!(vec.capacity(), 10);
        for i in 0..10 {
            vec.push(i).unwrap();
        }
        // the last push found capacity == len + 1 and grew by half
        assert_eq!(vec.capacity(), 15);
        vec.reserve(20).unwrap();
        assert_eq!(vec.capacity(), 35);
    }

    #[test]
    fn reserve_skips_when_capacity_exceeds_request() {
        let alloc = CountingAlloc::default();
        let mut vec: GrowVec<'_, u32, CountingAlloc> = GrowVec::with_capacity_in(8, &alloc).unwrap();
        vec.push(1).unwrap();
        assert_eq!(alloc.growths(), 1);
        vec.reserve(6).unwrap();
        assert_eq!(alloc.growths(), 1);
        assert_eq!(vec.capacity(), 8);
    }

    #[test]
    fn reserve_overflow_on_len() {
        let alloc = CountingAlloc::default();
        let mut vec: GrowVec<'_, u32, CountingAlloc> = GrowVec::new_in(&alloc);
        vec.push(7).unwrap();
        let growths = alloc.growths();
        assert_eq!(vec.reserve(usize::MAX), Err(AllocationError::Overflow));
        assert_eq!(alloc.growths(), growths);
        assert_eq!(vec.as_slice(), &[7]);
    }

    #[test]
    fn reserve_overflow_on_bytes() {
        let alloc = CountingAlloc::default();
        let mut vec: GrowVec<'_, u64, CountingAlloc> = GrowVec::new_in(&alloc);
        assert_eq!(vec.reserve(usize::MAX), Err(AllocationError::Overflow));
        assert_eq!(vec.reserve(isize::MAX as usize / 8 + 1), Err(AllocationError::Overflow));
        assert_eq!(vec.capacity(), 0);
        assert_eq!(alloc.growths(), 0);
    }

    #[test]
    fn failed_growth_leaves_vector_intact() {
        let alloc = CountingAlloc::default();
        let mut vec: GrowVec<'_, u32, CountingAlloc> = GrowVec::new_in(&alloc);
        for i in 0..5 {
            vec.push(i).unwrap();
        }
        let capacity = vec.capacity();
        alloc.fail.set(true);
        assert_eq!(vec.reserve(100), Err(AllocationError::OutOfMemory));
        assert_eq!(vec.capacity(), capacity);
        assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4]);
        alloc.fail.set(false);
        vec.reserve(100).unwrap();
        assert!(vec.capacity() >= 105);
        assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn failed_push_on_empty_vector() {
        let alloc = CountingAlloc::default();
        let mut vec: GrowVec<'_, u32, CountingAlloc> = GrowVec::new_in(&alloc);
        alloc.fail.set(true);
        assert_eq!(vec.push(1), Err(AllocationError::OutOfMemory));
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
        assert!(vec.begin() == vec.end());
    }

    #[test]
    fn amortized_growth_is_logarithmic() {
        let alloc = CountingAlloc::default();
        let mut vec: GrowVec<'_, usize, CountingAlloc> = GrowVec::new_in(&alloc);
        let mut last_capacity = 0;
        for i in 0..10_000 {
            vec.push(i).unwrap();
            let capacity = vec.capacity();
            if capacity != last_capacity {
                assert!(capacity >= last_capacity + last_capacity / 2);
                last_capacity = capacity;
            }
        }
        assert!(alloc.growths() <= 3 * 14, "{} growths", alloc.growths());
        assert_eq!(alloc.allocations.get(), 1);
    }

    #[test]
    fn exact_policy_grows_by_request() {
        let mut vec: GrowVec<'_, u8, GlobalAlloc, Exact> = GrowVec::new();
        for i in 0..4 {
            vec.push(i).unwrap();
            assert_eq!(vec.capacity(), i as usize + 1);
        }
    }

    #[test]
    fn pop_and_set_drop_elements() {
        let drops = Cell::new(0);
        let mut vec: GlobalVec<DropCounter<'_>> = GlobalVec::new();
        for _ in 0..4 {
            vec.push(DropCounter(&drops)).unwrap();
        }
        vec.pop().unwrap();
        assert_eq!(drops.get(), 1);
        vec.set(0, DropCounter(&drops)).unwrap();
        assert_eq!(drops.get(), 2);
        assert!(vec.set(3, DropCounter(&drops)).is_err());
        assert_eq!(drops.get(), 3);
        vec.clear();
        assert_eq!(drops.get(), 6);
        assert!(vec.capacity() > 0);
        vec.push(DropCounter(&drops)).unwrap();
        drop(vec);
        assert_eq!(drops.get(), 7);
    }

    #[test]
    fn destroy_frees_and_allows_reuse() {
        let alloc = CountingAlloc::default();
        let mut vec: GrowVec<'_, u32, CountingAlloc> = GrowVec::new_in(&alloc);
        vec.extend_from_slice(&[1, 2, 3]).unwrap();
        vec.destroy();
        assert_eq!(alloc.frees.get(), 1);
        assert_eq!((vec.len(), vec.capacity()), (0, 0));
        vec.destroy();
        assert_eq!(alloc.frees.get(), 1);
        vec.push(4).unwrap();
        assert_eq!(vec.as_slice(), &[4]);
        drop(vec);
        assert_eq!(alloc.frees.get(), 2);
    }

    #[test]
    fn get_and_set_bounds() {
        let mut vec: GlobalVec<u8> = GlobalVec::new();
        assert_eq!(vec.get(0), Err(BoundsError::OutOfBounds { index: 0, len: 0 }));
        vec.push(5).unwrap();
        assert_eq!(vec.get(0), Ok(5));
        assert_eq!(vec.set(1, 9), Err(BoundsError::OutOfBounds { index: 1, len: 1 }));
        assert_eq!(vec.pop(), Ok(()));
        assert_eq!(vec.pop(), Err(BoundsError::OutOfBounds { index: 0, len: 0 }));
    }

    #[test]
    fn cursor_walk() {
        let mut vec: GlobalVec<i32> = GlobalVec::new();
        vec.extend_from_slice(&[3, 1, 4]).unwrap();
        let mut cursor = vec.begin();
        let mut seen = std::vec::Vec::new();
        while cursor != vec.end() {
            seen.push(*cursor.get().unwrap());
            cursor = cursor.advance();
        }
        assert_eq!(seen, [3, 1, 4]);
        assert_eq!(cursor.offset(), 3);
        assert!(cursor.get().is_none());
        assert_eq!(cursor.advance(), vec.end());
        let tail: std::vec::Vec<_> = vec.begin()
            .advance()
            .until(vec.end())
            .unwrap()
            .copied()
            .collect();
        assert_eq!(tail, [1, 4]);
        assert!(vec.end().until(vec.begin()).is_none());
        let other: GlobalVec<i32> = GlobalVec::new();
        assert!(vec.begin().until(other.end()).is_none());
    }

    struct Stuck;

    impl crate::CapacityPolicy for Stuck {

        fn grow(_capacity: usize, _additional: usize) -> Option<usize> {
            Some(1)
        }
    }

    #[test]
    fn undersized_policy_is_raised_to_required() {
        let mut vec: GrowVec<'static, u32, GlobalAlloc, Stuck> = GrowVec::new();
        for value in 0..8 {
            vec.push(value).unwrap();
            assert!(vec.len() <= vec.capacity());
        }
        assert_eq!(vec, [0, 1, 2, 3, 4, 5, 6, 7]);
        vec.reserve(20).unwrap();
        assert!(vec.capacity() >= vec.len() + 20);
    }

    #[test]
    fn iterators_are_double_ended() {
        let mut vec: GlobalVec<i32> = GlobalVec::new();
        vec.extend_from_slice(&[1, 2, 3, 4]).unwrap();
        let mut iter = vec.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        for value in &mut vec {
            *value *= 10;
        }
        assert_eq!(vec, [10, 20, 30, 40]);
        assert_eq!(vec.back(), Some(&40));
        assert!(vec.contains(&30));
    }

    #[test]
    fn try_clone_copies_into_new_buffer() {
        let mut vec: GlobalVec<i32> = GlobalVec::new();
        vec.extend_from_slice(&[1, 2]).unwrap();
        let mut copy = vec.try_clone().unwrap();
        copy.push(3).unwrap();
        assert_eq!(vec, [1, 2]);
        assert_eq!(copy, [1, 2, 3]);
        assert_ne!(vec.as_ptr(), copy.as_ptr());
    }

    #[test]
    fn debug_lists_live_elements() {
        let mut vec: GlobalVec<i32> = GlobalVec::new();
        vec.extend_from_slice(&[1, 2]).unwrap();
        vec.reserve(10).unwrap();
        assert_eq!(std::format!("{:?}", vec), "[1, 2]");
    }
}
