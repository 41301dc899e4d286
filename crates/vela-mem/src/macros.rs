#[macro_export]
macro_rules! const_assert {
    ($check:expr $(,$msg:tt)*) => {
        const _: () = assert!($check $(,$msg)*);
    };
}

#[macro_export]
macro_rules! size_of {
    ($t:ty) => {
        core::mem::size_of::<$t>()
    };
}

/// Builds a [`GlobalVec`](crate::GlobalVec) from a list of elements.
///
/// Evaluates to `Result<GlobalVec<T>, AllocationError>`.
#[macro_export]
macro_rules! global_vec {
    () => {
        Ok::<_, $crate::AllocationError>($crate::GlobalVec::new())
    };
    [$($elem:expr),+ $(,)?] => {
        (|| -> ::core::result::Result<_, $crate::AllocationError> {
            let elems = [$($elem),+];
            let mut vec = $crate::GlobalVec::with_capacity(elems.len())?;
            for elem in elems {
                vec.push(elem)?;
            }
            Ok(vec)
        })()
    };
}
