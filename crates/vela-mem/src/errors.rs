/// Failure of an operation that has to grow the buffer.
///
/// The container is left exactly as it was before the failing call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocationError {
    /// The requested capacity (in elements or in bytes) can't be represented.
    Overflow,
    /// The allocator could not provide the requested block.
    OutOfMemory,
}

impl core::fmt::Display for AllocationError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Overflow => {
                write!(f, "capacity overflow")
            },
            Self::OutOfMemory => {
                write!(f, "allocator is out of memory")
            },
        }
    }
}

impl core::error::Error for AllocationError {}

/// An index at or past the number of live elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsError {
    OutOfBounds {
        index: usize,
        len: usize,
    },
}

impl core::fmt::Display for BoundsError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {} was out of bounds of len {}", index, len)
            },
        }
    }
}

impl core::error::Error for BoundsError {}
