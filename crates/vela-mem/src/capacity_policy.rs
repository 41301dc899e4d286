/// Decides how far a buffer grows once it has run out of room.
pub trait CapacityPolicy {

    /// New capacity for a buffer of `capacity` slots that needs at least
    /// `additional` more, or `None` if it can't be represented.
    ///
    /// A result below the current length plus `additional` is raised to it
    /// by the vector.
    fn grow(capacity: usize, additional: usize) -> Option<usize>;
}

/// Grows by at least half of the current capacity.
///
/// Keeps the total reallocation cost of `n` pushes linear in `n`.
pub struct Amortized {}

impl CapacityPolicy for Amortized {

    #[inline]
    fn grow(capacity: usize, additional: usize) -> Option<usize> {
        capacity.checked_add(additional.max(capacity / 2))
    }
}

/// Grows by exactly the requested amount.
pub struct Exact {}

impl CapacityPolicy for Exact {

    #[inline]
    fn grow(capacity: usize, additional: usize) -> Option<usize> {
        capacity.checked_add(additional)
    }
}
