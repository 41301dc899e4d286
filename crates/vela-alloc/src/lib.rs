mod arena_alloc;

pub use arena_alloc::{ArenaAlloc, ArenaGuard};
