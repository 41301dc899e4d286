mod grow_vec;
mod cursor;
mod iter;

pub use grow_vec::{GrowVec, GlobalVec};
pub use cursor::Cursor;
pub use iter::{IterBase, Iter, IterMut, Shared, Unique};
