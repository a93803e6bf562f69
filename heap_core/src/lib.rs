mod error;
mod heap_sort;
mod operations;
mod records;
mod stride;

pub use error::{ErrorKind, HeapError};
pub use heap_sort::{down_heap, up_heap};
pub use operations::{
    HeapifyTarget, another, first_violation, fix, heapify, is_heap, push, remove, remove_within,
};
pub use records::{record, record_count, swap_records};
pub use stride::Stride;
