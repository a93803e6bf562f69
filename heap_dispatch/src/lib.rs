//! Heap operations over buffers whose record size is only known at run time.
//!
//! Each call picks the widest word (8, 4 or 1 bytes) that divides the record
//! size and that the buffer is aligned for, views the caller's bytes as
//! words of that width without copying, and runs the `heap_core` operation
//! with the matching stride. Length changes land on the caller's own buffer.

mod buffer;
mod compare;
mod dispatch;
mod error;
pub mod typed;
mod width;

pub use buffer::{GrowableRecordBuffer, RawRecords, RawRecordsMut, RecordBuffer};
pub use dispatch::{another, first_violation, fix, heapify, is_heap, push, remove, word_layout};
pub use error::DispatchError;
pub use heap_core::{ErrorKind, HeapError, HeapifyTarget, Stride};
pub use width::{Word, WordLayout, WordWidth};
