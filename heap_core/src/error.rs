use thiserror::Error;

/// Separates calls that broke a precondition from calls asking for
/// something this crate does not implement.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    Misuse,
    Unsupported,
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum HeapError {
    #[error("index {index} is out of range for a heap of {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("record has {actual} words but the stride is {expected}")]
    RecordWidthMismatch { expected: usize, actual: usize },

    #[error("{words} words do not split into records of {stride} words")]
    RaggedBuffer { words: usize, stride: usize },

    #[error("out-of-place heapify is not implemented")]
    OutOfPlaceHeapify,
}

impl HeapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeapError::OutOfPlaceHeapify => ErrorKind::Unsupported,
            HeapError::IndexOutOfRange { .. }
            | HeapError::RecordWidthMismatch { .. }
            | HeapError::RaggedBuffer { .. } => ErrorKind::Misuse,
        }
    }
}
