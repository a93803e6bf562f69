use bytemuck::PodCastError;
use heap_core::{ErrorKind, HeapError};
use thiserror::Error;

use crate::WordWidth;

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Heap(#[from] HeapError),

    #[error("records must be at least one byte long")]
    ZeroSizedElement,

    #[error("record is {actual} bytes but the buffer holds {expected}-byte records")]
    RecordSizeMismatch { expected: usize, actual: usize },

    #[error("cannot view the buffer as {width}: {cause:?}")]
    Reinterpret {
        width: WordWidth,
        cause: PodCastError,
    },
}

impl DispatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::Heap(error) => error.kind(),
            DispatchError::ZeroSizedElement
            | DispatchError::RecordSizeMismatch { .. }
            | DispatchError::Reinterpret { .. } => ErrorKind::Misuse,
        }
    }
}
