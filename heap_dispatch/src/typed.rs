//! The dispatched operations for callers holding typed values.
//!
//! The comparator sees whole values; the heap still runs over the widest
//! word that fits `ValueT`.

use std::cmp::Ordering;

use bytemuck::Pod;
use heap_core::HeapifyTarget;

use crate::{DispatchError, compare::over_bytes, dispatch};

pub fn push<ValueT: Pod>(
    compare: impl Fn(&ValueT, &ValueT) -> Ordering,
    heap: &mut Vec<ValueT>,
    value: ValueT,
) -> Result<(), DispatchError> {
    dispatch::push(over_bytes(&compare), heap, bytemuck::bytes_of(&value))
}

pub fn remove<ValueT: Pod>(
    compare: impl Fn(&ValueT, &ValueT) -> Ordering,
    heap: &mut Vec<ValueT>,
    index: usize,
) -> Result<(), DispatchError> {
    dispatch::remove(over_bytes(&compare), heap, index)
}

pub fn fix<ValueT: Pod>(
    compare: impl Fn(&ValueT, &ValueT) -> Ordering,
    heap: &mut [ValueT],
    index: usize,
) -> Result<(), DispatchError> {
    dispatch::fix(over_bytes(&compare), heap, index)
}

pub fn heapify<ValueT: Pod>(
    compare: impl Fn(&ValueT, &ValueT) -> Ordering,
    target: HeapifyTarget<'_, [ValueT]>,
    heap: &mut [ValueT],
) -> Result<(), DispatchError> {
    dispatch::heapify(over_bytes(&compare), target, heap)
}

pub fn another<ValueT: Pod>(
    compare: impl Fn(&ValueT, &ValueT) -> Ordering,
    heap: &mut [ValueT],
) -> Result<(), DispatchError> {
    dispatch::another(over_bytes(&compare), heap)
}

pub fn is_heap<ValueT: Pod>(
    compare: impl Fn(&ValueT, &ValueT) -> Ordering,
    heap: &[ValueT],
) -> Result<bool, DispatchError> {
    dispatch::is_heap(over_bytes(&compare), heap)
}
