use std::cmp::Ordering;

use super::{
    Stride,
    records::{record, swap_records},
};

#[inline(always)]
pub(crate) fn parent_of(position: usize) -> usize {
    debug_assert!(position != 0);
    return (position - 1) / 2;
}

/// `None` when the index does not fit in `usize`, which is out of bounds
/// for every heap.
#[inline(always)]
fn left_of(position: usize) -> Option<usize> {
    position.checked_mul(2)?.checked_add(1)
}

#[inline(always)]
fn right_of(position: usize) -> Option<usize> {
    left_of(position)?.checked_add(1)
}

/// Moves the record at `position` towards the root while it orders before
/// its parent.
pub fn up_heap<WordT>(
    words: &mut [WordT],
    stride: Stride,
    position: usize,
    compare: impl Fn(&[WordT], &[WordT]) -> Ordering,
) {
    debug_assert!(position < words.len() / stride.words());
    let mut current = position;
    loop {
        if current == 0 {
            break;
        }
        let parent = parent_of(current);
        if compare(
            record(words, stride, current),
            record(words, stride, parent),
        ) == Ordering::Less
        {
            swap_records(words, stride, parent, current);
            current = parent;
        } else {
            break;
        }
    }
}

/// Moves the record at `position` towards the leaves, considering only
/// records below `bound`. On a tie between the two children the right one
/// is taken.
pub fn down_heap<WordT>(
    words: &mut [WordT],
    stride: Stride,
    position: usize,
    bound: usize,
    compare: impl Fn(&[WordT], &[WordT]) -> Ordering,
) {
    debug_assert!(bound <= words.len() / stride.words());
    let mut current = position;
    loop {
        let left = match left_of(current) {
            Some(left) if left < bound => left,
            _ => break,
        };
        let child = match right_of(current) {
            Some(right)
                if right < bound
                    && compare(record(words, stride, left), record(words, stride, right))
                        != Ordering::Less =>
            {
                right
            }
            _ => left,
        };
        if compare(record(words, stride, child), record(words, stride, current)) == Ordering::Less
        {
            swap_records(words, stride, current, child);
            current = child;
        } else {
            break;
        }
    }
}
