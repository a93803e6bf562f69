//! The heap operations over a flat word buffer.
//!
//! A heap is a word buffer whose records satisfy
//! `compare(record(parent), record(child)) != Greater` for every parent and
//! child. There is no `pop`: read record 0, then call [`remove`] with index 0.

use std::cmp::Ordering;

use super::{
    HeapError, Stride,
    heap_sort::{down_heap, parent_of, up_heap},
    records::{record, record_count, swap_records},
};

/// Where [`heapify`] writes its result.
pub enum HeapifyTarget<'a, BufferT: ?Sized> {
    InPlace,
    /// A destination distinct from the source. Not implemented; always
    /// rejected with [`HeapError::OutOfPlaceHeapify`].
    Separate(&'a mut BufferT),
}

/// Appends `record` and restores the heap order. O(log n).
pub fn push<WordT: Copy>(
    stride: Stride,
    compare: impl Fn(&[WordT], &[WordT]) -> Ordering,
    heap: &mut Vec<WordT>,
    record: &[WordT],
) -> Result<(), HeapError> {
    let position = record_count(heap, stride)?;
    if record.len() != stride.words() {
        return Err(HeapError::RecordWidthMismatch {
            expected: stride.words(),
            actual: record.len(),
        });
    }
    heap.extend_from_slice(record);
    up_heap(heap, stride, position, compare);
    return Ok(());
}

/// Moves the record at `index` to the last slot and restores the heap order
/// over the records before it. Returns the new record count; the removed
/// record is left just past it.
pub fn remove_within<WordT>(
    stride: Stride,
    compare: impl Fn(&[WordT], &[WordT]) -> Ordering,
    heap: &mut [WordT],
    index: usize,
) -> Result<usize, HeapError> {
    let len = record_count(heap, stride)?;
    if index >= len {
        return Err(HeapError::IndexOutOfRange { index, len });
    }
    let last = len - 1;
    if index != last {
        swap_records(heap, stride, index, last);
        down_heap(heap, stride, index, last, &compare);
        if index != 0 {
            up_heap(heap, stride, index, &compare);
        }
    }
    return Ok(last);
}

/// Removes the record at `index`. O(log n).
pub fn remove<WordT>(
    stride: Stride,
    compare: impl Fn(&[WordT], &[WordT]) -> Ordering,
    heap: &mut Vec<WordT>,
    index: usize,
) -> Result<(), HeapError> {
    let len = remove_within(stride, compare, heap, index)?;
    heap.truncate(len * stride.words());
    return Ok(());
}

/// Restores the heap order after the record at `index` changed in place.
/// Same result as `remove` followed by `push` of the new value, but cheaper.
pub fn fix<WordT>(
    stride: Stride,
    compare: impl Fn(&[WordT], &[WordT]) -> Ordering,
    heap: &mut [WordT],
    index: usize,
) -> Result<(), HeapError> {
    let len = record_count(heap, stride)?;
    if index >= len {
        return Err(HeapError::IndexOutOfRange { index, len });
    }
    down_heap(heap, stride, index, len, &compare);
    up_heap(heap, stride, index, &compare);
    return Ok(());
}

/// Establishes the heap order over `heap`. O(n), and a no-op on a buffer
/// that already is a heap.
pub fn heapify<WordT>(
    stride: Stride,
    compare: impl Fn(&[WordT], &[WordT]) -> Ordering,
    target: HeapifyTarget<'_, [WordT]>,
    heap: &mut [WordT],
) -> Result<(), HeapError> {
    if let HeapifyTarget::Separate(_) = target {
        return Err(HeapError::OutOfPlaceHeapify);
    }
    let len = record_count(heap, stride)?;
    for position in (0..len / 2).rev() {
        down_heap(heap, stride, position, len, &compare);
    }
    return Ok(());
}

/// Brings the second smallest record to index 1 without touching index 0.
/// Heaps of fewer than three records are left as they are.
pub fn another<WordT>(
    stride: Stride,
    compare: impl Fn(&[WordT], &[WordT]) -> Ordering,
    heap: &mut [WordT],
) -> Result<(), HeapError> {
    let len = record_count(heap, stride)?;
    if len <= 2 || compare(record(heap, stride, 1), record(heap, stride, 2)) != Ordering::Greater {
        return Ok(());
    }
    swap_records(heap, stride, 1, 2);
    down_heap(heap, stride, 2, len, &compare);
    return Ok(());
}

/// The first `(parent, child)` pair, in index order, whose records are out
/// of heap order.
pub fn first_violation<WordT>(
    stride: Stride,
    compare: impl Fn(&[WordT], &[WordT]) -> Ordering,
    heap: &[WordT],
) -> Result<Option<(usize, usize)>, HeapError> {
    let len = record_count(heap, stride)?;
    for child in 1..len {
        let parent = parent_of(child);
        if compare(record(heap, stride, child), record(heap, stride, parent)) == Ordering::Less {
            return Ok(Some((parent, child)));
        }
    }
    return Ok(None);
}

pub fn is_heap<WordT>(
    stride: Stride,
    compare: impl Fn(&[WordT], &[WordT]) -> Ordering,
    heap: &[WordT],
) -> Result<bool, HeapError> {
    first_violation(stride, compare, heap).map(|violation| violation.is_none())
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use super::{
        HeapError, HeapifyTarget, Stride, another, first_violation, fix, heapify, is_heap, push,
        remove,
    };
    use crate::ErrorKind;

    fn by_first(lhs: &[u32], rhs: &[u32]) -> Ordering {
        lhs[0].cmp(&rhs[0])
    }

    fn verify(heap: &[u32], stride: Stride) {
        assert_eq!(
            first_violation(stride, by_first, heap),
            Ok(None),
            "heap invariant invalidated in {:?}",
            heap
        );
    }

    fn push_value(heap: &mut Vec<u32>, value: u32) {
        push(Stride::ONE, by_first, heap, &[value]).unwrap();
    }

    #[test]
    fn test_all_equal() {
        let mut heap = Vec::default();
        for _ in 0..20 {
            push_value(&mut heap, 0);
        }
        heapify(Stride::ONE, by_first, HeapifyTarget::InPlace, &mut heap).unwrap();
        verify(&heap, Stride::ONE);

        while !heap.is_empty() {
            let x = heap[0];
            remove(Stride::ONE, by_first, &mut heap, 0).unwrap();
            verify(&heap, Stride::ONE);
            assert_eq!(x, 0);
        }
    }

    #[test]
    fn test_descending_pushes_pop_sorted() {
        let mut heap = Vec::default();
        for value in (1..=20).rev() {
            push_value(&mut heap, value);
            verify(&heap, Stride::ONE);
        }
        heapify(Stride::ONE, by_first, HeapifyTarget::InPlace, &mut heap).unwrap();
        verify(&heap, Stride::ONE);

        let mut popped = Vec::default();
        while !heap.is_empty() {
            popped.push(heap[0]);
            remove(Stride::ONE, by_first, &mut heap, 0).unwrap();
            verify(&heap, Stride::ONE);
        }
        assert_eq!(popped, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_interleaved_push_and_remove() {
        let mut heap = Vec::default();
        for value in (11..=20).rev() {
            push_value(&mut heap, value);
        }
        heapify(Stride::ONE, by_first, HeapifyTarget::InPlace, &mut heap).unwrap();
        for value in (1..=10).rev() {
            push_value(&mut heap, value);
            verify(&heap, Stride::ONE);
        }

        let mut expected = 1;
        while !heap.is_empty() {
            let x = heap[0];
            remove(Stride::ONE, by_first, &mut heap, 0).unwrap();
            if expected < 20 {
                push_value(&mut heap, 20 + expected);
            }
            verify(&heap, Stride::ONE);
            assert_eq!(x, expected);
            expected += 1;
        }
    }

    #[test]
    fn test_remove_last() {
        let mut heap = Vec::default();
        for value in 0..10 {
            push_value(&mut heap, value);
        }
        verify(&heap, Stride::ONE);

        while !heap.is_empty() {
            let last = heap.len() - 1;
            let x = heap[last];
            remove(Stride::ONE, by_first, &mut heap, last).unwrap();
            assert_eq!(x as usize, last);
            verify(&heap, Stride::ONE);
        }
    }

    #[test]
    fn test_remove_middle() {
        let mut heap = Vec::default();
        for value in 0..10 {
            push_value(&mut heap, value);
        }

        let mut removed = Vec::default();
        while !heap.is_empty() {
            let index = (heap.len() - 1) / 2;
            removed.push(heap[index]);
            remove(Stride::ONE, by_first, &mut heap, index).unwrap();
            verify(&heap, Stride::ONE);
        }
        removed.sort();
        assert_eq!(removed, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut heap = vec![1, 2, 3];
        assert_eq!(
            remove(Stride::ONE, by_first, &mut heap, 3),
            Err(HeapError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(heap, [1, 2, 3]);

        let mut empty: Vec<u32> = Vec::default();
        assert!(remove(Stride::ONE, by_first, &mut empty, 0).is_err());
    }

    #[test]
    fn test_fix() {
        let mut heap = Vec::default();
        for value in (1..=20).rev().map(|i| i * 10) {
            push_value(&mut heap, value);
        }
        verify(&heap, Stride::ONE);
        assert_eq!(heap[0], 10);

        heap[0] = 210;
        fix(Stride::ONE, by_first, &mut heap, 0).unwrap();
        verify(&heap, Stride::ONE);

        let mut rng = SmallRng::seed_from_u64(0x1EE7);
        for i in (1..=100).rev() {
            let index = rng.gen_range(0..heap.len());
            if i & 1 == 0 {
                heap[index] = heap[index].wrapping_mul(2);
            } else {
                heap[index] /= 2;
            }
            fix(Stride::ONE, by_first, &mut heap, index).unwrap();
            verify(&heap, Stride::ONE);
        }

        assert_eq!(
            fix(Stride::ONE, by_first, &mut heap, 20),
            Err(HeapError::IndexOutOfRange { index: 20, len: 20 })
        );
    }

    #[test]
    fn test_another() {
        let mut heap = vec![0, 10, 100, 11, 12, 101, 102];
        verify(&heap, Stride::ONE);
        another(Stride::ONE, by_first, &mut heap).unwrap();
        assert_eq!(heap, [0, 10, 100, 11, 12, 101, 102]);

        let mut heap = vec![0, 100, 10, 101, 102, 11, 12];
        verify(&heap, Stride::ONE);
        another(Stride::ONE, by_first, &mut heap).unwrap();
        assert_eq!(heap[0], 0);
        assert_eq!(heap[1], 10);
        verify(&heap, Stride::ONE);
    }

    #[test]
    fn test_another_small_heaps() {
        let mut heap = vec![0, 5];
        another(Stride::ONE, by_first, &mut heap).unwrap();
        assert_eq!(heap, [0, 5]);

        let mut heap = vec![0, 5, 3];
        another(Stride::ONE, by_first, &mut heap).unwrap();
        assert_eq!(heap, [0, 3, 5]);
    }

    #[test]
    fn test_heapify_out_of_place_is_unsupported() {
        let mut source = vec![3, 2, 1];
        let mut destination = vec![0, 0, 0];
        let error = heapify(
            Stride::ONE,
            by_first,
            HeapifyTarget::Separate(destination.as_mut_slice()),
            &mut source,
        )
        .unwrap_err();
        assert_eq!(error, HeapError::OutOfPlaceHeapify);
        assert_eq!(error.kind(), ErrorKind::Unsupported);
        assert_eq!(source, [3, 2, 1]);
        assert_eq!(destination, [0, 0, 0]);
    }

    #[test]
    fn test_heapify_is_idempotent() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut heap: Vec<u32> = (0..257).map(|_| rng.gen_range(0..64)).collect();
        heapify(Stride::ONE, by_first, HeapifyTarget::InPlace, &mut heap).unwrap();
        verify(&heap, Stride::ONE);

        let once = heap.clone();
        heapify(Stride::ONE, by_first, HeapifyTarget::InPlace, &mut heap).unwrap();
        assert_eq!(heap, once);
    }

    #[test]
    fn test_three_word_records() {
        let stride = Stride::new(3).unwrap();
        let mut heap = Vec::default();
        for key in (1..=20).rev() {
            push(stride, by_first, &mut heap, &[key, key * 10, key * 100]).unwrap();
            verify(&heap, stride);
        }
        for record in heap.chunks(3) {
            assert_eq!(record[1], record[0] * 10);
            assert_eq!(record[2], record[0] * 100);
        }

        let mut popped = Vec::default();
        while !heap.is_empty() {
            popped.push(heap[..3].to_vec());
            remove(stride, by_first, &mut heap, 0).unwrap();
            verify(&heap, stride);
        }
        let expected: Vec<_> = (1..=20).map(|key| vec![key, key * 10, key * 100]).collect();
        assert_eq!(popped, expected);
    }

    #[test]
    fn test_record_width_mismatch() {
        let stride = Stride::new(2).unwrap();
        let mut heap = vec![1, 1];
        assert_eq!(
            push(stride, by_first, &mut heap, &[0]),
            Err(HeapError::RecordWidthMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(heap, [1, 1]);
    }

    #[test]
    fn test_is_heap() {
        assert_eq!(is_heap(Stride::ONE, by_first, &[]), Ok(true));
        assert_eq!(is_heap(Stride::ONE, by_first, &[1, 2, 3]), Ok(true));
        assert_eq!(is_heap(Stride::ONE, by_first, &[2, 1, 3]), Ok(false));
        assert_eq!(
            first_violation(Stride::ONE, by_first, &[1, 2, 3, 4, 0]),
            Ok(Some((1, 4)))
        );
        assert!(is_heap(Stride::new(2).unwrap(), by_first, &[1, 2, 3]).is_err());
    }
}
