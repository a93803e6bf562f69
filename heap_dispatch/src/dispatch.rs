use std::cmp::Ordering;

use heap_core::{HeapError, HeapifyTarget, Stride};
use tracing::{debug, trace};

use crate::{
    DispatchError, GrowableRecordBuffer, RecordBuffer, Word, WordLayout, WordWidth,
    compare::over_words,
};

/// A heap-core call that can run over words of any width.
trait WordOperation {
    type Output;

    fn run<WordT: Word>(
        self,
        stride: Stride,
        words: &mut [WordT],
    ) -> Result<Self::Output, HeapError>;
}

fn view<WordT: Word>(bytes: &mut [u8]) -> Result<&mut [WordT], DispatchError> {
    bytemuck::try_cast_slice_mut(bytes).map_err(|cause| DispatchError::Reinterpret {
        width: WordT::WIDTH,
        cause,
    })
}

fn view_ref<WordT: Word>(bytes: &[u8]) -> Result<&[WordT], DispatchError> {
    bytemuck::try_cast_slice(bytes).map_err(|cause| DispatchError::Reinterpret {
        width: WordT::WIDTH,
        cause,
    })
}

fn run_as_words<OperationT: WordOperation>(
    bytes: &mut [u8],
    layout: WordLayout,
    operation: OperationT,
) -> Result<OperationT::Output, DispatchError> {
    let output = match layout.width {
        WordWidth::Qword => operation.run(layout.stride, view::<u64>(bytes)?)?,
        WordWidth::Dword => operation.run(layout.stride, view::<u32>(bytes)?)?,
        WordWidth::Byte => operation.run(layout.stride, view::<u8>(bytes)?)?,
    };
    return Ok(output);
}

fn dispatching(operation: &'static str, layout: WordLayout, records: usize) {
    trace!(
        operation,
        width = %layout.width,
        stride = layout.stride.words(),
        records,
        "dispatching heap call"
    );
}

fn rejected(operation: &'static str) -> impl Fn(&DispatchError) {
    move |error: &DispatchError| debug!(operation, %error, "heap call rejected")
}

/// Word width and stride `heap` is viewed with at its current address.
///
/// The width depends on where the bytes start as well as on the record
/// size: an empty `Vec<u8>` sits at a dangling, byte-aligned address and
/// reports byte words until it holds records, which a typed `Vec<T>` never
/// does.
pub fn word_layout<BufferT>(heap: &BufferT) -> Result<WordLayout, DispatchError>
where
    BufferT: RecordBuffer + ?Sized,
{
    let element_size = heap.element_size();
    let bytes = heap.as_bytes();
    let layout = WordWidth::select(element_size, bytes.as_ptr() as usize)?;
    if bytes.len() % element_size != 0 {
        return Err(HeapError::RaggedBuffer {
            words: bytes.len(),
            stride: element_size,
        }
        .into());
    }
    return Ok(layout);
}

struct SiftUp<'a, CompareT> {
    compare: &'a CompareT,
    position: usize,
}

impl<CompareT> WordOperation for SiftUp<'_, CompareT>
where
    CompareT: Fn(&[u8], &[u8]) -> Ordering,
{
    type Output = ();

    fn run<WordT: Word>(self, stride: Stride, words: &mut [WordT]) -> Result<(), HeapError> {
        heap_core::up_heap(words, stride, self.position, over_words::<WordT>(self.compare));
        return Ok(());
    }
}

struct RemoveWithin<'a, CompareT> {
    compare: &'a CompareT,
    index: usize,
}

impl<CompareT> WordOperation for RemoveWithin<'_, CompareT>
where
    CompareT: Fn(&[u8], &[u8]) -> Ordering,
{
    type Output = usize;

    fn run<WordT: Word>(self, stride: Stride, words: &mut [WordT]) -> Result<usize, HeapError> {
        heap_core::remove_within(stride, over_words::<WordT>(self.compare), words, self.index)
    }
}

struct Fix<'a, CompareT> {
    compare: &'a CompareT,
    index: usize,
}

impl<CompareT> WordOperation for Fix<'_, CompareT>
where
    CompareT: Fn(&[u8], &[u8]) -> Ordering,
{
    type Output = ();

    fn run<WordT: Word>(self, stride: Stride, words: &mut [WordT]) -> Result<(), HeapError> {
        heap_core::fix(stride, over_words::<WordT>(self.compare), words, self.index)
    }
}

struct Heapify<'a, CompareT> {
    compare: &'a CompareT,
}

impl<CompareT> WordOperation for Heapify<'_, CompareT>
where
    CompareT: Fn(&[u8], &[u8]) -> Ordering,
{
    type Output = ();

    fn run<WordT: Word>(self, stride: Stride, words: &mut [WordT]) -> Result<(), HeapError> {
        heap_core::heapify(
            stride,
            over_words::<WordT>(self.compare),
            HeapifyTarget::InPlace,
            words,
        )
    }
}

struct Another<'a, CompareT> {
    compare: &'a CompareT,
}

impl<CompareT> WordOperation for Another<'_, CompareT>
where
    CompareT: Fn(&[u8], &[u8]) -> Ordering,
{
    type Output = ();

    fn run<WordT: Word>(self, stride: Stride, words: &mut [WordT]) -> Result<(), HeapError> {
        heap_core::another(stride, over_words::<WordT>(self.compare), words)
    }
}

/// Appends `record` to `heap` and restores the heap order.
///
/// Nothing is appended when the call is rejected.
pub fn push<BufferT, CompareT>(
    compare: CompareT,
    heap: &mut BufferT,
    record: &[u8],
) -> Result<(), DispatchError>
where
    BufferT: GrowableRecordBuffer + ?Sized,
    CompareT: Fn(&[u8], &[u8]) -> Ordering,
{
    word_layout(heap).inspect_err(rejected("push"))?;
    let element_size = heap.element_size();
    if record.len() != element_size {
        let error = DispatchError::RecordSizeMismatch {
            expected: element_size,
            actual: record.len(),
        };
        rejected("push")(&error);
        return Err(error);
    }

    let position = heap.len();
    heap.append_record(record);
    // The append may have moved the storage, so the view is chosen afresh.
    let layout = word_layout(heap)?;
    dispatching("push", layout, position + 1);
    run_as_words(
        heap.as_bytes_mut(),
        layout,
        SiftUp {
            compare: &compare,
            position,
        },
    )
}

/// Removes the record at `index`. Read it before calling; there is no pop.
pub fn remove<BufferT, CompareT>(
    compare: CompareT,
    heap: &mut BufferT,
    index: usize,
) -> Result<(), DispatchError>
where
    BufferT: GrowableRecordBuffer + ?Sized,
    CompareT: Fn(&[u8], &[u8]) -> Ordering,
{
    let layout = word_layout(heap).inspect_err(rejected("remove"))?;
    dispatching("remove", layout, heap.len());
    let len = run_as_words(
        heap.as_bytes_mut(),
        layout,
        RemoveWithin {
            compare: &compare,
            index,
        },
    )
    .inspect_err(rejected("remove"))?;
    heap.truncate_records(len);
    return Ok(());
}

pub fn fix<BufferT, CompareT>(
    compare: CompareT,
    heap: &mut BufferT,
    index: usize,
) -> Result<(), DispatchError>
where
    BufferT: RecordBuffer + ?Sized,
    CompareT: Fn(&[u8], &[u8]) -> Ordering,
{
    let layout = word_layout(heap).inspect_err(rejected("fix"))?;
    dispatching("fix", layout, heap.len());
    run_as_words(
        heap.as_bytes_mut(),
        layout,
        Fix {
            compare: &compare,
            index,
        },
    )
    .inspect_err(rejected("fix"))
}

/// Establishes the heap order over `heap` in place. A separate destination
/// is rejected as unsupported and neither buffer is touched.
pub fn heapify<BufferT, CompareT>(
    compare: CompareT,
    target: HeapifyTarget<'_, BufferT>,
    heap: &mut BufferT,
) -> Result<(), DispatchError>
where
    BufferT: RecordBuffer + ?Sized,
    CompareT: Fn(&[u8], &[u8]) -> Ordering,
{
    if let HeapifyTarget::Separate(_) = target {
        let error = DispatchError::from(HeapError::OutOfPlaceHeapify);
        rejected("heapify")(&error);
        return Err(error);
    }
    let layout = word_layout(heap).inspect_err(rejected("heapify"))?;
    dispatching("heapify", layout, heap.len());
    run_as_words(heap.as_bytes_mut(), layout, Heapify { compare: &compare })
        .inspect_err(rejected("heapify"))
}

/// Brings the second smallest record to index 1, leaving index 0 alone.
pub fn another<BufferT, CompareT>(compare: CompareT, heap: &mut BufferT) -> Result<(), DispatchError>
where
    BufferT: RecordBuffer + ?Sized,
    CompareT: Fn(&[u8], &[u8]) -> Ordering,
{
    let layout = word_layout(heap).inspect_err(rejected("another"))?;
    dispatching("another", layout, heap.len());
    run_as_words(heap.as_bytes_mut(), layout, Another { compare: &compare })
        .inspect_err(rejected("another"))
}

pub fn first_violation<BufferT, CompareT>(
    compare: CompareT,
    heap: &BufferT,
) -> Result<Option<(usize, usize)>, DispatchError>
where
    BufferT: RecordBuffer + ?Sized,
    CompareT: Fn(&[u8], &[u8]) -> Ordering,
{
    let layout = word_layout(heap)?;
    let bytes = heap.as_bytes();
    let stride = layout.stride;
    let violation = match layout.width {
        WordWidth::Qword => {
            heap_core::first_violation(stride, over_words::<u64>(&compare), view_ref(bytes)?)?
        }
        WordWidth::Dword => {
            heap_core::first_violation(stride, over_words::<u32>(&compare), view_ref(bytes)?)?
        }
        WordWidth::Byte => {
            heap_core::first_violation(stride, over_words::<u8>(&compare), view_ref(bytes)?)?
        }
    };
    return Ok(violation);
}

pub fn is_heap<BufferT, CompareT>(compare: CompareT, heap: &BufferT) -> Result<bool, DispatchError>
where
    BufferT: RecordBuffer + ?Sized,
    CompareT: Fn(&[u8], &[u8]) -> Ordering,
{
    first_violation(compare, heap).map(|violation| violation.is_none())
}
