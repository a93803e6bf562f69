use super::{HeapError, Stride};

/// Number of whole records in `words`.
pub fn record_count<WordT>(words: &[WordT], stride: Stride) -> Result<usize, HeapError> {
    let width = stride.words();
    if words.len() % width != 0 {
        return Err(HeapError::RaggedBuffer {
            words: words.len(),
            stride: width,
        });
    }
    return Ok(words.len() / width);
}

#[inline(always)]
pub fn record<WordT>(words: &[WordT], stride: Stride, position: usize) -> &[WordT] {
    let width = stride.words();
    let start = position * width;
    &words[start..start + width]
}

/// Exchanges all `stride` words of the records at `a` and `b`.
#[inline(always)]
pub fn swap_records<WordT>(words: &mut [WordT], stride: Stride, a: usize, b: usize) {
    if a == b {
        return;
    }
    let width = stride.words();
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = words.split_at_mut(high * width);
    head[low * width..(low + 1) * width].swap_with_slice(&mut tail[..width]);
}
