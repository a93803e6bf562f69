use std::cmp::Ordering;

use bytemuck::Pod;

use crate::Word;

/// Runs a comparator over record bytes on records of `WordT` words.
#[inline(always)]
pub(crate) fn over_words<WordT: Word>(
    compare: &impl Fn(&[u8], &[u8]) -> Ordering,
) -> impl Fn(&[WordT], &[WordT]) -> Ordering + '_ {
    move |lhs: &[WordT], rhs: &[WordT]| compare(bytemuck::cast_slice(lhs), bytemuck::cast_slice(rhs))
}

/// Runs a comparator over values on their record bytes. The bytes must be
/// aligned for `ValueT`, which holds for records inside a `[ValueT]`.
#[inline(always)]
pub(crate) fn over_bytes<ValueT: Pod>(
    compare: &impl Fn(&ValueT, &ValueT) -> Ordering,
) -> impl Fn(&[u8], &[u8]) -> Ordering + '_ {
    move |lhs: &[u8], rhs: &[u8]| compare(bytemuck::from_bytes(lhs), bytemuck::from_bytes(rhs))
}
