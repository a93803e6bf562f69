use heap_core::Stride;

use crate::DispatchError;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WordWidth {
    Byte,
    Dword,
    Qword,
}

impl WordWidth {
    const WIDEST_FIRST: [WordWidth; 3] = [WordWidth::Qword, WordWidth::Dword, WordWidth::Byte];

    #[inline(always)]
    pub fn bytes(self) -> usize {
        match self {
            WordWidth::Byte => 1,
            WordWidth::Dword => 4,
            WordWidth::Qword => 8,
        }
    }

    #[inline(always)]
    pub fn alignment(self) -> usize {
        match self {
            WordWidth::Byte => std::mem::align_of::<u8>(),
            WordWidth::Dword => std::mem::align_of::<u32>(),
            WordWidth::Qword => std::mem::align_of::<u64>(),
        }
    }

    /// Picks the widest word that divides `element_size` evenly and that a
    /// buffer starting at `address` is aligned for. Wider words mean fewer
    /// word swaps per record swap. Bytes always qualify.
    pub fn select(element_size: usize, address: usize) -> Result<WordLayout, DispatchError> {
        let bytes = Stride::new(element_size).ok_or(DispatchError::ZeroSizedElement)?;
        let layout = Self::WIDEST_FIRST
            .into_iter()
            .find_map(|width| {
                let (words, rest) = num::integer::div_rem(element_size, width.bytes());
                if rest != 0 || address % width.alignment() != 0 {
                    return None;
                }
                Stride::new(words).map(|stride| WordLayout { width, stride })
            })
            .unwrap_or(WordLayout {
                width: WordWidth::Byte,
                stride: bytes,
            });
        return Ok(layout);
    }
}

impl std::fmt::Display for WordWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit words", self.bytes() * 8)
    }
}

/// The word width and stride a call runs with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WordLayout {
    pub width: WordWidth,
    pub stride: Stride,
}

impl WordLayout {
    #[inline(always)]
    pub fn element_size(&self) -> usize {
        self.width.bytes() * self.stride.words()
    }
}

/// A storage word the heap can be run over.
pub trait Word: bytemuck::Pod + std::fmt::Debug {
    const WIDTH: WordWidth;
}

impl Word for u8 {
    const WIDTH: WordWidth = WordWidth::Byte;
}

impl Word for u32 {
    const WIDTH: WordWidth = WordWidth::Dword;
}

impl Word for u64 {
    const WIDTH: WordWidth = WordWidth::Qword;
}
