use std::num::NonZeroUsize;

/// Number of words that make up one record of the heap.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Stride {
    words: NonZeroUsize,
}

impl Stride {
    pub const ONE: Stride = Stride {
        words: NonZeroUsize::MIN,
    };

    #[inline(always)]
    pub fn new(words: usize) -> Option<Self> {
        NonZeroUsize::new(words).map(|words| Self { words })
    }

    #[inline(always)]
    pub fn words(self) -> usize {
        self.words.get()
    }
}

impl Default for Stride {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::fmt::Display for Stride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.words)
    }
}
