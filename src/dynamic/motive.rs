//! Motives checked at runtime.

use alloc::vec::Vec;
use core::fmt::Debug;

/// Describes what the accumulator must look like after `index` steps.
///
/// `expected(index)` and `observed(acc)` are compared after every step; they
/// must agree for the fold to continue.
pub trait RuntimeMotive<A> {
    type Shape: PartialEq + Debug;

    fn expected(&self, index: usize) -> Self::Shape;
    fn observed(&self, acc: &A) -> Self::Shape;
}

/// Constant motive. Every accumulator fits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl<A> RuntimeMotive<A> for Uniform {
    type Shape = ();

    #[inline(always)]
    fn expected(&self, _index: usize) -> Self::Shape {}

    #[inline(always)]
    fn observed(&self, _acc: &A) -> Self::Shape {}
}

/// After `index` steps the accumulator holds `index + offset` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeqLen {
    offset: usize,
}

impl SeqLen {
    pub const fn new(offset: usize) -> Self {
        Self { offset }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl<U> RuntimeMotive<Vec<U>> for SeqLen {
    type Shape = usize;

    #[inline(always)]
    fn expected(&self, index: usize) -> usize {
        index + self.offset
    }

    #[inline(always)]
    fn observed(&self, acc: &Vec<U>) -> usize {
        acc.len()
    }
}
