//! Reverse. Same motive as map, but each step pushes at the back.

use crate::core::fold::{dfold, Step};
use crate::core::motive::VectOf;
use crate::core::nat::{Nat, S};
use crate::core::vect::Vect;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseStep;

impl<T> Step<T> for ReverseStep {
    type Motive = VectOf<T>;

    #[inline(always)]
    fn step<L: Nat>(&mut self, x: T, acc: Vect<T, L>) -> Vect<T, S<L>> {
        acc.push_back(x)
    }
}

/// Quadratic: every step walks the accumulator.
#[inline]
pub fn reverse<T, N: Nat>(xs: Vect<T, N>) -> Vect<T, N> {
    dfold(ReverseStep, Vect::nil(), xs)
}

impl<T, N: Nat> Vect<T, N> {
    #[inline]
    pub fn reverse(self) -> Vect<T, N> {
        reverse(self)
    }
}
