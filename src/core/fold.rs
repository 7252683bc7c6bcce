//! The dependent fold.

use super::motive::{At, Motive};
use super::nat::{Nat, S, Z};
use super::vect::Vect;

/// One step of a dependent fold.
///
/// `step::<L>` consumes one element and the accumulator after `L` steps and
/// returns the accumulator after `L + 1`. It must work for every `L`, which
/// is why it is a generic method and not a closure. `L::VALUE` is the step
/// index: 0 for the last element, `N - 1` for the head.
pub trait Step<T> {
    type Motive: Motive;

    fn step<L: Nat>(&mut self, x: T, acc: At<Self::Motive, L>) -> At<Self::Motive, S<L>>;
}

impl<T, F: Step<T> + ?Sized> Step<T> for &mut F {
    type Motive = F::Motive;

    #[inline(always)]
    fn step<L: Nat>(&mut self, x: T, acc: At<Self::Motive, L>) -> At<Self::Motive, S<L>> {
        (**self).step::<L>(x, acc)
    }
}

/// Fold `xs` from the right.
///
/// Empty input returns `base`. Otherwise the tail is folded first and the
/// head is combined last:
/// `dfold(step, base, [x0, x1, x2])` is
/// `step::<N2>(x0, step::<N1>(x1, step::<N0>(x2, base)))`.
///
/// The motive comes from `F::Motive`; `base` is typed for step 0 and the
/// result for step `N`.
#[inline]
pub fn dfold<T, N, F>(mut step: F, base: At<F::Motive, Z>, xs: Vect<T, N>) -> At<F::Motive, N>
where
    N: Nat,
    F: Step<T>,
{
    N::dfold(xs.into_repr(), &mut step, base)
}
