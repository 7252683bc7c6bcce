//! Append. The second vector is the base, the first one is folded onto it.

use core::marker::PhantomData;

use crate::core::fold::{dfold, Step};
use crate::core::motive::VectPlus;
use crate::core::nat::{Nat, S};
use crate::core::vect::Vect;

/// Prepends elements of the first vector onto a vector that already holds
/// `K` elements.
pub struct AppendStep<K>(PhantomData<fn() -> K>);

impl<K> AppendStep<K> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<K> Default for AppendStep<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Nat> Step<T> for AppendStep<K> {
    type Motive = VectPlus<T, K>;

    #[inline(always)]
    fn step<L: Nat>(&mut self, x: T, acc: Vect<T, L::Plus<K>>) -> Vect<T, S<L::Plus<K>>> {
        acc.prepend(x)
    }
}

/// `xs` followed by `ys`. Length `N + K`.
#[inline]
pub fn append<T, N, K>(xs: Vect<T, N>, ys: Vect<T, K>) -> Vect<T, N::Plus<K>>
where
    N: Nat,
    K: Nat,
{
    dfold(AppendStep::<K>::new(), ys, xs)
}

impl<T, N: Nat> Vect<T, N> {
    #[inline]
    pub fn append<K: Nat>(self, ys: Vect<T, K>) -> Vect<T, N::Plus<K>> {
        append(self, ys)
    }
}
