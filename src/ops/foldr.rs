//! The ordinary right fold: a constant motive that ignores the index.

use core::marker::PhantomData;
use core::ops::Add;

use crate::core::fold::{dfold, Step};
use crate::core::motive::Const;
use crate::core::nat::Nat;
use crate::core::vect::Vect;

/// Returns `f(x, acc)` at every step, whatever the index.
pub struct FoldrStep<F, A> {
    f: F,
    _acc: PhantomData<fn() -> A>,
}

impl<F, A> FoldrStep<F, A> {
    pub const fn new(f: F) -> Self {
        Self { f, _acc: PhantomData }
    }
}

impl<T, A, F> Step<T> for FoldrStep<F, A>
where
    F: FnMut(T, A) -> A,
{
    type Motive = Const<A>;

    #[inline(always)]
    fn step<L: Nat>(&mut self, x: T, acc: A) -> A {
        (self.f)(x, acc)
    }
}

/// `f(x0, f(x1, ... f(xn, base)))`.
#[inline]
pub fn foldr<T, A, N, F>(f: F, base: A, xs: Vect<T, N>) -> A
where
    N: Nat,
    F: FnMut(T, A) -> A,
{
    dfold(FoldrStep::new(f), base, xs)
}

/// Sum with `T::default()` as the additive identity.
#[inline]
pub fn sum<T, N>(xs: Vect<T, N>) -> T
where
    N: Nat,
    T: Add<Output = T> + Default,
{
    foldr(|x, acc| x + acc, T::default(), xs)
}

impl<T, N: Nat> Vect<T, N> {
    #[inline]
    pub fn foldr<A, F>(self, base: A, f: F) -> A
    where
        F: FnMut(T, A) -> A,
    {
        foldr(f, base, self)
    }

    #[inline]
    pub fn sum(self) -> T
    where
        T: Add<Output = T> + Default,
    {
        sum(self)
    }
}
