//! Motives. A motive maps a step index to the type of the accumulator at
//! that step.

use core::marker::PhantomData;

use super::nat::Nat;
use super::vect::Vect;

/// Type-level function from step index to accumulator type.
///
/// `At<Z>` is the type of the base, `At<N>` the type of the result of
/// folding a vector of length `N`. Motives are markers; they are never
/// constructed.
pub trait Motive {
    type At<L: Nat>;
}

/// Accumulator type of motive `M` after `L` steps.
pub type At<M, L> = <M as Motive>::At<L>;

/// Constant motive. Every step has the same type `A`; this is the ordinary
/// fold.
pub struct Const<A>(PhantomData<fn() -> A>);

impl<A> Motive for Const<A> {
    type At<L: Nat> = A;
}

/// After `L` steps the accumulator is a vector of `L` values of `U`.
pub struct VectOf<U>(PhantomData<fn() -> U>);

impl<U> Motive for VectOf<U> {
    type At<L: Nat> = Vect<U, L>;
}

/// After `L` steps the accumulator is a vector of `L + K` values of `T`.
/// The base already holds `K` of them.
pub struct VectPlus<T, K>(PhantomData<fn() -> (T, K)>);

impl<T, K: Nat> Motive for VectPlus<T, K> {
    type At<L: Nat> = Vect<T, L::Plus<K>>;
}
