//! Type-level naturals. `Z`, `S<N>`, and everything that recurses on length.
//!
//! Every operation that has to walk a vector lives here as a `Nat` method, so
//! the recursion is resolved by trait dispatch on the length type. `Z` is the
//! base case, `S<N>` the inductive one. Nothing here checks a length at
//! runtime; the types already agree.

use core::marker::PhantomData;

use super::fold::Step;
use super::motive::At;
use super::vect::{Cons, Nil};

/// Zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Z;

/// Successor.
pub struct S<N>(PhantomData<N>);

/// A type-level natural number.
///
/// `Repr<T>` is the storage of a vector of this length: `Nil` for `Z`,
/// `Cons<T, N::Repr<T>>` for `S<N>`. The methods are the structural
/// recursions the rest of the crate is built from; call them through
/// [`Vect`](crate::Vect) and [`dfold`](crate::dfold) instead.
pub trait Nat: Sized {
    /// The runtime value of this natural.
    const VALUE: usize;

    /// Storage of exactly `Self::VALUE` elements.
    type Repr<T>;

    /// Type-level addition, recursing on the left operand.
    type Plus<M: Nat>: Nat;

    /// Right fold. Recurse into the tail first, then lift the accumulator
    /// from `At<N>` to `At<S<N>>` with the head.
    #[doc(hidden)]
    fn dfold<T, F>(repr: Self::Repr<T>, step: &mut F, base: At<F::Motive, Z>) -> At<F::Motive, Self>
    where
        F: Step<T>;

    /// Visit elements front to back, stopping at the first error.
    #[doc(hidden)]
    fn try_visit<T, E, F>(repr: &Self::Repr<T>, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>;

    #[doc(hidden)]
    fn get<T>(repr: &Self::Repr<T>, index: usize) -> Option<&T>;

    #[doc(hidden)]
    fn as_refs<T>(repr: &Self::Repr<T>) -> Self::Repr<&T>;

    #[doc(hidden)]
    fn zip<A, B>(left: Self::Repr<A>, right: Self::Repr<B>) -> Self::Repr<(A, B)>;

    /// Append at the far end. The result is one longer.
    #[doc(hidden)]
    fn snoc<T>(repr: Self::Repr<T>, last: T) -> <S<Self> as Nat>::Repr<T>;

    /// Pull exactly `Self::VALUE` items. `None` if the iterator runs dry.
    #[doc(hidden)]
    fn pull<T, I>(iter: &mut I) -> Option<Self::Repr<T>>
    where
        I: Iterator<Item = T>;
}

impl Nat for Z {
    const VALUE: usize = 0;

    type Repr<T> = Nil;

    type Plus<M: Nat> = M;

    #[inline(always)]
    fn dfold<T, F>(_repr: Self::Repr<T>, _step: &mut F, base: At<F::Motive, Z>) -> At<F::Motive, Self>
    where
        F: Step<T>,
    {
        base
    }

    #[inline(always)]
    fn try_visit<T, E, F>(_repr: &Self::Repr<T>, _f: &mut F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        Ok(())
    }

    #[inline(always)]
    fn get<T>(_repr: &Self::Repr<T>, _index: usize) -> Option<&T> {
        None
    }

    #[inline(always)]
    fn as_refs<T>(_repr: &Self::Repr<T>) -> Self::Repr<&T> {
        Nil
    }

    #[inline(always)]
    fn zip<A, B>(_left: Self::Repr<A>, _right: Self::Repr<B>) -> Self::Repr<(A, B)> {
        Nil
    }

    #[inline(always)]
    fn snoc<T>(_repr: Self::Repr<T>, last: T) -> <S<Self> as Nat>::Repr<T> {
        Cons::new(last, Nil)
    }

    #[inline(always)]
    fn pull<T, I>(_iter: &mut I) -> Option<Self::Repr<T>>
    where
        I: Iterator<Item = T>,
    {
        Some(Nil)
    }
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;

    type Repr<T> = Cons<T, N::Repr<T>>;

    type Plus<M: Nat> = S<N::Plus<M>>;

    #[inline(always)]
    fn dfold<T, F>(repr: Self::Repr<T>, step: &mut F, base: At<F::Motive, Z>) -> At<F::Motive, Self>
    where
        F: Step<T>,
    {
        let (head, tail) = repr.into_parts();
        let acc = N::dfold(tail, step, base);

        #[cfg(feature = "tracing")]
        tracing::trace!(index = N::VALUE, "dfold step");

        step.step::<N>(head, acc)
    }

    #[inline(always)]
    fn try_visit<T, E, F>(repr: &Self::Repr<T>, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        f(&repr.head)?;
        N::try_visit(&repr.tail, f)
    }

    #[inline(always)]
    fn get<T>(repr: &Self::Repr<T>, index: usize) -> Option<&T> {
        match index {
            0 => Some(&repr.head),
            i => N::get(&repr.tail, i - 1),
        }
    }

    #[inline(always)]
    fn as_refs<T>(repr: &Self::Repr<T>) -> Self::Repr<&T> {
        Cons::new(&repr.head, N::as_refs(&repr.tail))
    }

    #[inline(always)]
    fn zip<A, B>(left: Self::Repr<A>, right: Self::Repr<B>) -> Self::Repr<(A, B)> {
        let (a, left) = left.into_parts();
        let (b, right) = right.into_parts();
        Cons::new((a, b), N::zip(left, right))
    }

    #[inline(always)]
    fn snoc<T>(repr: Self::Repr<T>, last: T) -> <S<Self> as Nat>::Repr<T> {
        let (head, tail) = repr.into_parts();
        Cons::new(head, N::snoc(tail, last))
    }

    #[inline(always)]
    fn pull<T, I>(iter: &mut I) -> Option<Self::Repr<T>>
    where
        I: Iterator<Item = T>,
    {
        let head = iter.next()?;
        let tail = N::pull(iter)?;
        Some(Cons::new(head, tail))
    }
}

pub type N0 = Z;
pub type N1 = S<N0>;
pub type N2 = S<N1>;
pub type N3 = S<N2>;
pub type N4 = S<N3>;
pub type N5 = S<N4>;
pub type N6 = S<N5>;
pub type N7 = S<N6>;
pub type N8 = S<N7>;
pub type N9 = S<N8>;
pub type N10 = S<N9>;
pub type N11 = S<N10>;
pub type N12 = S<N11>;
pub type N13 = S<N12>;
pub type N14 = S<N13>;
pub type N15 = S<N14>;
pub type N16 = S<N15>;

/// `A + B` as a type.
pub type Plus<A, B> = <A as Nat>::Plus<B>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(N0::VALUE, 0);
        assert_eq!(N1::VALUE, 1);
        assert_eq!(N7::VALUE, 7);
        assert_eq!(N16::VALUE, 16);
    }

    #[test]
    fn test_plus() {
        assert_eq!(<Plus<N0, N0>>::VALUE, 0);
        assert_eq!(<Plus<N0, N4>>::VALUE, 4);
        assert_eq!(<Plus<N3, N0>>::VALUE, 3);
        assert_eq!(<Plus<N3, N5>>::VALUE, 8);
    }

    fn same<A, B>(_: PhantomData<A>, _: PhantomData<B>)
    where
        A: Nat<Repr<u8> = B::Repr<u8>>,
        B: Nat,
    {
    }

    #[test]
    fn test_plus_normalizes() {
        // Compiles only if 2 + 3 and 5 have the same representation.
        same::<Plus<N2, N3>, N5>(PhantomData, PhantomData);
    }

    #[test]
    fn test_pull_exact() {
        let mut it = [1, 2, 3].into_iter();
        let repr = N3::pull(&mut it).unwrap();
        assert_eq!(N3::get(&repr, 0), Some(&1));
        assert_eq!(N3::get(&repr, 2), Some(&3));
        assert_eq!(N3::get(&repr, 3), None);
        assert!(it.next().is_none());
    }

    #[test]
    fn test_pull_short() {
        let mut it = [1, 2].into_iter();
        assert!(N3::pull(&mut it).is_none());
    }
}
