//! Length-indexed vectors. The length is a type, so it can't lie.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::error::LengthMismatch;
use super::nat::{Nat, S, Z};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Storage of the empty vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nil;

/// Storage of a non-empty vector: one element in front of the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cons<T, Tail> {
    pub(crate) head: T,
    pub(crate) tail: Tail,
}

impl<T, Tail> Cons<T, Tail> {
    #[inline(always)]
    pub(crate) const fn new(head: T, tail: Tail) -> Self {
        Self { head, tail }
    }

    #[inline(always)]
    pub(crate) fn into_parts(self) -> (T, Tail) {
        (self.head, self.tail)
    }
}

/// Exactly `N` values of type `T`.
///
/// Built from [`Vect::nil`] by prepending, or with the [`vect!`](crate::vect)
/// macro. Head and tail only exist on `Vect<T, S<N>>`, so they can't be
/// asked of an empty vector.
pub struct Vect<T, N: Nat> {
    repr: N::Repr<T>,
}

impl<T> Vect<T, Z> {
    /// The empty vector.
    #[inline(always)]
    pub const fn nil() -> Self {
        Vect { repr: Nil }
    }
}

impl<T, N: Nat> Vect<T, S<N>> {
    /// Prepend `head` to `tail`.
    #[inline(always)]
    pub fn cons(head: T, tail: Vect<T, N>) -> Self {
        tail.prepend(head)
    }

    #[inline(always)]
    pub fn head(&self) -> &T {
        &self.repr.head
    }

    #[inline(always)]
    pub fn into_head(self) -> T {
        self.repr.head
    }

    #[inline(always)]
    pub fn tail(self) -> Vect<T, N> {
        Vect::from_repr(self.repr.tail)
    }

    #[inline(always)]
    pub fn split_first(self) -> (T, Vect<T, N>) {
        let (head, tail) = self.repr.into_parts();
        (head, Vect::from_repr(tail))
    }
}

impl<T, N: Nat> Vect<T, N> {
    pub const LEN: usize = N::VALUE;

    #[inline(always)]
    pub(crate) const fn from_repr(repr: N::Repr<T>) -> Self {
        Vect { repr }
    }

    #[inline(always)]
    pub(crate) fn into_repr(self) -> N::Repr<T> {
        self.repr
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        N::VALUE
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        N::VALUE == 0
    }

    /// One element in front. The result is one longer.
    #[inline(always)]
    pub fn prepend(self, head: T) -> Vect<T, S<N>> {
        Vect::from_repr(Cons::new(head, self.repr))
    }

    /// One element at the back. Walks the whole vector.
    #[inline(always)]
    pub fn push_back(self, last: T) -> Vect<T, S<N>> {
        Vect::from_repr(N::snoc(self.repr, last))
    }

    /// Runtime indexing. `None` past the end.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        N::get(&self.repr, index)
    }

    #[inline(always)]
    pub fn as_refs(&self) -> Vect<&T, N> {
        Vect::from_repr(N::as_refs(&self.repr))
    }

    /// Pair up elements. Both sides have length `N`, so nothing is dropped.
    #[inline(always)]
    pub fn zip<U>(self, other: Vect<U, N>) -> Vect<(T, U), N> {
        Vect::from_repr(N::zip(self.repr, other.repr))
    }

    /// Visit elements front to back, stopping at the first error.
    #[inline]
    pub fn try_for_each<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        N::try_visit(&self.repr, &mut f)
    }

    #[inline]
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        let visited = self.try_for_each(|x| {
            f(x);
            Ok::<(), core::convert::Infallible>(())
        });
        match visited {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Take exactly `N` items from an iterator that knows its length.
    ///
    /// The reported length is only a first check. The error carries the
    /// number of items the iterator actually yielded.
    pub fn try_from_exact_iter<I>(items: I) -> Result<Self, LengthMismatch>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut iter = items.into_iter();
        let reported = iter.len();
        if reported != N::VALUE {
            return Err(LengthMismatch::new(N::VALUE, reported));
        }

        let mut taken = 0;
        let pulled = N::pull(&mut iter.by_ref().inspect(|_| taken += 1));
        match pulled {
            Some(repr) => match iter.count() {
                0 => Ok(Vect::from_repr(repr)),
                extra => Err(LengthMismatch::new(N::VALUE, N::VALUE + extra)),
            },
            None => Err(LengthMismatch::new(N::VALUE, taken)),
        }
    }
}

impl<T, N: Nat, const K: usize> TryFrom<[T; K]> for Vect<T, N> {
    type Error = LengthMismatch;

    fn try_from(items: [T; K]) -> Result<Self, Self::Error> {
        Vect::try_from_exact_iter(items)
    }
}

#[cfg(feature = "alloc")]
impl<T, N: Nat> TryFrom<Vec<T>> for Vect<T, N> {
    type Error = LengthMismatch;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Vect::try_from_exact_iter(items)
    }
}

#[cfg(feature = "alloc")]
impl<T, N: Nat> Vect<T, N> {
    /// Collect into a `Vec`, front to back.
    pub fn into_vec(self) -> Vec<T> {
        let mut out = self.foldr(Vec::with_capacity(N::VALUE), |x, mut acc: Vec<T>| {
            acc.push(x);
            acc
        });
        out.reverse();
        out
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.clone().into_vec()
    }

    pub fn iter(&self) -> alloc::vec::IntoIter<&T> {
        self.as_refs().into_vec().into_iter()
    }
}

#[cfg(feature = "alloc")]
impl<T, N: Nat> IntoIterator for Vect<T, N> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T: Clone, N: Nat> Clone for Vect<T, N> {
    fn clone(&self) -> Self {
        self.as_refs().map(T::clone)
    }
}

impl<T: PartialEq, N: Nat> PartialEq for Vect<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_refs()
            .zip(other.as_refs())
            .foldr(true, |(a, b), acc| acc && a == b)
    }
}

impl<T: Eq, N: Nat> Eq for Vect<T, N> {}

impl<T: Hash, N: Nat> Hash for Vect<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        N::VALUE.hash(state);
        self.for_each(|x| x.hash(state));
    }
}

impl<T: fmt::Debug, N: Nat> fmt::Debug for Vect<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.for_each(|x| {
            list.entry(x);
        });
        list.finish()
    }
}

/// `[1, 2, 3]`.
impl<T: fmt::Display, N: Nat> fmt::Display for Vect<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut first = true;
        self.try_for_each(|x| {
            if !core::mem::replace(&mut first, false) {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(x, f)
        })?;
        f.write_str("]")
    }
}

impl<T> Default for Vect<T, Z> {
    fn default() -> Self {
        Vect::nil()
    }
}

/// Build a [`Vect`](crate::Vect) from literal elements.
///
/// ```
/// use dfold::{vect, Vect, N3};
///
/// let v: Vect<i32, N3> = vect![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// ```
#[macro_export]
macro_rules! vect {
    () => {
        $crate::Vect::nil()
    };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::Vect::cons($head, $crate::vect![$($rest),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nat::{N0, N2, N3, N4};

    #[test]
    fn test_nil_is_empty() {
        let v: Vect<u8, N0> = Vect::nil();
        assert_eq!(v.len(), 0);
        assert!(v.is_empty());
        assert_eq!(v.get(0), None);
    }

    #[test]
    fn test_cons_grows() {
        let v = Vect::cons(1, Vect::cons(2, Vect::nil()));
        assert_eq!(v.len(), 2);
        assert_eq!(Vect::<i32, N2>::LEN, 2);
        assert_eq!(*v.head(), 1);
        assert_eq!(*v.tail().head(), 2);
    }

    #[test]
    fn test_macro_order() {
        let v: Vect<i32, N3> = vect![1, 2, 3];
        assert_eq!(v.get(0), Some(&1));
        assert_eq!(v.get(1), Some(&2));
        assert_eq!(v.get(2), Some(&3));
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn test_split_first() {
        let (head, tail) = vect!['a', 'b', 'c'].split_first();
        assert_eq!(head, 'a');
        assert_eq!(tail, vect!['b', 'c']);
    }

    #[test]
    fn test_push_back() {
        let v = vect![1, 2].push_back(3);
        assert_eq!(v, vect![1, 2, 3]);
    }

    #[test]
    fn test_zip_pairs() {
        let z = vect![1, 2, 3].zip(vect!['a', 'b', 'c']);
        assert_eq!(z, vect![(1, 'a'), (2, 'b'), (3, 'c')]);
    }

    #[test]
    fn test_eq_detects_difference() {
        assert_eq!(vect![1, 2, 3], vect![1, 2, 3]);
        assert_ne!(vect![1, 2, 3], vect![1, 2, 4]);
        assert_ne!(vect![0, 2, 3], vect![1, 2, 3]);
    }

    #[test]
    fn test_clone_is_deep() {
        let v = vect![[1u8; 4], [2u8; 4]];
        let w = v.clone();
        assert_eq!(v, w);
    }

    #[test]
    fn test_try_from_array() {
        let v: Vect<i32, N4> = [4, 3, 2, 1].try_into().unwrap();
        assert_eq!(v, vect![4, 3, 2, 1]);
    }

    #[test]
    fn test_try_from_array_wrong_length() {
        let r: Result<Vect<i32, N4>, _> = [1, 2].try_into();
        assert_eq!(r.unwrap_err(), LengthMismatch::new(4, 2));
    }

    /// Reports `claimed` as its length whatever it actually yields.
    struct Claims<I> {
        inner: I,
        claimed: usize,
    }

    impl<I: Iterator> Iterator for Claims<I> {
        type Item = I::Item;

        fn next(&mut self) -> Option<I::Item> {
            self.inner.next()
        }
    }

    impl<I: Iterator> ExactSizeIterator for Claims<I> {
        fn len(&self) -> usize {
            self.claimed
        }
    }

    #[test]
    fn test_exact_iter_overlong_is_rejected() {
        let items = Claims { inner: [1, 2, 3, 4, 5].into_iter(), claimed: 3 };
        let r = Vect::<i32, N3>::try_from_exact_iter(items);
        assert_eq!(r.unwrap_err(), LengthMismatch::new(3, 5));
    }

    #[test]
    fn test_exact_iter_short_reports_yielded() {
        let items = Claims { inner: [1, 2].into_iter(), claimed: 3 };
        let r = Vect::<i32, N3>::try_from_exact_iter(items);
        assert_eq!(r.unwrap_err(), LengthMismatch::new(3, 2));
    }

    #[test]
    fn test_exact_iter_honest() {
        let items = Claims { inner: [1, 2, 3].into_iter(), claimed: 3 };
        let v = Vect::<i32, N3>::try_from_exact_iter(items).unwrap();
        assert_eq!(v, vect![1, 2, 3]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_formatting() {
        let v = vect![1, 2, 3];
        assert_eq!(format!("{v}"), "[1, 2, 3]");
        assert_eq!(format!("{v:?}"), "[1, 2, 3]");
        let e: Vect<i32, N0> = Vect::nil();
        assert_eq!(format!("{e}"), "[]");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_vec_roundtrip() {
        let v: Vect<i32, N3> = vec![7, 8, 9].try_into().unwrap();
        assert_eq!(v.to_vec(), vec![7, 8, 9]);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![7, 8, 9]);
        assert_eq!(v.into_iter().rev().collect::<Vec<_>>(), vec![9, 8, 7]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_vec_wrong_length() {
        let r = Vect::<i32, N2>::try_from(vec![1, 2, 3]);
        assert_eq!(r.unwrap_err(), LengthMismatch::new(2, 3));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_hash_matches_eq() {
        use std::collections::hash_map::DefaultHasher;

        let hash = |v: &Vect<i32, N3>| {
            let mut h = DefaultHasher::new();
            v.hash(&mut h);
            h.finish()
        };
        assert_eq!(hash(&vect![1, 2, 3]), hash(&vect![1, 2, 3]));
        assert_ne!(hash(&vect![1, 2, 3]), hash(&vect![1, 2, 4]));
        assert_ne!(hash(&vect![1, 2, 3]), hash(&vect![3, 2, 1]));
    }
}
