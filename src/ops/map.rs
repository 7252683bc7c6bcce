//! Map. The accumulator after `L` steps is a vector of length `L`.

use core::marker::PhantomData;

use crate::core::fold::{dfold, Step};
use crate::core::motive::VectOf;
use crate::core::nat::{Nat, S};
use crate::core::vect::Vect;

/// Prepends `f(x)` at every step.
pub struct MapStep<F, U> {
    f: F,
    _out: PhantomData<fn() -> U>,
}

impl<F, U> MapStep<F, U> {
    pub const fn new(f: F) -> Self {
        Self { f, _out: PhantomData }
    }
}

impl<T, U, F> Step<T> for MapStep<F, U>
where
    F: FnMut(T) -> U,
{
    type Motive = VectOf<U>;

    #[inline(always)]
    fn step<L: Nat>(&mut self, x: T, acc: Vect<U, L>) -> Vect<U, S<L>> {
        acc.prepend((self.f)(x))
    }
}

/// Apply `f` to every element. Same length, same order.
///
/// `f` runs from the last element to the first.
#[inline]
pub fn map<T, U, N, F>(f: F, xs: Vect<T, N>) -> Vect<U, N>
where
    N: Nat,
    F: FnMut(T) -> U,
{
    dfold(MapStep::new(f), Vect::nil(), xs)
}

impl<T, N: Nat> Vect<T, N> {
    #[inline]
    pub fn map<U, F>(self, f: F) -> Vect<U, N>
    where
        F: FnMut(T) -> U,
    {
        map(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nat::N0;
    use crate::vect;

    #[test]
    fn test_map_add_three() {
        assert_eq!(map(|x| x + 3, vect![1, 2, 3]), vect![4, 5, 6]);
    }

    #[test]
    fn test_map_changes_type() {
        let lens = vect!["a", "bb", "ccc"].map(str::len);
        assert_eq!(lens, vect![1, 2, 3]);
    }

    #[test]
    fn test_map_identity() {
        let v = vect![5, 1, 4, 1];
        assert_eq!(v.clone().map(|x| x), v);
    }

    #[test]
    fn test_map_empty() {
        let v: Vect<i32, N0> = Vect::nil();
        let out: Vect<i64, N0> = map(i64::from, v);
        assert!(out.is_empty());
    }

    #[test]
    fn test_map_runs_back_to_front() {
        let mut order = [0; 3];
        let mut calls = 0;
        let _ = vect![10, 20, 30].map(|x| {
            order[calls] = x;
            calls += 1;
        });
        assert_eq!(order, [30, 20, 10]);
    }
}
