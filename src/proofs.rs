//! Law witnesses. Runtime-verifiable evidence that the derived folds behave.
//!
//! Each witness keeps the inputs and results it compared, so a failing one
//! can be printed and read.

use alloc::vec::Vec;

use crate::core::nat::Nat;
use crate::core::vect::Vect;
use crate::ops::{append, foldr, map};

/// `foldr` through `dfold` agrees with a plain right fold over the elements.
#[derive(Debug, Clone)]
pub struct FoldEquivalence<A> {
    pub via_dfold: A,
    pub via_iter: A,
    pub holds: bool,
}

impl<A: PartialEq + Clone> FoldEquivalence<A> {
    pub fn verify<T, N, F>(xs: &Vect<T, N>, base: A, mut f: F) -> Self
    where
        T: Clone,
        N: Nat,
        F: FnMut(T, A) -> A,
    {
        let via_dfold = foldr(&mut f, base.clone(), xs.clone());
        let via_iter = xs.to_vec().into_iter().rev().fold(base, |acc, x| f(x, acc));
        let holds = via_dfold == via_iter;

        Self {
            via_dfold,
            via_iter,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// `map(f, xs)` keeps the length and applies `f` at every position.
#[derive(Debug, Clone)]
pub struct MapWitness<U> {
    pub mapped: Vec<U>,
    pub expected: Vec<U>,
    pub length_preserved: bool,
    pub elementwise: bool,
}

impl<U: PartialEq + Clone> MapWitness<U> {
    pub fn verify<T, N, F>(xs: &Vect<T, N>, mut f: F) -> Self
    where
        T: Clone,
        N: Nat,
        F: FnMut(T) -> U,
    {
        let mapped_vect = map(&mut f, xs.clone());
        let length_preserved = mapped_vect.len() == xs.len();
        let mapped = mapped_vect.into_vec();
        let expected: Vec<U> = xs.to_vec().into_iter().map(&mut f).collect();
        let elementwise = mapped == expected;

        Self {
            mapped,
            expected,
            length_preserved,
            elementwise,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.length_preserved && self.elementwise
    }
}

/// `append(a, b)` is `a` then `b`, length `N + K`.
#[derive(Debug, Clone)]
pub struct AppendWitness<T> {
    pub left: Vec<T>,
    pub right: Vec<T>,
    pub result: Vec<T>,
    pub holds: bool,
}

impl<T: PartialEq + Clone> AppendWitness<T> {
    pub fn verify<N: Nat, K: Nat>(xs: &Vect<T, N>, ys: &Vect<T, K>) -> Self {
        let joined = append(xs.clone(), ys.clone());
        let left = xs.to_vec();
        let right = ys.to_vec();
        let result = joined.into_vec();

        let holds = result.len() == N::VALUE + K::VALUE
            && result[..N::VALUE] == left[..]
            && result[N::VALUE..] == right[..];

        Self {
            left,
            right,
            result,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}
