//! Runtime-checked folds, for data whose length is only known at runtime.
//!
//! The typed fold in [`crate::core::fold`] can't go wrong, but it needs the
//! length as a type. Here the length is a `Vec::len`, the step takes its
//! index as a plain `usize`, and a [`RuntimeMotive`] says what shape each
//! accumulator must have. Every accumulator is checked, the base included,
//! and the first one that doesn't fit stops the fold with
//! [`FoldError::MotiveMismatch`].
//!
//! Order and numbering match the typed fold: the last element is combined
//! first, at index 0.

mod motive;

pub use motive::{RuntimeMotive, SeqLen, Uniform};

use alloc::format;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::core::error::FoldError;
use crate::core::nat::Nat;
use crate::core::vect::Vect;

/// Right fold with the motive checked after every step.
pub fn dfold_checked<T, A, M, F>(motive: &M, mut step: F, base: A, xs: Vec<T>) -> Result<A, FoldError>
where
    M: RuntimeMotive<A>,
    F: FnMut(usize, T, A) -> A,
{
    let mut acc = check(motive, 0, base)?;
    for (index, x) in xs.into_iter().rev().enumerate() {
        acc = check(motive, index + 1, step(index, x, acc))?;
    }
    Ok(acc)
}

fn check<A, M>(motive: &M, index: usize, acc: A) -> Result<A, FoldError>
where
    M: RuntimeMotive<A>,
{
    let expected = motive.expected(index);
    let found = motive.observed(&acc);
    if expected == found {
        return Ok(acc);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(index, ?expected, ?found, "motive mismatch");

    Err(FoldError::MotiveMismatch {
        index,
        expected: shape(&expected),
        found: shape(&found),
    })
}

fn shape<S: Debug>(s: &S) -> alloc::string::String {
    format!("{s:?}")
}

/// Conventional right fold, shape unchecked beyond the constant motive.
pub fn foldr_checked<T, A, F>(mut f: F, base: A, xs: Vec<T>) -> Result<A, FoldError>
where
    F: FnMut(T, A) -> A,
{
    dfold_checked(&Uniform, |_, x, acc| f(x, acc), base, xs)
}

/// Map with the length checked at every step.
pub fn map_checked<T, U, F>(mut f: F, xs: Vec<T>) -> Result<Vec<U>, FoldError>
where
    F: FnMut(T) -> U,
{
    // Built back to front, then flipped. Only the length is checked, so the
    // intermediate order doesn't matter.
    let cap = xs.len();
    let mut out = dfold_checked(
        &SeqLen::new(0),
        |_, x, mut acc: Vec<U>| {
            acc.push(f(x));
            acc
        },
        Vec::with_capacity(cap),
        xs,
    )?;
    out.reverse();
    Ok(out)
}

/// `xs` followed by `ys`, with `ys` as the base.
pub fn append_checked<T>(xs: Vec<T>, mut ys: Vec<T>) -> Result<Vec<T>, FoldError> {
    let offset = ys.len();
    ys.reverse();
    let mut out = dfold_checked(
        &SeqLen::new(offset),
        |_, x, mut acc: Vec<T>| {
            acc.push(x);
            acc
        },
        ys,
        xs,
    )?;
    out.reverse();
    Ok(out)
}

/// Back into the typed world.
pub fn into_static<T, N: Nat>(xs: Vec<T>) -> Result<Vect<T, N>, FoldError> {
    Ok(Vect::try_from(xs)?)
}
