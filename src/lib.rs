//! Dependently typed right folds over length-indexed vectors.
//!
//! A [`Vect<T, N>`] holds exactly `N` elements, with `N` a type-level
//! natural ([`Z`], [`S<N>`]). A [`Motive`] maps a step index to the type of
//! the accumulator at that step, and [`dfold`] folds a vector from the right
//! while the accumulator's type follows the motive: `At<Z>` going in,
//! `At<N>` coming out.
//!
//! ```
//! use dfold::{append, map, sum, vect};
//!
//! let v = vect![1, 2, 3];
//! assert_eq!(sum(v.clone()), 6);
//! assert_eq!(map(|x| x + 3, v.clone()), vect![4, 5, 6]);
//! assert_eq!(append(v.clone(), v), vect![1, 2, 3, 1, 2, 3]);
//! ```
//!
//! The core is `no_std` and allocation-free. `alloc` adds `Vec` conversions,
//! the runtime-checked fold in [`dynamic`] and the witnesses in [`proofs`].

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod core;
pub mod ops;

#[cfg(feature = "alloc")]
pub mod dynamic;

#[cfg(feature = "alloc")]
pub mod proofs;

/// Prelude for convenient imports of primary API types.
pub mod prelude {
    pub use crate::core::{
        dfold, At, Const, LengthMismatch, Motive, Nat, Step, Vect, VectOf, VectPlus, S, Z,
    };
    pub use crate::ops::{append, foldr, map, reverse, sum};
    pub use crate::vect;

    #[cfg(feature = "alloc")]
    pub use crate::core::FoldError;
    #[cfg(feature = "alloc")]
    pub use crate::dynamic::{dfold_checked, RuntimeMotive, SeqLen, Uniform};
}

// Re-export primary types at crate root for convenience.
pub use crate::core::{
    dfold, At, Cons, Const, LengthMismatch, Motive, Nat, Nil, Plus, Step, Vect, VectOf, VectPlus,
    N0, N1, N10, N11, N12, N13, N14, N15, N16, N2, N3, N4, N5, N6, N7, N8, N9, S, Z,
};
pub use crate::ops::{append, foldr, map, reverse, sum};

#[cfg(feature = "alloc")]
pub use crate::core::FoldError;
