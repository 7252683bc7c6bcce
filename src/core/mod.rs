//! The guts. Naturals, vectors, motives, the fold itself.

pub mod error;
pub mod fold;
pub mod motive;
pub mod nat;
pub mod vect;

#[cfg(feature = "alloc")]
pub use error::FoldError;
pub use error::LengthMismatch;
pub use fold::{dfold, Step};
pub use motive::{At, Const, Motive, VectOf, VectPlus};
pub use nat::{
    Nat, Plus, N0, N1, N10, N11, N12, N13, N14, N15, N16, N2, N3, N4, N5, N6, N7, N8, N9, S, Z,
};
pub use vect::{Cons, Nil, Vect};
