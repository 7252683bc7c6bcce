//! Derived operations. Each one is `dfold` with a particular motive.
//!
//! | op        | motive `At<L>`          | base        |
//! |-----------|-------------------------|-------------|
//! | `map`     | `Vect<U, L>`            | `nil`       |
//! | `foldr`   | `A`                     | caller's    |
//! | `sum`     | `T`                     | `T::default()` |
//! | `append`  | `Vect<T, L + K>`        | second input |
//! | `reverse` | `Vect<T, L>`            | `nil`       |

pub mod append;
pub mod foldr;
pub mod map;
pub mod reverse;

pub use append::{append, AppendStep};
pub use foldr::{foldr, sum, FoldrStep};
pub use map::{map, MapStep};
pub use reverse::{reverse, ReverseStep};
