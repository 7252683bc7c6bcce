//! Walk through the dependent fold: sum, map, append and foldr over `[1, 2, 3]`.
//!
//! Run with `RUST_LOG=trace` and `--features tracing` to see every step.

use dfold::dynamic::{append_checked, dfold_checked, SeqLen};
use dfold::prelude::*;
use tracing_subscriber::EnvFilter;

/// Scales each element by its step index.
struct Weigh;

impl Step<i32> for Weigh {
    type Motive = Const<i32>;

    fn step<L: Nat>(&mut self, x: i32, acc: i32) -> i32 {
        acc + x * L::VALUE as i32
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let v = vect![1, 2, 3];
    tracing::info!(%v, "input");

    // 1. Sum: constant motive, addition, zero.
    println!("sum {v} = {}", sum(v.clone())); // 6

    // 2. Map: the accumulator after L steps is a vector of length L.
    println!("map (+3) {v} = {}", map(|x| x + 3, v.clone())); // [4, 5, 6]

    // 3. Append: the second vector is the base.
    println!("append {v} {v} = {}", append(v.clone(), v.clone())); // [1, 2, 3, 1, 2, 3]

    // 4. The ordinary right fold is the constant-motive case.
    println!("foldr (+) 0 {v} = {}", foldr(|x, acc| x + acc, 0, v.clone())); // 6

    // 5. Steps see their index: 0 for the last element.
    println!("weighted {v} = {}", dfold(Weigh, 0, v.clone())); // 3*0 + 2*1 + 1*2 = 4

    println!("reverse {v} = {}", reverse(v.clone())); // [3, 2, 1]

    // 6. Runtime lengths go through the checked fold.
    let joined = append_checked(v.to_vec(), vec![4, 5])?;
    println!("checked append = {joined:?}");

    let broken = dfold_checked(
        &SeqLen::new(0),
        |_, x: i32, mut acc: Vec<i32>| {
            acc.extend([x, x]);
            acc
        },
        Vec::new(),
        v.to_vec(),
    );
    match broken {
        Err(e) => println!("rejected: {e}"),
        Ok(out) => println!("unexpected: {out:?}"),
    }

    // 7. And back to a typed vector once the length is known.
    let typed: Vect<i32, dfold::N5> = Vect::try_from(joined)?;
    println!("typed sum = {}", typed.sum()); // 15

    Ok(())
}
