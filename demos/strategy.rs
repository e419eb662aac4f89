//! Strategy Registry
//!
//! Picks add strategies by name and shows the type check each one applies.
//!
//! Run with: cargo run --example strategy

use patterncraft::strategy::{Adder, Operand, StrategyRegistry};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_target(false)
        .init();

    let registry = StrategyRegistry::with_defaults();
    println!("registered: {:?}", registry.names());

    let strings = Adder::new(&registry, "StringStrategy").expect("registered by default");
    match strings.add(&"one".into(), &"two".into()) {
        Ok(result) => println!("{}", result),
        Err(err) => println!("error: {}", err),
    }

    let integers = Adder::new(&registry, "IntegerStrategy").expect("registered by default");
    match integers.add(&Operand::Integer(23), &Operand::Integer(44)) {
        Ok(result) => println!("{}", result),
        Err(err) => println!("error: {}", err),
    }
    if let Err(err) = integers.add(&"one".into(), &"two".into()) {
        println!("error: {}", err);
    }
}
