//! A single-value Snowball decision, for choices without causal structure.
mod snowball;

pub use snowball::*;
