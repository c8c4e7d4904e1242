//! Effect grammar, condition evaluation, and pool accumulation.

#![allow(unused_imports)]

pub mod accumulator;
pub mod eval;
pub mod parser;
pub mod types;

pub use accumulator::*;
pub use eval::*;
pub use parser::*;
pub use types::*;
