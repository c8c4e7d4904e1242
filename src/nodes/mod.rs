//! Contract-tree nodes and gate conditions.

#![allow(unused_imports)]

pub mod gates;
pub mod types;

pub use gates::*;
pub use types::*;
