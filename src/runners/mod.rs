//! Runners: types, name generation, and roster management.

#![allow(unused_imports)]

pub mod names;
pub mod roster;
pub mod types;

pub use roster::*;
pub use types::*;
