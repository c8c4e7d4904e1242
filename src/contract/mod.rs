//! Contracts: node trees, outcome tables, and document loading.

#![allow(unused_imports)]

pub mod data;
pub mod types;

pub use data::*;
pub use types::*;
