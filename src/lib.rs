//! Nightrun - Contract-Tree Heist Engine
//!
//! This crate exposes the rule engine for a perk-tree heist game: players
//! select nodes in a contract tree and configure a team of runners, effects
//! on selected nodes accumulate into running pools of Damage, Risk, Money,
//! Grit and Veil, and resolving the contract converts unprevented Damage and
//! Risk into random outcomes affecting runners and rewards.
//!
//! Rendering, input handling and storage are left to the embedding shell.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod contract;
pub mod core;
pub mod effects;
pub mod nodes;
pub mod resolution;
pub mod runners;
pub mod simulator;

pub use crate::core::constants::RESOLUTION_STEP_DELAY_MS;
pub use crate::core::game_state::{GameState, PlayerState};
