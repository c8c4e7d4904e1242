//! Simulation configuration.

use crate::core::constants::MAX_TEAM_SIZE;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of contract resolutions to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Candidate runners generated per run
    pub roster_size: u32,

    /// Team slots to fill before resolving
    pub team_size: u32,

    /// Nodes to pick along a random walk of the tree frontier
    pub target_selections: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run detail)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            roster_size: 6,
            team_size: MAX_TEAM_SIZE as u32,
            target_selections: 6,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast balance check
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            ..Default::default()
        }
    }

    /// Config for stress-testing deep selections with a thin crew
    pub fn overreach_test() -> Self {
        Self {
            num_runs: 200,
            team_size: 2,
            target_selections: 10,
            ..Default::default()
        }
    }
}
