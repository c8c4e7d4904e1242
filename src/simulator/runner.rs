//! Main simulation runner driving the real resolver.
//!
//! Each run builds a fresh game state on the demo contract, fields a random
//! crew, walks the tree frontier at random, and resolves. Statistics come
//! straight out of the resolution summary, so nothing here duplicates
//! engine logic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::contract::data::demo_contract;
use crate::core::game_state::GameState;
use crate::resolution::logic::resolve_contract;
use crate::runners::roster::generate_runner;
use crate::runners::types::LifecycleState;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed + run_idx as u64),
            None => StdRng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - payout {}, heat {}, rolls {}, injuries {}, deaths {}",
                run_idx + 1,
                config.num_runs,
                stats.payout,
                stats.risk,
                stats.rolls,
                stats.injuries,
                stats.deaths
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

fn simulate_single_run(config: &SimConfig, rng: &mut impl Rng) -> RunStats {
    let mut state = GameState::new(demo_contract());

    // Candidates walk in; hire until the team is full. A hire that fails
    // (usually money) just leaves a thinner crew.
    for _ in 0..config.roster_size {
        state.roster.add(generate_runner(rng));
    }
    let candidate_ids: Vec<String> = state.roster.iter().map(|r| r.id.clone()).collect();
    for id in candidate_ids {
        if state.roster.hired_count() >= config.team_size as usize {
            break;
        }
        let _ = state.roster.hire(&id, &mut state.player);
    }

    // Random walk across whatever the crew unlocks
    for _ in 0..config.target_selections {
        let available = state.available_nodes();
        if available.is_empty() {
            break;
        }
        let pick = available[rng.gen_range(0..available.len())];
        state.select_node(pick);
    }

    let nodes_selected = state.selected.len() as u32;
    let rolls = state.recompute_pool().unprevented_damage;
    let summary = resolve_contract(&mut state, rng);

    let deaths = summary
        .runners
        .iter()
        .filter(|r| {
            r.lifecycle_after == LifecycleState::Dead
                && r.lifecycle_before != LifecycleState::Dead
        })
        .count() as u32;
    let injuries = summary
        .runners
        .iter()
        .filter(|r| {
            r.lifecycle_after == LifecycleState::Injured
                && r.lifecycle_before == LifecycleState::Ready
        })
        .count() as u32;

    RunStats {
        payout: summary.reward_paid,
        risk: summary.risk_applied,
        rolls,
        deaths,
        injuries,
        team_size: summary.runners.len() as u32,
        nodes_selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let config = SimConfig {
            num_runs: 5,
            seed: Some(7),
            verbosity: 0,
            ..SimConfig::default()
        };
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.avg_payout, b.avg_payout);
        assert_eq!(a.total_deaths, b.total_deaths);
        assert_eq!(a.total_injuries, b.total_injuries);
    }

    #[test]
    fn test_simulation_fills_report() {
        let config = SimConfig {
            num_runs: 3,
            seed: Some(11),
            verbosity: 0,
            ..SimConfig::default()
        };
        let report = run_simulation(&config);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.run_stats.len(), 3);
        for run in &report.run_stats {
            assert!(run.nodes_selected > 0);
            assert!(run.team_size > 0);
        }
    }
}
