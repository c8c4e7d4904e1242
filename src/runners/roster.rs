//! Roster management: runner generation, hiring, and unhiring.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::names::generate_runner_name;
use super::types::{HiringState, Runner, RunnerStats, RunnerType};
use crate::core::constants::{
    MAX_TEAM_SIZE, PRIMARY_STAT_MAX, PRIMARY_STAT_MIN, RUNNER_HIRE_COST, SECONDARY_STAT_MAX,
    SECONDARY_STAT_MIN,
};
use crate::core::game_state::PlayerState;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HireError {
    #[error("no runner with that id on the roster")]
    UnknownRunner,
    #[error("dead runners cannot be hired")]
    DeadRunner,
    #[error("runner is already hired")]
    AlreadyHired,
    #[error("runner is not currently hired")]
    NotHired,
    #[error("the team is full")]
    TeamFull,
    #[error("not enough money to cover the hiring cost")]
    InsufficientFunds,
}

/// Process-wide collection of runners, hired and unhired.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    runners: Vec<Runner>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, runner: Runner) {
        self.runners.push(runner);
    }

    pub fn get(&self, id: &str) -> Option<&Runner> {
        self.runners.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Runner> {
        self.runners.iter_mut().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Runner> {
        self.runners.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Runner> {
        self.runners.iter_mut()
    }

    /// The currently hired team, in roster order.
    pub fn hired(&self) -> Vec<&Runner> {
        self.runners.iter().filter(|r| r.is_hired()).collect()
    }

    pub fn hired_count(&self) -> usize {
        self.runners.iter().filter(|r| r.is_hired()).count()
    }

    /// Hires a runner onto the team. Requires the runner to be alive and
    /// unhired, a free team slot, and enough money; debits the fixed cost.
    pub fn hire(&mut self, id: &str, player: &mut PlayerState) -> Result<(), HireError> {
        let team_size = self.hired_count();
        let runner = self.get_mut(id).ok_or(HireError::UnknownRunner)?;

        if runner.is_hired() {
            return Err(HireError::AlreadyHired);
        }
        if runner.is_dead() {
            return Err(HireError::DeadRunner);
        }
        if team_size >= MAX_TEAM_SIZE {
            return Err(HireError::TeamFull);
        }
        if player.money < RUNNER_HIRE_COST {
            return Err(HireError::InsufficientFunds);
        }

        player.money -= RUNNER_HIRE_COST;
        runner.hiring = HiringState::Hired;
        Ok(())
    }

    /// Takes a hired runner off the team and refunds the fixed hiring cost.
    pub fn unhire(&mut self, id: &str, player: &mut PlayerState) -> Result<(), HireError> {
        let runner = self.get_mut(id).ok_or(HireError::UnknownRunner)?;
        if !runner.is_hired() {
            return Err(HireError::NotHired);
        }
        runner.hiring = HiringState::Unhired;
        player.money += RUNNER_HIRE_COST;
        Ok(())
    }
}

/// Generates a fresh runner with a random specialization, a street handle,
/// and stats biased toward the specialization.
pub fn generate_runner(rng: &mut impl Rng) -> Runner {
    let runner_type = RunnerType::all()[rng.gen_range(0..RunnerType::all().len())];
    let name = generate_runner_name(rng);

    let mut stats = RunnerStats::default();
    for stat in RunnerType::all() {
        stats.set(stat, rng.gen_range(SECONDARY_STAT_MIN..=SECONDARY_STAT_MAX));
    }
    stats.set(runner_type, rng.gen_range(PRIMARY_STAT_MIN..=PRIMARY_STAT_MAX));

    Runner::new(name, runner_type, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runners::types::LifecycleState;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_runner(name: &str) -> Runner {
        Runner::new(
            name.to_string(),
            RunnerType::Hacker,
            RunnerStats::from_values(4, 1, 0, 1),
        )
    }

    fn rich_player() -> PlayerState {
        PlayerState {
            money: RUNNER_HIRE_COST * 10,
            ..PlayerState::default()
        }
    }

    #[test]
    fn test_hire_debits_cost() {
        let mut roster = Roster::new();
        let runner = test_runner("A");
        let id = runner.id.clone();
        roster.add(runner);

        let mut player = rich_player();
        let before = player.money;
        roster.hire(&id, &mut player).unwrap();
        assert_eq!(player.money, before - RUNNER_HIRE_COST);
        assert_eq!(roster.hired_count(), 1);
    }

    #[test]
    fn test_hire_rejects_double_hire() {
        let mut roster = Roster::new();
        let runner = test_runner("A");
        let id = runner.id.clone();
        roster.add(runner);

        let mut player = rich_player();
        roster.hire(&id, &mut player).unwrap();
        assert_eq!(roster.hire(&id, &mut player), Err(HireError::AlreadyHired));
    }

    #[test]
    fn test_hire_rejects_dead_runner() {
        let mut roster = Roster::new();
        let mut runner = test_runner("A");
        runner.kill();
        let id = runner.id.clone();
        roster.add(runner);

        let mut player = rich_player();
        assert_eq!(roster.hire(&id, &mut player), Err(HireError::DeadRunner));
        assert_eq!(roster.hired_count(), 0);
    }

    #[test]
    fn test_hire_rejects_when_broke() {
        let mut roster = Roster::new();
        let runner = test_runner("A");
        let id = runner.id.clone();
        roster.add(runner);

        let mut player = PlayerState {
            money: RUNNER_HIRE_COST - 1,
            ..PlayerState::default()
        };
        assert_eq!(
            roster.hire(&id, &mut player),
            Err(HireError::InsufficientFunds)
        );
    }

    #[test]
    fn test_hire_rejects_when_team_full() {
        let mut roster = Roster::new();
        let mut ids = Vec::new();
        for i in 0..=MAX_TEAM_SIZE {
            let runner = test_runner(&format!("R{}", i));
            ids.push(runner.id.clone());
            roster.add(runner);
        }

        let mut player = rich_player();
        for id in ids.iter().take(MAX_TEAM_SIZE) {
            roster.hire(id, &mut player).unwrap();
        }
        assert_eq!(
            roster.hire(&ids[MAX_TEAM_SIZE], &mut player),
            Err(HireError::TeamFull)
        );
    }

    #[test]
    fn test_unhire_refunds_cost() {
        let mut roster = Roster::new();
        let runner = test_runner("A");
        let id = runner.id.clone();
        roster.add(runner);

        let mut player = rich_player();
        let before = player.money;
        roster.hire(&id, &mut player).unwrap();
        roster.unhire(&id, &mut player).unwrap();
        assert_eq!(player.money, before);
        assert_eq!(roster.hired_count(), 0);
    }

    #[test]
    fn test_unhire_requires_hired() {
        let mut roster = Roster::new();
        let runner = test_runner("A");
        let id = runner.id.clone();
        roster.add(runner);

        let mut player = rich_player();
        assert_eq!(roster.unhire(&id, &mut player), Err(HireError::NotHired));
        assert_eq!(roster.unhire("missing", &mut player), Err(HireError::UnknownRunner));
    }

    #[test]
    fn test_generate_runner_stats_favor_specialization() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..50 {
            let runner = generate_runner(&mut rng);
            assert!(!runner.name.is_empty());
            assert_eq!(runner.lifecycle, LifecycleState::Ready);
            let primary = runner.stats.get(runner.runner_type);
            assert!((PRIMARY_STAT_MIN..=PRIMARY_STAT_MAX).contains(&primary));
            for stat in RunnerType::all() {
                if stat != runner.runner_type {
                    assert!(runner.stats.get(stat) <= SECONDARY_STAT_MAX);
                }
            }
        }
    }
}
