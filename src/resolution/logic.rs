//! The contract resolver: a step-generator over the fixed phase order
//! `Idle -> EvaluatingPrevention -> RollingDamage(i) -> ApplyingRewards ->
//! LevelingUp -> Complete`.
//!
//! Each `step` call advances exactly one discrete event. Playback pacing is
//! the caller's concern (see [`crate::RESOLUTION_STEP_DELAY_MS`]); the
//! resolver itself is fully synchronous and deterministic for a given RNG,
//! so a harness can drive it with zero delay and get identical results.

use rand::Rng;

use super::types::{ResolutionEvent, ResolutionPhase, ResolutionSummary, RunnerOutcome};
use crate::contract::types::OutcomeEffect;
use crate::core::constants::PLAYER_LEVELS_PER_CONTRACT;
use crate::core::game_state::GameState;
use crate::effects::accumulator::PoolBreakdown;
use crate::runners::types::LifecycleState;

#[derive(Debug, Clone)]
struct RunnerSnapshot {
    id: String,
    name: String,
    lifecycle: LifecycleState,
    level: u32,
}

/// Drives one contract to its conclusion. Once started, resolution runs to
/// completion; there is no mid-run cancellation.
#[derive(Debug, Clone)]
pub struct ContractResolver {
    phase: ResolutionPhase,
    breakdown: PoolBreakdown,
    reward_total: f64,
    total_rolls: u32,
    next_index: u32,
    events: Vec<ResolutionEvent>,
    before: Vec<RunnerSnapshot>,
    reward_paid: i64,
    risk_applied: u32,
}

impl ContractResolver {
    /// Captures the pool and team as they stand; the resolver works from
    /// this finalized view even if the UI keeps animating.
    pub fn new(state: &GameState) -> Self {
        let breakdown = state.recompute_pool();
        let reward_total = breakdown.pool.money;
        // No outcome table means nothing to roll against
        let total_rolls = if state.contract.outcomes.is_empty() {
            0
        } else {
            breakdown.unprevented_damage
        };
        let before = state
            .team()
            .iter()
            .map(|r| RunnerSnapshot {
                id: r.id.clone(),
                name: r.name.clone(),
                lifecycle: r.lifecycle,
                level: r.level,
            })
            .collect();

        Self {
            phase: ResolutionPhase::Idle,
            breakdown,
            reward_total,
            total_rolls,
            next_index: 0,
            events: Vec::new(),
            before,
            reward_paid: 0,
            risk_applied: 0,
        }
    }

    pub fn phase(&self) -> ResolutionPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == ResolutionPhase::Complete
    }

    /// Advances one discrete step, mutating the game state and returning the
    /// narrated event. Returns `None` once resolution is complete.
    pub fn step(&mut self, state: &mut GameState, rng: &mut impl Rng) -> Option<ResolutionEvent> {
        match self.phase {
            ResolutionPhase::Idle | ResolutionPhase::EvaluatingPrevention => {
                let p = self.breakdown.prevention;
                let description = format!(
                    "Grit holds back {} damage, Veil masks {} risk. {} damage and {} risk get through.",
                    p.damage_prevented,
                    p.risk_prevented,
                    self.breakdown.unprevented_damage,
                    self.breakdown.unprevented_risk,
                );
                self.phase = if self.total_rolls > 0 {
                    ResolutionPhase::RollingDamage(1)
                } else {
                    ResolutionPhase::ApplyingRewards
                };
                Some(self.emit(None, description, None))
            }
            ResolutionPhase::RollingDamage(i) => {
                let max_roll = state.contract.outcomes.max_roll();
                let rolled = rng.gen_range(1..=max_roll);
                let outcome = state
                    .contract
                    .outcomes
                    .entry_for_roll(rolled)
                    .unwrap_or(OutcomeEffect::Nothing);

                let (text, runner_id) = self.apply_outcome(state, rng, outcome);
                let description =
                    format!("Roll {}/{} came up {}: {}", i, self.total_rolls, rolled, text);

                self.phase = if i < self.total_rolls {
                    ResolutionPhase::RollingDamage(i + 1)
                } else {
                    ResolutionPhase::ApplyingRewards
                };
                Some(self.emit(Some(rolled), description, runner_id))
            }
            ResolutionPhase::ApplyingRewards => {
                self.risk_applied = self.breakdown.unprevented_risk;
                self.reward_paid = self.reward_total.round() as i64;
                state.player.risk += self.risk_applied;
                state.player.money += self.reward_paid;

                let description = format!(
                    "The crew banks {} credits; heat rises by {}.",
                    self.reward_paid, self.risk_applied,
                );
                self.phase = ResolutionPhase::LevelingUp;
                Some(self.emit(None, description, None))
            }
            ResolutionPhase::LevelingUp => {
                let mut survivors = Vec::new();
                for runner in state.roster.iter_mut() {
                    if runner.is_hired() && !runner.is_dead() {
                        runner.level += 1;
                        survivors.push(runner.name.clone());
                    }
                }
                state.player.level += PLAYER_LEVELS_PER_CONTRACT;

                let description = if survivors.is_empty() {
                    "No one is left standing to learn from the job.".to_string()
                } else {
                    format!("{} walk away sharper (+1 level).", survivors.join(", "))
                };
                self.phase = ResolutionPhase::Complete;
                Some(self.emit(None, description, None))
            }
            ResolutionPhase::Complete => None,
        }
    }

    /// Builds the end-of-run summary against the current roster state.
    pub fn summary(&self, state: &GameState) -> ResolutionSummary {
        let runners = self
            .before
            .iter()
            .map(|snap| {
                let current = state.roster.get(&snap.id);
                RunnerOutcome {
                    runner_id: snap.id.clone(),
                    name: snap.name.clone(),
                    lifecycle_before: snap.lifecycle,
                    lifecycle_after: current.map_or(snap.lifecycle, |r| r.lifecycle),
                    level_before: snap.level,
                    level_after: current.map_or(snap.level, |r| r.level),
                }
            })
            .collect();

        ResolutionSummary {
            events: self.events.clone(),
            reward_paid: self.reward_paid,
            risk_applied: self.risk_applied,
            runners,
        }
    }

    fn apply_outcome(
        &mut self,
        state: &mut GameState,
        rng: &mut impl Rng,
        outcome: OutcomeEffect,
    ) -> (String, Option<String>) {
        match outcome {
            OutcomeEffect::Injury => self.apply_injury(state, rng),
            OutcomeEffect::Death => self.apply_death(state, rng),
            OutcomeEffect::Reduce(percent) => {
                self.reward_total *= 1.0 - percent as f64 / 100.0;
                (
                    format!(
                        "a complication docks the payout by {}% (now {:.0} credits)",
                        percent, self.reward_total
                    ),
                    None,
                )
            }
            OutcomeEffect::Extra(percent) => {
                self.reward_total *= 1.0 + percent as f64 / 100.0;
                (
                    format!(
                        "a windfall boosts the payout by {}% (now {:.0} credits)",
                        percent, self.reward_total
                    ),
                    None,
                )
            }
            OutcomeEffect::Nothing => ("the crew shrugs it off".to_string(), None),
        }
    }

    /// Injury: a random Ready runner goes down. With no one Ready, a random
    /// Injured runner dies instead. With everyone Dead, nothing happens.
    fn apply_injury(
        &mut self,
        state: &mut GameState,
        rng: &mut impl Rng,
    ) -> (String, Option<String>) {
        if let Some((id, name)) = pick_hired(state, rng, LifecycleState::Ready) {
            if let Some(runner) = state.roster.get_mut(&id) {
                runner.injure();
            }
            (format!("{} takes a hit and is injured", name), Some(id))
        } else if let Some((id, name)) = pick_hired(state, rng, LifecycleState::Injured) {
            if let Some(runner) = state.roster.get_mut(&id) {
                runner.kill();
            }
            (format!("{}'s wounds turn fatal", name), Some(id))
        } else {
            ("the hit finds no one left standing".to_string(), None)
        }
    }

    /// Death: a random Injured runner dies. With no one Injured, a random
    /// living runner is injured instead (with none Injured, living means
    /// Ready). With everyone Dead, nothing happens.
    fn apply_death(
        &mut self,
        state: &mut GameState,
        rng: &mut impl Rng,
    ) -> (String, Option<String>) {
        if let Some((id, name)) = pick_hired(state, rng, LifecycleState::Injured) {
            if let Some(runner) = state.roster.get_mut(&id) {
                runner.kill();
            }
            (format!("{} doesn't make it out", name), Some(id))
        } else if let Some((id, name)) = pick_hired(state, rng, LifecycleState::Ready) {
            if let Some(runner) = state.roster.get_mut(&id) {
                runner.injure();
            }
            (
                format!("{} barely dodges death and is injured", name),
                Some(id),
            )
        } else {
            ("death finds the crew already gone".to_string(), None)
        }
    }

    fn emit(
        &mut self,
        rolled: Option<u32>,
        description: String,
        runner_id: Option<String>,
    ) -> ResolutionEvent {
        let event = ResolutionEvent {
            index: self.next_index,
            rolled,
            description,
            runner_id,
        };
        self.next_index += 1;
        self.events.push(event.clone());
        event
    }
}

/// Uniformly picks a hired runner in the given lifecycle state.
fn pick_hired(
    state: &GameState,
    rng: &mut impl Rng,
    lifecycle: LifecycleState,
) -> Option<(String, String)> {
    let candidates: Vec<(String, String)> = state
        .roster
        .iter()
        .filter(|r| r.is_hired() && r.lifecycle == lifecycle)
        .map(|r| (r.id.clone(), r.name.clone()))
        .collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.gen_range(0..candidates.len())].clone())
}

/// Runs a resolution to completion and returns its summary. This is the
/// zero-delay driver used by tests and the simulator; interactive shells
/// call `step` themselves and pace the playback.
pub fn resolve_contract(state: &mut GameState, rng: &mut impl Rng) -> ResolutionSummary {
    let mut resolver = ContractResolver::new(state);
    while resolver.step(state, rng).is_some() {}
    resolver.summary(state)
}
