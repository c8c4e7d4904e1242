use serde::{Deserialize, Serialize};

use crate::runners::types::LifecycleState;

/// Where the resolver is in its fixed, sequential transition order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResolutionPhase {
    Idle,
    EvaluatingPrevention,
    /// 1-based index of the next damage roll.
    RollingDamage(u32),
    ApplyingRewards,
    LevelingUp,
    Complete,
}

/// One narrated resolution step. Append-only: events are never mutated after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolutionEvent {
    pub index: u32,
    /// The number rolled against the outcome table, for damage-roll events.
    pub rolled: Option<u32>,
    pub description: String,
    /// The runner hit by an Injury/Death outcome, when one was.
    pub runner_id: Option<String>,
}

/// Before/after view of one team member across a resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunnerOutcome {
    pub runner_id: String,
    pub name: String,
    pub lifecycle_before: LifecycleState,
    pub lifecycle_after: LifecycleState,
    pub level_before: u32,
    pub level_after: u32,
}

/// Everything the presentation layer needs after a contract resolves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolutionSummary {
    pub events: Vec<ResolutionEvent>,
    pub reward_paid: i64,
    pub risk_applied: u32,
    pub runners: Vec<RunnerOutcome>,
}
