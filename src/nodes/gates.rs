//! Gate conditions: boolean thresholds over the configured team.
//!
//! Gates answer "is this threshold met", never "how many matches", so they
//! get their own evaluator instead of reusing the counting conditions used
//! by effects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::runners::types::{Runner, RunnerType};

/// Threshold condition attached to a Gate node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum GateCondition {
    /// True iff the team fields at least `min_count` runners whose type is
    /// any of `types`.
    RunnerTypeGate {
        types: Vec<RunnerType>,
        min_count: u32,
    },
    /// True iff the named stats summed across the whole team reach `min_sum`.
    RunnerStatGate {
        stats: Vec<RunnerType>,
        min_sum: u32,
    },
}

impl fmt::Display for GateCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateCondition::RunnerTypeGate { types, min_count } => {
                let list: Vec<&str> = types.iter().map(|t| t.name()).collect();
                write!(f, "RunnerType:{};{}", list.join(","), min_count)
            }
            GateCondition::RunnerStatGate { stats, min_sum } => {
                let list: Vec<&str> = stats.iter().map(|s| s.stat_keyword()).collect();
                write!(f, "RunnerStat:{};{}", list.join(","), min_sum)
            }
        }
    }
}

/// Evaluates a gate against the hired team.
pub fn evaluate_gate(gate: &GateCondition, team: &[&Runner]) -> bool {
    match gate {
        GateCondition::RunnerTypeGate { types, min_count } => {
            let count = team
                .iter()
                .filter(|r| types.contains(&r.runner_type))
                .count() as u32;
            count >= *min_count
        }
        GateCondition::RunnerStatGate { stats, min_sum } => {
            let sum: u32 = team
                .iter()
                .map(|r| stats.iter().map(|s| r.stats.get(*s)).sum::<u32>())
                .sum();
            sum >= *min_sum
        }
    }
}
