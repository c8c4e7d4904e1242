//! Condition evaluation: every condition yields a match count.
//!
//! Evaluation is a pure function of the selected nodes, the configured team,
//! and the prevention result for this pass. Conditions never see each other,
//! so there is no ordering dependency within a pass.

use std::collections::HashSet;

use super::accumulator::PreventionResult;
use super::types::Condition;
use crate::nodes::types::{Node, NodeColor};
use crate::runners::types::{Runner, RunnerType};

/// Everything a condition may read.
#[derive(Debug, Clone)]
pub struct EvalContext<'a> {
    /// The hired team in roster order.
    pub team: Vec<&'a Runner>,
    /// Currently selected nodes (gates included; color counting filters them).
    pub selected: Vec<&'a Node>,
    /// Prevention for this pass. `None` until the first accumulation pass has
    /// produced Grit/Veil.
    pub prevention: Option<PreventionResult>,
}

impl<'a> EvalContext<'a> {
    pub fn new(selected: Vec<&'a Node>, team: Vec<&'a Runner>) -> Self {
        Self {
            team,
            selected,
            prevention: None,
        }
    }

    pub fn with_prevention(mut self, prevention: PreventionResult) -> Self {
        self.prevention = Some(prevention);
        self
    }

    /// Selected non-Gate nodes of the given color. Gate colors are
    /// display-only.
    fn color_count(&self, color: NodeColor) -> u32 {
        self.selected
            .iter()
            .filter(|n| !n.is_gate() && n.color == color)
            .count() as u32
    }

    fn team_stat_total(&self, stat: RunnerType) -> u32 {
        self.team.iter().map(|r| r.stats.get(stat)).sum()
    }
}

/// Returns how many times the condition currently matches.
pub fn count_matches(condition: &Condition, ctx: &EvalContext) -> u32 {
    match condition {
        Condition::None => 1,
        Condition::RunnerType(t) => {
            ctx.team.iter().filter(|r| r.runner_type == *t).count() as u32
        }
        Condition::NodeColor(color) => ctx.color_count(*color),
        Condition::NodeColorCombo(colors) => {
            // Complete sets only: bounded by the scarcest required color.
            colors
                .iter()
                .map(|c| ctx.color_count(*c))
                .min()
                .unwrap_or(0)
        }
        Condition::RunnerStat { stat, op, threshold } => {
            // Threshold semantics on the summed stat; counts would be
            // meaningless here.
            if op.holds(ctx.team_stat_total(*stat), *threshold) {
                1
            } else {
                0
            }
        }
        Condition::PrevDam => ctx.prevention.map_or(0, |p| p.damage_prevented),
        Condition::PrevRisk => ctx.prevention.map_or(0, |p| p.risk_prevented),
        Condition::RiskDamPair => ctx
            .prevention
            .map_or(0, |p| p.damage_prevented.min(p.risk_prevented)),
        Condition::ColorForEach => {
            let distinct: HashSet<NodeColor> = ctx
                .selected
                .iter()
                .filter(|n| !n.is_gate())
                .map(|n| n.color)
                .collect();
            distinct.len() as u32
        }
    }
}
