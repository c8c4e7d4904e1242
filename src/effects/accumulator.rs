//! Pool accumulation: applying effects in node order, prevention, and the
//! two-pass recompute.
//!
//! The pool is never patched incrementally. Every recompute starts from a
//! zeroed pool and replays all selected effects in stable (layer, slot, id)
//! order, so the result is a pure function of the selection, the team, and
//! nothing else.

use serde::{Deserialize, Serialize};

use super::eval::{count_matches, EvalContext};
use super::types::{EffectSpec, Operator, Stat};
use crate::core::constants::{GRIT_PER_DAMAGE_PREVENTED, VEIL_PER_RISK_PREVENTED};
use crate::nodes::types::Node;
use crate::runners::types::Runner;

/// The five running stat totals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PoolState {
    pub damage: f64,
    pub risk: f64,
    pub money: f64,
    pub grit: f64,
    pub veil: f64,
}

impl PoolState {
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Damage => self.damage,
            Stat::Risk => self.risk,
            Stat::Money => self.money,
            Stat::Grit => self.grit,
            Stat::Veil => self.veil,
        }
    }

    pub fn set(&mut self, stat: Stat, value: f64) {
        match stat {
            Stat::Damage => self.damage = value,
            Stat::Risk => self.risk = value,
            Stat::Money => self.money = value,
            Stat::Grit => self.grit = value,
            Stat::Veil => self.veil = value,
        }
    }
}

/// Damage/Risk prevented by Grit/Veil at the fixed 2:1 ratio.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreventionResult {
    pub damage_prevented: u32,
    pub risk_prevented: u32,
}

/// Output of one full recompute pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolBreakdown {
    pub pool: PoolState,
    pub prevention: PreventionResult,
    pub unprevented_damage: u32,
    pub unprevented_risk: u32,
    /// Recoverable anomalies, one entry per distinct offender per recompute.
    pub warnings: Vec<String>,
}

/// Derives prevention from the pool's Grit/Veil. Negative pools prevent
/// nothing.
pub fn compute_prevention(pool: &PoolState) -> PreventionResult {
    PreventionResult {
        damage_prevented: (pool.grit.max(0.0) / GRIT_PER_DAMAGE_PREVENTED).floor() as u32,
        risk_prevented: (pool.veil.max(0.0) / VEIL_PER_RISK_PREVENTED).floor() as u32,
    }
}

/// Applies one effect scaled by its match count. A count of zero skips the
/// effect entirely, so multiplicative operators never touch unmatched stats.
/// Returns a warning message instead of applying when `/` has a zero amount.
pub fn apply_effect(pool: &mut PoolState, effect: &EffectSpec, count: u32) -> Option<String> {
    if count == 0 {
        return None;
    }

    let current = pool.get(effect.target);
    let scale = count as f64;
    let next = match effect.operator {
        Operator::Add => current + effect.amount * scale,
        Operator::Subtract => current - effect.amount * scale,
        // Percentage boost compounds additively per matched unit
        Operator::Percent => current + current * (effect.amount / 100.0) * scale,
        Operator::Multiply => current * effect.amount.powi(count as i32),
        Operator::Divide => {
            if effect.amount == 0.0 {
                return Some(format!("`{}` divides by zero amount, skipped", effect));
            }
            current / effect.amount.powi(count as i32)
        }
    };
    pool.set(effect.target, next);
    None
}

/// Recomputes the pool from scratch for the given selection and team.
///
/// Two fixed passes: pass 1 applies every prevention-independent effect,
/// prevention derives from the resulting Grit/Veil, and pass 2 applies only
/// effects conditioned on `PrevDam`/`PrevRisk`/`RiskDamPair`. Two passes
/// rather than lazy evaluation guarantees termination.
pub fn recompute_pool(selected: &[&Node], team: &[&Runner]) -> PoolBreakdown {
    let mut nodes: Vec<&Node> = selected.to_vec();
    nodes.sort_by_key(|n| n.order_key());

    let mut pool = PoolState::default();
    let mut warnings: Vec<String> = Vec::new();

    let ctx = EvalContext::new(nodes.clone(), team.to_vec());
    for node in &nodes {
        for effect in &node.effects {
            if effect.condition.depends_on_prevention() {
                continue;
            }
            let count = count_matches(&effect.condition, &ctx);
            record_warning(&mut warnings, *node, apply_effect(&mut pool, effect, count));
        }
    }

    let prevention = compute_prevention(&pool);

    let ctx = ctx.with_prevention(prevention);
    for node in &nodes {
        for effect in &node.effects {
            if !effect.condition.depends_on_prevention() {
                continue;
            }
            let count = count_matches(&effect.condition, &ctx);
            record_warning(&mut warnings, *node, apply_effect(&mut pool, effect, count));
        }
    }

    let unprevented_damage = whole_points(pool.damage).saturating_sub(prevention.damage_prevented);
    let unprevented_risk = whole_points(pool.risk).saturating_sub(prevention.risk_prevented);

    PoolBreakdown {
        pool,
        prevention,
        unprevented_damage,
        unprevented_risk,
        warnings,
    }
}

/// Pool stats are fractional; damage/risk convert to whole points at the
/// prevention boundary.
fn whole_points(value: f64) -> u32 {
    value.max(0.0).floor() as u32
}

fn record_warning(warnings: &mut Vec<String>, node: &Node, warning: Option<String>) {
    if let Some(w) = warning {
        let message = format!("node {}: {}", node.id, w);
        if !warnings.contains(&message) {
            warnings.push(message);
        }
    }
}
