use std::fmt;

use serde::{Deserialize, Serialize};

use crate::nodes::types::NodeColor;
use crate::runners::types::RunnerType;

/// The five pool stats an effect can target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Stat {
    Damage,
    Risk,
    Money,
    Grit,
    Veil,
}

impl Stat {
    pub fn all() -> [Stat; 5] {
        [Stat::Damage, Stat::Risk, Stat::Money, Stat::Grit, Stat::Veil]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stat::Damage => "Damage",
            Stat::Risk => "Risk",
            Stat::Money => "Money",
            Stat::Grit => "Grit",
            Stat::Veil => "Veil",
        }
    }

    pub fn from_name(name: &str) -> Option<Stat> {
        Stat::all().into_iter().find(|s| s.name() == name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percent,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Percent => "%",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            "%" => Some(Operator::Percent),
            _ => None,
        }
    }
}

/// Comparison operator inside a `RunnerStat:` clause.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Comparison {
    Ge,
    Le,
    Gt,
    Lt,
    Eq,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Ge => ">=",
            Comparison::Le => "<=",
            Comparison::Gt => ">",
            Comparison::Lt => "<",
            Comparison::Eq => "==",
        }
    }

    pub fn holds(&self, lhs: u32, rhs: u32) -> bool {
        match self {
            Comparison::Ge => lhs >= rhs,
            Comparison::Le => lhs <= rhs,
            Comparison::Gt => lhs > rhs,
            Comparison::Lt => lhs < rhs,
            Comparison::Eq => lhs == rhs,
        }
    }
}

/// Condition attached to an effect. Evaluation always yields a match count,
/// never a boolean; see [`crate::effects::eval::count_matches`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Condition {
    /// Always one match: the effect applies unconditionally, once.
    None,
    /// One match per configured runner of the given type.
    RunnerType(RunnerType),
    /// One match per selected non-Gate node of the given color.
    NodeColor(NodeColor),
    /// One match per complete set of the listed colors, bounded by the
    /// scarcest color.
    NodeColorCombo(Vec<NodeColor>),
    /// 0/1 threshold over the stat summed across the whole team.
    RunnerStat {
        stat: RunnerType,
        op: Comparison,
        threshold: u32,
    },
    /// One match per point of prevented damage.
    PrevDam,
    /// One match per point of prevented risk.
    PrevRisk,
    /// One match per matched pair of prevented damage and prevented risk.
    RiskDamPair,
    /// One match per distinct color among selected non-Gate nodes.
    ColorForEach,
}

impl Condition {
    /// Prevention-dependent conditions are deferred to the second
    /// accumulation pass.
    pub fn depends_on_prevention(&self) -> bool {
        matches!(
            self,
            Condition::PrevDam | Condition::PrevRisk | Condition::RiskDamPair
        )
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::None => write!(f, "None"),
            Condition::RunnerType(t) => write!(f, "RunnerType:{}", t.name()),
            Condition::NodeColor(c) => write!(f, "NodeColor:{}", c.name()),
            Condition::NodeColorCombo(colors) => {
                let list: Vec<&str> = colors.iter().map(|c| c.name()).collect();
                write!(f, "NodeColorCombo:{}", list.join(","))
            }
            Condition::RunnerStat { stat, op, threshold } => {
                write!(f, "RunnerStat:{}{}{}", stat.stat_keyword(), op.symbol(), threshold)
            }
            Condition::PrevDam => write!(f, "PrevDam"),
            Condition::PrevRisk => write!(f, "PrevRisk"),
            Condition::RiskDamPair => write!(f, "RiskDamPair"),
            Condition::ColorForEach => write!(f, "ColorForEach"),
        }
    }
}

/// A fully parsed effect: condition, operator, amount, target stat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffectSpec {
    pub condition: Condition,
    pub operator: Operator,
    pub amount: f64,
    pub target: Stat,
}

impl fmt::Display for EffectSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{};{}",
            self.condition,
            self.operator.symbol(),
            self.amount,
            self.target.name()
        )
    }
}
