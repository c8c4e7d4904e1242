//! The effect and gate grammars.
//!
//! Effects: `<Condition>;<Operator>;<Amount>;<Stat>`
//! Gates:   `RunnerType:<T1>,<T2>,...;<MinCount>` or
//!          `RunnerStat:<s1>,<s2>,...;<MinSum>`
//!
//! Parsing is pure and fails fast with an error naming the offending token.
//! Re-serializing any parsed spec (`Display`) yields a string that parses to
//! an identical spec; the only normalization is `=` -> `==`.

use thiserror::Error;

use super::types::{Comparison, Condition, EffectSpec, Operator, Stat};
use crate::nodes::gates::GateCondition;
use crate::nodes::types::NodeColor;
use crate::runners::types::RunnerType;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("effect string has {found} fields, expected 4 (Condition;Operator;Amount;Stat)")]
    FieldCount { found: usize },
    #[error("gate string has {found} fields, expected 2 (Condition;Threshold)")]
    GateFieldCount { found: usize },
    #[error("unknown condition `{0}`")]
    UnknownCondition(String),
    #[error("unknown operator `{0}`")]
    UnknownOperator(String),
    #[error("unknown stat `{0}`")]
    UnknownStat(String),
    #[error("unknown runner type `{0}`")]
    UnknownRunnerType(String),
    #[error("unknown runner stat `{0}`")]
    UnknownRunnerStat(String),
    #[error("unknown node color `{0}`")]
    UnknownColor(String),
    #[error("runner stat clause `{0}` has no comparison operator")]
    MissingComparison(String),
    #[error("color combo `{0}` needs at least two colors")]
    ComboTooShort(String),
    #[error("invalid amount `{0}`")]
    InvalidAmount(String),
    #[error("invalid threshold `{0}`")]
    InvalidThreshold(String),
    #[error("unknown outcome `{0}`")]
    UnknownOutcome(String),
}

/// Parses one effect string into an [`EffectSpec`].
pub fn parse_effect(input: &str) -> Result<EffectSpec, ParseError> {
    let fields: Vec<&str> = input.split(';').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(ParseError::FieldCount {
            found: fields.len(),
        });
    }

    let condition = parse_condition(fields[0])?;
    let operator = Operator::from_symbol(fields[1])
        .ok_or_else(|| ParseError::UnknownOperator(fields[1].to_string()))?;
    let amount: f64 = fields[2]
        .parse()
        .map_err(|_| ParseError::InvalidAmount(fields[2].to_string()))?;
    let target = Stat::from_name(fields[3])
        .ok_or_else(|| ParseError::UnknownStat(fields[3].to_string()))?;

    Ok(EffectSpec {
        condition,
        operator,
        amount,
        target,
    })
}

/// Parses one gate string into a [`GateCondition`].
pub fn parse_gate(input: &str) -> Result<GateCondition, ParseError> {
    let fields: Vec<&str> = input.split(';').map(str::trim).collect();
    if fields.len() != 2 {
        return Err(ParseError::GateFieldCount {
            found: fields.len(),
        });
    }

    let threshold: u32 = fields[1]
        .parse()
        .map_err(|_| ParseError::InvalidThreshold(fields[1].to_string()))?;

    if let Some(list) = fields[0].strip_prefix("RunnerType:") {
        let types = list
            .split(',')
            .map(str::trim)
            .map(|name| {
                RunnerType::from_name(name)
                    .ok_or_else(|| ParseError::UnknownRunnerType(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GateCondition::RunnerTypeGate {
            types,
            min_count: threshold,
        })
    } else if let Some(list) = fields[0].strip_prefix("RunnerStat:") {
        let stats = list
            .split(',')
            .map(str::trim)
            .map(|keyword| {
                RunnerType::from_stat_keyword(keyword)
                    .ok_or_else(|| ParseError::UnknownRunnerStat(keyword.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GateCondition::RunnerStatGate {
            stats,
            min_sum: threshold,
        })
    } else {
        Err(ParseError::UnknownCondition(fields[0].to_string()))
    }
}

fn parse_condition(token: &str) -> Result<Condition, ParseError> {
    match token {
        "None" => return Ok(Condition::None),
        "PrevDam" => return Ok(Condition::PrevDam),
        "PrevRisk" => return Ok(Condition::PrevRisk),
        "RiskDamPair" => return Ok(Condition::RiskDamPair),
        "ColorForEach" => return Ok(Condition::ColorForEach),
        _ => {}
    }

    if let Some(name) = token.strip_prefix("RunnerType:") {
        let runner_type = RunnerType::from_name(name)
            .ok_or_else(|| ParseError::UnknownRunnerType(name.to_string()))?;
        return Ok(Condition::RunnerType(runner_type));
    }
    if let Some(name) = token.strip_prefix("NodeColor:") {
        let color = NodeColor::from_name(name)
            .ok_or_else(|| ParseError::UnknownColor(name.to_string()))?;
        return Ok(Condition::NodeColor(color));
    }
    if let Some(list) = token.strip_prefix("NodeColorCombo:") {
        let colors = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|name| {
                NodeColor::from_name(name)
                    .ok_or_else(|| ParseError::UnknownColor(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if colors.len() < 2 {
            return Err(ParseError::ComboTooShort(list.to_string()));
        }
        return Ok(Condition::NodeColorCombo(colors));
    }
    if let Some(clause) = token.strip_prefix("RunnerStat:") {
        return parse_runner_stat_clause(clause);
    }

    Err(ParseError::UnknownCondition(token.to_string()))
}

/// Parses e.g. `hacker>=5`. Two-character operators are matched before their
/// single-character prefixes; a bare `=` is accepted as `==`.
fn parse_runner_stat_clause(clause: &str) -> Result<Condition, ParseError> {
    const OPERATORS: [(&str, Comparison); 6] = [
        (">=", Comparison::Ge),
        ("<=", Comparison::Le),
        ("==", Comparison::Eq),
        (">", Comparison::Gt),
        ("<", Comparison::Lt),
        ("=", Comparison::Eq),
    ];

    for (symbol, op) in OPERATORS {
        if let Some(pos) = clause.find(symbol) {
            let keyword = clause[..pos].trim();
            let rhs = clause[pos + symbol.len()..].trim();
            let stat = RunnerType::from_stat_keyword(keyword)
                .ok_or_else(|| ParseError::UnknownRunnerStat(keyword.to_string()))?;
            let threshold: u32 = rhs
                .parse()
                .map_err(|_| ParseError::InvalidThreshold(rhs.to_string()))?;
            return Ok(Condition::RunnerStat {
                stat,
                op,
                threshold,
            });
        }
    }

    Err(ParseError::MissingComparison(clause.to_string()))
}
