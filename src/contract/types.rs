use std::fmt;

use serde::{Deserialize, Serialize};

use crate::effects::parser::ParseError;
use crate::nodes::types::Node;

/// One row of the damage outcome table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutcomeEffect {
    Injury,
    Death,
    /// Dock the running reward total by the given percentage.
    Reduce(u32),
    /// Boost the running reward total by the given percentage.
    Extra(u32),
    Nothing,
}

impl OutcomeEffect {
    /// Parses the authoring syntax: `Injury`, `Death`, `Nothing`,
    /// `Reduce <X>`, `Extra <X>`.
    pub fn parse(syntax: &str) -> Result<OutcomeEffect, ParseError> {
        let syntax = syntax.trim();
        match syntax {
            "Injury" => return Ok(OutcomeEffect::Injury),
            "Death" => return Ok(OutcomeEffect::Death),
            "Nothing" => return Ok(OutcomeEffect::Nothing),
            _ => {}
        }
        if let Some(percent) = syntax.strip_prefix("Reduce ") {
            return percent
                .trim()
                .parse()
                .map(OutcomeEffect::Reduce)
                .map_err(|_| ParseError::InvalidAmount(percent.trim().to_string()));
        }
        if let Some(percent) = syntax.strip_prefix("Extra ") {
            return percent
                .trim()
                .parse()
                .map(OutcomeEffect::Extra)
                .map_err(|_| ParseError::InvalidAmount(percent.trim().to_string()));
        }
        Err(ParseError::UnknownOutcome(syntax.to_string()))
    }
}

impl fmt::Display for OutcomeEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeEffect::Injury => write!(f, "Injury"),
            OutcomeEffect::Death => write!(f, "Death"),
            OutcomeEffect::Reduce(x) => write!(f, "Reduce {}", x),
            OutcomeEffect::Extra(x) => write!(f, "Extra {}", x),
            OutcomeEffect::Nothing => write!(f, "Nothing"),
        }
    }
}

/// Ordered damage outcome rows. A roll of `r` in `[1, len]` maps to row
/// `r - 1`; the die is always bounded by the current table size, never a
/// hardcoded count.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutcomeTable {
    entries: Vec<OutcomeEffect>,
}

impl OutcomeTable {
    pub fn new(entries: Vec<OutcomeEffect>) -> Self {
        Self { entries }
    }

    pub fn from_syntax(rows: &[&str]) -> Result<OutcomeTable, ParseError> {
        let entries = rows
            .iter()
            .map(|row| OutcomeEffect::parse(row))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The die size: rolls are drawn uniformly from `[1, max_roll()]`.
    pub fn max_roll(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn entry_for_roll(&self, roll: u32) -> Option<OutcomeEffect> {
        if roll == 0 {
            return None;
        }
        self.entries.get(roll as usize - 1).copied()
    }

    pub fn push(&mut self, entry: OutcomeEffect) {
        self.entries.push(entry);
    }
}

/// The standard street-job outcome spread used when a contract document does
/// not carry its own table.
pub fn default_outcome_table() -> OutcomeTable {
    OutcomeTable::new(vec![
        OutcomeEffect::Nothing,
        OutcomeEffect::Injury,
        OutcomeEffect::Nothing,
        OutcomeEffect::Reduce(10),
        OutcomeEffect::Injury,
        OutcomeEffect::Extra(10),
        OutcomeEffect::Nothing,
        OutcomeEffect::Reduce(25),
        OutcomeEffect::Injury,
        OutcomeEffect::Death,
    ])
}

/// A loaded contract: an immutable node tree plus its outcome table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    pub name: String,
    pub nodes: Vec<Node>,
    pub outcomes: OutcomeTable,
}

impl Contract {
    pub fn node(&self, id: u32) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
