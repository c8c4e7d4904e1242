//! Contract documents: the JSON authoring format and the built-in demo tree.
//!
//! Documents carry effects and gates in their string grammar. A malformed
//! effect or gate makes that clause inert and produces an author-facing
//! diagnostic; it never breaks loading the rest of the contract.

use serde::{Deserialize, Serialize};

use super::types::{default_outcome_table, Contract, OutcomeEffect, OutcomeTable};
use crate::core::constants::MAX_EFFECTS_PER_NODE;
use crate::effects::parser::{parse_effect, parse_gate};
use crate::effects::types::{Comparison, Condition, EffectSpec, Operator, Stat};
use crate::nodes::gates::GateCondition;
use crate::nodes::types::{Node, NodeColor, NodeType};
use crate::runners::types::RunnerType;

/// One node as authored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDoc {
    pub id: u32,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub color: NodeColor,
    pub layer: u32,
    pub slot: u32,
    #[serde(default)]
    pub effects: Vec<String>,
    #[serde(default)]
    pub gate: Option<String>,
    #[serde(default)]
    pub connections: Vec<u32>,
}

/// A contract as authored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractDoc {
    pub name: String,
    pub nodes: Vec<NodeDoc>,
    /// Outcome rows in authoring syntax. Empty means the standard table.
    #[serde(default)]
    pub outcomes: Vec<String>,
}

/// Result of loading a document: the playable contract plus any authoring
/// diagnostics. Diagnostics are for the contract author, never the player.
#[derive(Debug, Clone)]
pub struct LoadedContract {
    pub contract: Contract,
    pub diagnostics: Vec<String>,
}

/// Parses a JSON contract document.
pub fn load_contract(json: &str) -> Result<LoadedContract, serde_json::Error> {
    let doc: ContractDoc = serde_json::from_str(json)?;
    Ok(contract_from_doc(doc))
}

/// Converts an authored document into a playable contract, turning bad
/// clauses inert.
pub fn contract_from_doc(doc: ContractDoc) -> LoadedContract {
    let mut diagnostics = Vec::new();
    let mut nodes = Vec::with_capacity(doc.nodes.len());

    for node_doc in doc.nodes {
        let mut effects = Vec::new();
        for raw in &node_doc.effects {
            if effects.len() >= MAX_EFFECTS_PER_NODE {
                diagnostics.push(format!(
                    "node {}: effect `{}` dropped, nodes carry at most {} effects",
                    node_doc.id, raw, MAX_EFFECTS_PER_NODE
                ));
                continue;
            }
            match parse_effect(raw) {
                Ok(spec) => effects.push(spec),
                Err(err) => diagnostics.push(format!(
                    "node {}: effect `{}` is inert: {}",
                    node_doc.id, raw, err
                )),
            }
        }

        let gate = match &node_doc.gate {
            Some(raw) => match parse_gate(raw) {
                Ok(gate) => Some(gate),
                Err(err) => {
                    diagnostics.push(format!(
                        "node {}: gate `{}` ignored: {}",
                        node_doc.id, raw, err
                    ));
                    None
                }
            },
            None => None,
        };

        nodes.push(Node {
            id: node_doc.id,
            node_type: node_doc.node_type,
            color: node_doc.color,
            layer: node_doc.layer,
            slot: node_doc.slot,
            effects,
            gate,
            connections: node_doc.connections,
        });
    }

    let outcomes = if doc.outcomes.is_empty() {
        default_outcome_table()
    } else {
        let mut table = OutcomeTable::default();
        for row in &doc.outcomes {
            match OutcomeEffect::parse(row) {
                Ok(outcome) => table.push(outcome),
                // Inert rows keep their slot so the die size is unchanged
                Err(err) => {
                    table.push(OutcomeEffect::Nothing);
                    diagnostics.push(format!("outcome `{}` is inert: {}", row, err));
                }
            }
        }
        table
    };

    LoadedContract {
        contract: Contract {
            name: doc.name,
            nodes,
            outcomes,
        },
        diagnostics,
    }
}

fn eff(condition: Condition, operator: Operator, amount: f64, target: Stat) -> EffectSpec {
    EffectSpec {
        condition,
        operator,
        amount,
        target,
    }
}

fn node(
    id: u32,
    node_type: NodeType,
    color: NodeColor,
    layer: u32,
    slot: u32,
    effects: Vec<EffectSpec>,
    gate: Option<GateCondition>,
    connections: Vec<u32>,
) -> Node {
    Node {
        id,
        node_type,
        color,
        layer,
        slot,
        effects,
        gate,
        connections,
    }
}

/// Returns the built-in "Warehouse Extraction" tree: three branches over four
/// layers, exercising every condition kind plus a gated branch.
pub fn demo_contract() -> Contract {
    use Condition as C;
    use NodeColor::*;
    use NodeType::*;
    use Operator as Op;
    use Stat::*;

    let nodes = vec![
        // Layer 0: entry picks
        node(1, Normal, Red, 0, 0, vec![eff(C::None, Op::Add, 400.0, Money), eff(C::None, Op::Add, 2.0, Damage)], None, vec![4, 5]),
        node(2, Normal, Blue, 0, 1, vec![eff(C::None, Op::Add, 3.0, Damage), eff(C::None, Op::Add, 2.0, Risk)], None, vec![5, 6]),
        node(3, Normal, Green, 0, 2, vec![eff(C::None, Op::Add, 4.0, Grit)], None, vec![6]),
        // Layer 1: the crew starts to matter
        node(4, Normal, Red, 1, 0, vec![eff(C::RunnerType(RunnerType::Muscle), Op::Add, 2.0, Damage), eff(C::None, Op::Add, 150.0, Money)], None, vec![7]),
        node(5, Synergy, Purple, 1, 1, vec![eff(C::NodeColorCombo(vec![Red, Blue]), Op::Add, 150.0, Money)], None, vec![8]),
        node(6, Normal, Yellow, 1, 2, vec![eff(C::None, Op::Add, 4.0, Veil), eff(C::None, Op::Add, 1.0, Risk)], None, vec![9]),
        // Layer 2: a gated branch and stat checks
        node(
            7,
            Gate,
            Orange,
            2,
            0,
            vec![],
            Some(GateCondition::RunnerTypeGate {
                types: vec![RunnerType::Hacker, RunnerType::Muscle],
                min_count: 2,
            }),
            vec![10],
        ),
        node(
            8,
            Normal,
            Blue,
            2,
            1,
            vec![eff(
                C::RunnerStat {
                    stat: RunnerType::Hacker,
                    op: Comparison::Ge,
                    threshold: 5,
                },
                Op::Add,
                6.0,
                Veil,
            )],
            None,
            vec![11],
        ),
        node(9, Synergy, Green, 2, 2, vec![eff(C::ColorForEach, Op::Add, 75.0, Money)], None, vec![12]),
        // Layer 3: payoffs that lean on prevention
        node(10, Normal, Red, 3, 0, vec![eff(C::None, Op::Percent, 25.0, Money)], None, vec![]),
        node(11, Normal, Purple, 3, 1, vec![eff(C::PrevDam, Op::Add, 50.0, Money)], None, vec![]),
        node(12, Normal, Orange, 3, 2, vec![eff(C::RiskDamPair, Op::Subtract, 1.0, Risk), eff(C::None, Op::Add, 3.0, Risk)], None, vec![]),
    ];

    Contract {
        name: "Warehouse Extraction".to_string(),
        nodes,
        outcomes: default_outcome_table(),
    }
}
