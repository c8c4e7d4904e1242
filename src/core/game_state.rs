use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::contract::types::Contract;
use crate::core::constants::STARTING_MONEY;
use crate::effects::accumulator::{recompute_pool, PoolBreakdown};
use crate::nodes::gates::evaluate_gate;
use crate::nodes::types::Node;
use crate::runners::roster::Roster;
use crate::runners::types::Runner;

/// The player's own ledger: money, accumulated heat, and level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerState {
    pub money: i64,
    pub risk: u32,
    pub level: u32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            money: STARTING_MONEY,
            risk: 0,
            level: 1,
        }
    }
}

/// Everything the engine needs to evaluate a contract in progress.
///
/// The node tree is immutable once loaded; the selected-id set is the one
/// piece of UI-driven state the core keeps. Pools are never stored here:
/// they are a pure function of the state and are recomputed on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: PlayerState,
    pub roster: Roster,
    pub contract: Contract,
    pub selected: BTreeSet<u32>,
}

impl GameState {
    pub fn new(contract: Contract) -> Self {
        Self {
            player: PlayerState::default(),
            roster: Roster::new(),
            contract,
            selected: BTreeSet::new(),
        }
    }

    /// The hired team in roster order.
    pub fn team(&self) -> Vec<&Runner> {
        self.roster.hired()
    }

    /// Selected nodes, resolved against the contract. Dangling selected ids
    /// are skipped rather than treated as an error.
    pub fn selected_nodes(&self) -> Vec<&Node> {
        self.selected
            .iter()
            .filter_map(|id| self.contract.node(*id))
            .collect()
    }

    /// Recomputes the full pool for the current selection and team.
    pub fn recompute_pool(&self) -> PoolBreakdown {
        recompute_pool(&self.selected_nodes(), &self.team())
    }

    /// Whether the node's gate (if any) is currently open for the team.
    pub fn gate_open(&self, node: &Node) -> bool {
        match &node.gate {
            Some(gate) => evaluate_gate(gate, &self.team()),
            None => true,
        }
    }

    /// A node is available when it exists, is not already selected, its gate
    /// is open, and it touches the current selection (layer-0 nodes are
    /// always reachable).
    pub fn is_node_available(&self, node_id: u32) -> bool {
        let node = match self.contract.node(node_id) {
            Some(node) => node,
            None => return false,
        };
        if self.selected.contains(&node_id) {
            return false;
        }
        if !self.gate_open(node) {
            return false;
        }
        if node.layer == 0 {
            return true;
        }
        // Connections are stored one-way in authored data; treat them as
        // undirected when walking the tree.
        node.connections.iter().any(|c| self.selected.contains(c))
            || self
                .selected_nodes()
                .iter()
                .any(|s| s.connections.contains(&node_id))
    }

    /// Selects a node if it is currently available. Returns whether the
    /// selection changed.
    pub fn select_node(&mut self, node_id: u32) -> bool {
        if self.is_node_available(node_id) {
            self.selected.insert(node_id)
        } else {
            false
        }
    }

    /// Deselects a node. Returns whether the selection changed.
    pub fn deselect_node(&mut self, node_id: u32) -> bool {
        self.selected.remove(&node_id)
    }

    /// Node ids currently available for selection, in tree order.
    pub fn available_nodes(&self) -> Vec<u32> {
        self.contract
            .nodes
            .iter()
            .filter(|n| self.is_node_available(n.id))
            .map(|n| n.id)
            .collect()
    }
}
